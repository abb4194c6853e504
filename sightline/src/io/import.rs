use nalgebra::{Point2, Quaternion, UnitQuaternion, Vector3};

use crate::error::{GeomError, Result};
use crate::geometry::primitives::{
    Cone, Ellipsoid, Line, LineString, Plane, Point, PointSet, Polygon, Pyramid, Ray, Segment,
    Sphere,
};
use crate::io::ext_repr::{ExtPolygon, ExtPrimitive, ExtVector};

/// Any imported primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Point(Point),
    PointSet(PointSet),
    Line(Line),
    Ray(Ray),
    Segment(Segment),
    LineString(LineString),
    Plane(Plane),
    Polygon(Polygon),
    Sphere(Sphere),
    Ellipsoid(Ellipsoid),
    Cone(Cone),
    Pyramid(Pyramid),
}

impl Primitive {
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Point(_) => "point",
            Primitive::PointSet(_) => "point set",
            Primitive::Line(_) => "line",
            Primitive::Ray(_) => "ray",
            Primitive::Segment(_) => "segment",
            Primitive::LineString(_) => "line string",
            Primitive::Plane(_) => "plane",
            Primitive::Polygon(_) => "polygon",
            Primitive::Sphere(_) => "sphere",
            Primitive::Ellipsoid(_) => "ellipsoid",
            Primitive::Cone(_) => "cone",
            Primitive::Pyramid(_) => "pyramid",
        }
    }
}

/// Converts an external primitive into a library one, construction errors are propagated.
pub fn import_primitive(ext: &ExtPrimitive) -> Result<Primitive> {
    let primitive = match ext {
        ExtPrimitive::Point(p) => Primitive::Point(import_point(p)),
        ExtPrimitive::PointSet(points) => {
            Primitive::PointSet(points.iter().map(import_point).collect())
        }
        ExtPrimitive::Line { origin, direction } => {
            Primitive::Line(Line::new(import_point(origin), import_vector(direction)))
        }
        ExtPrimitive::Ray { origin, direction } => {
            Primitive::Ray(Ray::new(import_point(origin), import_vector(direction)))
        }
        ExtPrimitive::Segment { first, second } => {
            Primitive::Segment(Segment::new(import_point(first), import_point(second)))
        }
        ExtPrimitive::LineString(points) => {
            Primitive::LineString(points.iter().map(import_point).collect())
        }
        ExtPrimitive::Plane { point, normal } => {
            Primitive::Plane(Plane::new(import_point(point), import_vector(normal)))
        }
        ExtPrimitive::Polygon(polygon) => Primitive::Polygon(import_polygon(polygon)),
        ExtPrimitive::Sphere { center, radius } => {
            Primitive::Sphere(Sphere::new(import_point(center), *radius))
        }
        ExtPrimitive::Ellipsoid {
            center,
            semi_axes: [a, b, c],
            orientation,
        } => Primitive::Ellipsoid(Ellipsoid::new(
            import_point(center),
            *a,
            *b,
            *c,
            import_orientation(orientation)?,
        )?),
        ExtPrimitive::Cone { apex, axis, angle } => {
            Primitive::Cone(Cone::new(import_point(apex), import_vector(axis), *angle))
        }
        ExtPrimitive::Pyramid { base, apex } => {
            Primitive::Pyramid(Pyramid::new(import_polygon(base), import_point(apex)))
        }
    };
    Ok(primitive)
}

pub fn import_polygon(ext: &ExtPolygon) -> Polygon {
    Polygon::new(
        ext.vertices.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        import_point(&ext.origin),
        import_vector(&ext.x_axis),
        import_vector(&ext.y_axis),
    )
}

fn import_point(p: &ExtVector) -> Point {
    Point(p[0], p[1], p[2])
}

fn import_vector(v: &ExtVector) -> Vector3<f64> {
    Vector3::new(v[0], v[1], v[2])
}

fn import_orientation(&[w, x, y, z]: &[f64; 4]) -> Result<UnitQuaternion<f64>> {
    let q = Quaternion::new(w, x, y, z);
    match q.norm() > 0.0 {
        true => Ok(UnitQuaternion::from_quaternion(q)),
        false => Err(GeomError::InvalidConstruction(
            "orientation quaternion is zero".into(),
        )),
    }
}

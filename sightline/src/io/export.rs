use nalgebra::Vector3;

use crate::geometry::primitives::Point;
use crate::geometry::{Intersection, Object};
use crate::io::ext_repr::{ExtIntersection, ExtPrimitive, ExtVector};

/// Exports an [`Intersection`] by exporting every object it holds
pub fn export_intersection(intersection: &Intersection) -> ExtIntersection {
    ExtIntersection {
        kind: intersection.kind(),
        objects: intersection.objects().iter().map(export_object).collect(),
    }
}

pub fn export_object(object: &Object) -> ExtPrimitive {
    match object {
        Object::Point(p) => ExtPrimitive::Point(export_point(p)),
        Object::PointSet(ps) => ExtPrimitive::PointSet(ps.iter().map(export_point).collect()),
        Object::Line(l) => ExtPrimitive::Line {
            origin: export_point(&l.origin),
            direction: export_vector(&l.direction),
        },
        Object::Ray(r) => ExtPrimitive::Ray {
            origin: export_point(&r.origin),
            direction: export_vector(&r.direction),
        },
        Object::Segment(s) => ExtPrimitive::Segment {
            first: export_point(&s.first),
            second: export_point(&s.second),
        },
        Object::LineString(ls) => ExtPrimitive::LineString(ls.iter().map(export_point).collect()),
        Object::Plane(p) => ExtPrimitive::Plane {
            point: export_point(&p.point),
            normal: export_vector(&p.normal),
        },
        Object::Sphere(s) => ExtPrimitive::Sphere {
            center: export_point(&s.center),
            radius: s.radius,
        },
        Object::Ellipsoid(e) => {
            let q = e.orientation.quaternion();
            ExtPrimitive::Ellipsoid {
                center: export_point(&e.center),
                semi_axes: export_vector(&e.semi_axes),
                orientation: [q.w, q.i, q.j, q.k],
            }
        }
    }
}

fn export_point(p: &Point) -> ExtVector {
    [p.0, p.1, p.2]
}

fn export_vector(v: &Vector3<f64>) -> ExtVector {
    [v.x, v.y, v.z]
}

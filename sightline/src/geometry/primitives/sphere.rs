use crate::error::{Result, ensure_defined};
use crate::geometry::Intersection;
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{
    Contains, Defined, IntersectionWith, Intersects, SampledIntersection, Transformable,
};
use crate::geometry::primitives::{
    Cone, Ellipsoid, Line, Plane, Point, PointSet, Pyramid, Ray, Segment,
};
use crate::util::DEFAULT_DISCRETIZATION_LEVEL;

/// Sphere surface, all queries are answered by the equivalent [`Ellipsoid`]
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub(crate) center: Point,
    pub(crate) radius: f64,
}

impl Sphere {
    pub fn new(center: Point, radius: f64) -> Self {
        Sphere { center, radius }
    }

    pub fn unit(center: Point) -> Self {
        Sphere::new(center, 1.0)
    }

    pub fn undefined() -> Self {
        Sphere::new(Point::undefined(), f64::NAN)
    }

    pub fn center(&self) -> Result<Point> {
        ensure_defined!(self, "Sphere");
        Ok(self.center)
    }

    pub fn radius(&self) -> Result<f64> {
        ensure_defined!(self, "Sphere");
        Ok(self.radius)
    }

    pub fn is_unitary(&self) -> Result<bool> {
        ensure_defined!(self, "Sphere");
        Ok(self.radius == 1.0)
    }

    /// Fails on a negative radius
    pub fn to_ellipsoid(&self) -> Result<Ellipsoid> {
        ensure_defined!(self, "Sphere");
        Ellipsoid::sphere(self.center, self.radius)
    }

    pub fn intersection_with_ray(&self, ray: &Ray, only_in_sight: bool) -> Result<Intersection> {
        self.to_ellipsoid()?.intersection_with_ray(ray, only_in_sight)
    }
}

impl Defined for Sphere {
    fn is_defined(&self) -> bool {
        self.center.is_defined() && self.radius.is_finite()
    }
}

impl PartialEq for Sphere {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.center == other.center
            && self.radius == other.radius
    }
}

impl Transformable for Sphere {
    fn apply_transformation(&mut self, t: &Transformation) -> Result<&mut Self> {
        ensure_defined!(t, "Transformation");
        ensure_defined!(self, "Sphere");
        self.center = t.apply_to_point(&self.center);
        Ok(self)
    }
}

/// Forwards a query to the equivalent ellipsoid
macro_rules! via_ellipsoid {
    ($query:ident, $method:ident, $ret:ty, $($other:ty),+) => {
        $(
            impl $query<$other> for Sphere {
                fn $method(&self, other: &$other) -> Result<$ret> {
                    self.to_ellipsoid()?.$method(other)
                }
            }
        )+
    };
}

via_ellipsoid!(Contains, contains, bool, Point, PointSet);
via_ellipsoid!(Intersects, intersects, bool, Point, PointSet, Line, Ray, Segment, Plane);
via_ellipsoid!(IntersectionWith, intersection_with, Intersection, Line, Ray, Segment);

impl Intersects<Cone> for Sphere {
    fn intersects(&self, cone: &Cone) -> Result<bool> {
        cone.intersects_sampled(self, DEFAULT_DISCRETIZATION_LEVEL)
    }
}

impl Intersects<Pyramid> for Sphere {
    fn intersects(&self, pyramid: &Pyramid) -> Result<bool> {
        pyramid.intersects_sampled(self, DEFAULT_DISCRETIZATION_LEVEL)
    }
}

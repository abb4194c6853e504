use std::ops::{Add, Sub};

use nalgebra::Vector3;

use crate::error::{Result, ensure_defined};
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Contains, Defined, Intersects, Transformable};

/// Geometric primitive representing a position in 3D space
#[derive(Debug, Clone, Copy)]
pub struct Point(pub f64, pub f64, pub f64);

impl Point {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Point(x, y, z)
    }

    pub const fn origin() -> Self {
        Point(0.0, 0.0, 0.0)
    }

    pub const fn undefined() -> Self {
        Point(f64::NAN, f64::NAN, f64::NAN)
    }

    pub fn x(&self) -> f64 {
        self.0
    }

    pub fn y(&self) -> f64 {
        self.1
    }

    pub fn z(&self) -> f64 {
        self.2
    }

    /// Position vector of the point
    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.0, self.1, self.2)
    }

    pub fn distance_to(&self, other: &Point) -> Result<f64> {
        ensure_defined!(self, "Point");
        ensure_defined!(other, "Point");
        Ok((*self - *other).norm())
    }

    pub(crate) fn sq_distance(&self, other: &Point) -> f64 {
        (*self - *other).norm_squared()
    }

    pub fn is_near(&self, other: &Point, tolerance: f64) -> Result<bool> {
        Ok(self.distance_to(other)? <= tolerance)
    }
}

impl Defined for Point {
    fn is_defined(&self) -> bool {
        self.0.is_finite() && self.1.is_finite() && self.2.is_finite()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.0 == other.0
            && self.1 == other.1
            && self.2 == other.2
    }
}

impl Transformable for Point {
    fn apply_transformation(&mut self, t: &Transformation) -> Result<&mut Self> {
        ensure_defined!(t, "Transformation");
        ensure_defined!(self, "Point");
        *self = t.apply_to_point(self);
        Ok(self)
    }
}

impl Add<Vector3<f64>> for Point {
    type Output = Point;

    fn add(self, v: Vector3<f64>) -> Point {
        Point(self.0 + v.x, self.1 + v.y, self.2 + v.z)
    }
}

impl Sub<Vector3<f64>> for Point {
    type Output = Point;

    fn sub(self, v: Vector3<f64>) -> Point {
        Point(self.0 - v.x, self.1 - v.y, self.2 - v.z)
    }
}

impl Sub<Point> for Point {
    type Output = Vector3<f64>;

    fn sub(self, other: Point) -> Vector3<f64> {
        Vector3::new(self.0 - other.0, self.1 - other.1, self.2 - other.2)
    }
}

impl From<Vector3<f64>> for Point {
    fn from(v: Vector3<f64>) -> Self {
        Point(v.x, v.y, v.z)
    }
}

impl From<Point> for Vector3<f64> {
    fn from(p: Point) -> Self {
        p.as_vector()
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from(p: (f64, f64, f64)) -> Self {
        Point(p.0, p.1, p.2)
    }
}

impl From<Point> for (f64, f64, f64) {
    fn from(p: Point) -> Self {
        (p.0, p.1, p.2)
    }
}

impl<T> Intersects<T> for Point
where
    T: Intersects<Point>,
{
    fn intersects(&self, other: &T) -> Result<bool> {
        other.intersects(self)
    }
}

impl Contains<Point> for Point {
    fn contains(&self, other: &Point) -> Result<bool> {
        ensure_defined!(self, "Point");
        ensure_defined!(other, "Point");
        Ok(self == other)
    }
}

use nalgebra::Vector3;

use crate::error::{Result, ensure_defined};
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Contains, Defined, Intersects, Transformable};
use crate::geometry::primitives::{Point, PointSet};
use crate::util::tolerance::{DIRECTION_TOLERANCE, LINE_TOLERANCE};

/// Infinite line through `origin` along `direction`
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub(crate) origin: Point,
    pub(crate) direction: Vector3<f64>,
}

impl Line {
    /// The direction is normalized unless it is (close to) zero.
    pub fn new(origin: Point, direction: Vector3<f64>) -> Self {
        Line {
            origin,
            direction: normalized_or_raw(direction),
        }
    }

    pub fn through(first: Point, second: Point) -> Self {
        Line::new(first, second - first)
    }

    pub fn undefined() -> Self {
        Line {
            origin: Point::undefined(),
            direction: Vector3::repeat(f64::NAN),
        }
    }

    pub fn origin(&self) -> Result<Point> {
        ensure_defined!(self, "Line");
        Ok(self.origin)
    }

    pub fn direction(&self) -> Result<Vector3<f64>> {
        ensure_defined!(self, "Line");
        Ok(self.direction)
    }

    pub fn point_at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    pub fn distance_to(&self, point: &Point) -> Result<f64> {
        ensure_defined!(self, "Line");
        ensure_defined!(point, "Point");
        Ok(distance_to_line(&self.origin, &self.direction, point))
    }
}

/// Distance between `point` and the line through `origin` along the unit (or zero) `direction`
pub(crate) fn distance_to_line(origin: &Point, direction: &Vector3<f64>, point: &Point) -> f64 {
    let v = *point - *origin;
    match direction.norm() > DIRECTION_TOLERANCE {
        true => (v - direction * v.dot(direction)).norm(),
        false => v.norm(),
    }
}

pub(crate) fn normalized_or_raw(direction: Vector3<f64>) -> Vector3<f64> {
    direction
        .try_normalize(DIRECTION_TOLERANCE)
        .unwrap_or(direction)
}

pub(crate) fn is_parallel(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    a.cross(b).norm() <= LINE_TOLERANCE
}

impl Defined for Line {
    fn is_defined(&self) -> bool {
        self.origin.is_defined() && self.direction.iter().all(|c| c.is_finite())
    }
}

impl PartialEq for Line {
    /// Two lines are equal if they describe the same set of points.
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && is_parallel(&self.direction, &other.direction)
            && distance_to_line(&self.origin, &self.direction, &other.origin) <= LINE_TOLERANCE
    }
}

impl Transformable for Line {
    fn apply_transformation(&mut self, t: &Transformation) -> Result<&mut Self> {
        ensure_defined!(t, "Transformation");
        ensure_defined!(self, "Line");
        self.origin = t.apply_to_point(&self.origin);
        self.direction = t.apply_to_vector(&self.direction);
        Ok(self)
    }
}

impl Contains<Point> for Line {
    fn contains(&self, point: &Point) -> Result<bool> {
        Ok(self.distance_to(point)? <= LINE_TOLERANCE)
    }
}

impl Contains<PointSet> for Line {
    fn contains(&self, point_set: &PointSet) -> Result<bool> {
        ensure_defined!(self, "Line");
        ensure_defined!(point_set, "Point set");
        if point_set.is_empty() {
            return Ok(false);
        }
        for p in point_set {
            if !self.contains(p)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl Intersects<Point> for Line {
    fn intersects(&self, point: &Point) -> Result<bool> {
        self.contains(point)
    }
}

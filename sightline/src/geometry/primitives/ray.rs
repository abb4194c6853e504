use nalgebra::Vector3;

use crate::error::{Result, ensure_defined};
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Contains, Defined, Intersects, Transformable};
use crate::geometry::primitives::line::{distance_to_line, normalized_or_raw};
use crate::geometry::primitives::{Line, Point};
use crate::util::tolerance::LINE_TOLERANCE;

/// Half-infinite line starting at `origin` and extending along `direction`
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub(crate) origin: Point,
    pub(crate) direction: Vector3<f64>,
}

impl Ray {
    /// The direction is normalized unless it is (close to) zero.
    pub fn new(origin: Point, direction: Vector3<f64>) -> Self {
        Ray {
            origin,
            direction: normalized_or_raw(direction),
        }
    }

    pub fn undefined() -> Self {
        Ray {
            origin: Point::undefined(),
            direction: Vector3::repeat(f64::NAN),
        }
    }

    pub fn origin(&self) -> Result<Point> {
        ensure_defined!(self, "Ray");
        Ok(self.origin)
    }

    pub fn direction(&self) -> Result<Vector3<f64>> {
        ensure_defined!(self, "Ray");
        Ok(self.direction)
    }

    pub fn point_at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    pub fn to_line(&self) -> Line {
        Line::new(self.origin, self.direction)
    }
}

impl Defined for Ray {
    fn is_defined(&self) -> bool {
        self.origin.is_defined() && self.direction.iter().all(|c| c.is_finite())
    }
}

impl PartialEq for Ray {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.origin == other.origin
            && self.direction == other.direction
    }
}

impl Transformable for Ray {
    fn apply_transformation(&mut self, t: &Transformation) -> Result<&mut Self> {
        ensure_defined!(t, "Transformation");
        ensure_defined!(self, "Ray");
        self.origin = t.apply_to_point(&self.origin);
        self.direction = t.apply_to_vector(&self.direction);
        Ok(self)
    }
}

impl Contains<Point> for Ray {
    fn contains(&self, point: &Point) -> Result<bool> {
        ensure_defined!(self, "Ray");
        ensure_defined!(point, "Point");
        let ahead = (*point - self.origin).dot(&self.direction) >= -LINE_TOLERANCE;
        Ok(ahead && distance_to_line(&self.origin, &self.direction, point) <= LINE_TOLERANCE)
    }
}

impl Intersects<Point> for Ray {
    fn intersects(&self, point: &Point) -> Result<bool> {
        self.contains(point)
    }
}

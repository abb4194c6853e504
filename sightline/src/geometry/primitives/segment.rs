use nalgebra::Vector3;

use crate::error::{GeomError, Result, ensure_defined};
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Contains, Defined, Intersects, Transformable};
use crate::geometry::primitives::{Line, Point};
use crate::util::tolerance::LINE_TOLERANCE;

/// Finite line segment between two [`Point`]s
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub(crate) first: Point,
    pub(crate) second: Point,
}

impl Segment {
    /// Coinciding endpoints are accepted, see [`Segment::is_degenerate`].
    pub fn new(first: Point, second: Point) -> Self {
        Segment { first, second }
    }

    pub fn undefined() -> Self {
        Segment {
            first: Point::undefined(),
            second: Point::undefined(),
        }
    }

    pub fn first_point(&self) -> Result<Point> {
        ensure_defined!(self, "Segment");
        Ok(self.first)
    }

    pub fn second_point(&self) -> Result<Point> {
        ensure_defined!(self, "Segment");
        Ok(self.second)
    }

    pub fn is_degenerate(&self) -> Result<bool> {
        ensure_defined!(self, "Segment");
        Ok(self.first == self.second)
    }

    /// Unit vector pointing from the first to the second point
    pub fn direction(&self) -> Result<Vector3<f64>> {
        if self.is_degenerate()? {
            return Err(GeomError::InvalidArgument(
                "degenerate segment has no direction".into(),
            ));
        }
        Ok((self.second - self.first).normalize())
    }

    pub fn center(&self) -> Result<Point> {
        ensure_defined!(self, "Segment");
        Ok(self.first + (self.second - self.first) / 2.0)
    }

    pub fn length(&self) -> Result<f64> {
        ensure_defined!(self, "Segment");
        Ok((self.second - self.first).norm())
    }

    pub fn half_length(&self) -> Result<f64> {
        Ok(self.length()? / 2.0)
    }

    pub fn to_line(&self) -> Result<Line> {
        Ok(Line::new(self.first, self.direction()?))
    }

    pub fn distance_to(&self, point: &Point) -> Result<f64> {
        ensure_defined!(self, "Segment");
        ensure_defined!(point, "Point");
        //closest point is the projection, clamped to the segment
        let d = self.second - self.first;
        let len_sq = d.norm_squared();
        let param = match len_sq {
            0.0 => 0.0,
            _ => ((*point - self.first).dot(&d) / len_sq).clamp(0.0, 1.0),
        };
        Ok((*point - (self.first + d * param)).norm())
    }
}

impl Defined for Segment {
    fn is_defined(&self) -> bool {
        self.first.is_defined() && self.second.is_defined()
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && ((self.first == other.first && self.second == other.second)
                || (self.first == other.second && self.second == other.first))
    }
}

impl Transformable for Segment {
    fn apply_transformation(&mut self, t: &Transformation) -> Result<&mut Self> {
        ensure_defined!(t, "Transformation");
        ensure_defined!(self, "Segment");
        let Segment { first, second } = self;
        *first = t.apply_to_point(first);
        *second = t.apply_to_point(second);
        Ok(self)
    }
}

impl Contains<Point> for Segment {
    fn contains(&self, point: &Point) -> Result<bool> {
        Ok(self.distance_to(point)? <= LINE_TOLERANCE)
    }
}

impl Intersects<Point> for Segment {
    fn intersects(&self, point: &Point) -> Result<bool> {
        self.contains(point)
    }
}

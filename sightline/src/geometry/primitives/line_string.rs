use itertools::Itertools;

use crate::error::{Result, ensure_defined};
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Defined, Transformable};
use crate::geometry::primitives::Point;

/// Ordered sequence of [`Point`]s, connected pairwise into a polyline
#[derive(Debug, Clone, Default)]
pub struct LineString {
    points: Vec<Point>,
}

impl LineString {
    pub fn new(points: Vec<Point>) -> Self {
        LineString { points }
    }

    pub fn empty() -> Self {
        LineString { points: vec![] }
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// True if both polylines have the same number of points and are pairwise within `tolerance`
    pub fn is_near(&self, other: &LineString, tolerance: f64) -> Result<bool> {
        ensure_defined!(self, "Line string");
        ensure_defined!(other, "Line string");
        Ok(self.point_count() == other.point_count()
            && self
                .points
                .iter()
                .zip(other.points.iter())
                .all(|(p, q)| p.sq_distance(q) <= tolerance * tolerance))
    }

    /// Sum of the lengths of all consecutive pieces
    pub fn length(&self) -> Result<f64> {
        ensure_defined!(self, "Line string");
        Ok(self
            .points
            .iter()
            .tuple_windows()
            .map(|(p, q)| p.sq_distance(q).sqrt())
            .sum())
    }
}

impl Defined for LineString {
    fn is_defined(&self) -> bool {
        self.points.iter().all(|p| p.is_defined())
    }
}

impl PartialEq for LineString {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined() && other.is_defined() && self.points == other.points
    }
}

impl Transformable for LineString {
    fn apply_transformation(&mut self, t: &Transformation) -> Result<&mut Self> {
        ensure_defined!(t, "Transformation");
        ensure_defined!(self, "Line string");
        for p in self.points.iter_mut() {
            p.apply_transformation(t)?;
        }
        Ok(self)
    }
}

impl FromIterator<Point> for LineString {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        LineString::new(iter.into_iter().collect())
    }
}

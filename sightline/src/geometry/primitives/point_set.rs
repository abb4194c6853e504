use ordered_float::OrderedFloat;

use crate::error::{GeomError, Result, ensure_defined};
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Defined, Transformable};
use crate::geometry::primitives::Point;

/// Unordered set of [`Point`]s, duplicates are collapsed on construction
#[derive(Debug, Clone, Default)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        let mut unique: Vec<Point> = vec![];
        for p in points {
            if !unique.contains(&p) || !p.is_defined() {
                unique.push(p);
            }
        }
        PointSet { points: unique }
    }

    pub fn empty() -> Self {
        PointSet { points: vec![] }
    }

    pub fn size(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point_closest_to(&self, point: &Point) -> Result<Point> {
        ensure_defined!(self, "Point set");
        ensure_defined!(point, "Point");
        self.points
            .iter()
            .min_by_key(|p| OrderedFloat(p.sq_distance(point)))
            .copied()
            .ok_or_else(|| GeomError::InvalidArgument("point set is empty".into()))
    }

    pub fn distance_to(&self, point: &Point) -> Result<f64> {
        self.point_closest_to(point)?.distance_to(point)
    }

    /// True if both sets have the same size and every point of `self` is near a point of `other`
    pub fn is_near(&self, other: &PointSet, tolerance: f64) -> Result<bool> {
        ensure_defined!(self, "Point set");
        ensure_defined!(other, "Point set");
        Ok(self.size() == other.size()
            && self
                .points
                .iter()
                .all(|p| other.points.iter().any(|q| p.sq_distance(q) <= tolerance * tolerance)))
    }
}

impl Defined for PointSet {
    fn is_defined(&self) -> bool {
        self.points.iter().all(|p| p.is_defined())
    }
}

impl PartialEq for PointSet {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.size() == other.size()
            && self.points.iter().all(|p| other.points.contains(p))
    }
}

impl Transformable for PointSet {
    fn apply_transformation(&mut self, t: &Transformation) -> Result<&mut Self> {
        ensure_defined!(t, "Transformation");
        ensure_defined!(self, "Point set");
        for p in self.points.iter_mut() {
            p.apply_transformation(t)?;
        }
        Ok(self)
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        PointSet::new(iter)
    }
}

impl IntoIterator for PointSet {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

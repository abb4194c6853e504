use itertools::Itertools;
use nalgebra::{Point2, Vector3};

use crate::error::{GeomError, Result, ensure_defined};
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Defined, Transformable};
use crate::geometry::primitives::{Point, Segment};
use crate::util::tolerance::DIRECTION_TOLERANCE;

/// Planar polygon: a ring of 2D vertices embedded in 3D through a frame (`origin`, `x_axis`, `y_axis`).
///
/// The vertex at `(u, v)` lies at `origin + u * x_axis + v * y_axis`.
/// On construction the ring is brought into clockwise order (in its own 2D frame), the first vertex stays first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2<f64>>,
    origin: Point,
    x_axis: Vector3<f64>,
    y_axis: Vector3<f64>,
}

impl Polygon {
    pub fn new(
        mut vertices: Vec<Point2<f64>>,
        origin: Point,
        x_axis: Vector3<f64>,
        y_axis: Vector3<f64>,
    ) -> Self {
        if signed_area(&vertices) > 0.0 {
            vertices[1..].reverse();
        }
        Polygon {
            vertices,
            origin,
            x_axis,
            y_axis,
        }
    }

    pub fn undefined() -> Self {
        Polygon {
            vertices: vec![],
            origin: Point::undefined(),
            x_axis: Vector3::repeat(f64::NAN),
            y_axis: Vector3::repeat(f64::NAN),
        }
    }

    pub fn origin(&self) -> Result<Point> {
        ensure_defined!(self, "Polygon");
        Ok(self.origin)
    }

    pub fn x_axis(&self) -> Result<Vector3<f64>> {
        ensure_defined!(self, "Polygon");
        Ok(self.x_axis)
    }

    pub fn y_axis(&self) -> Result<Vector3<f64>> {
        ensure_defined!(self, "Polygon");
        Ok(self.y_axis)
    }

    pub fn vertices_2d(&self) -> &[Point2<f64>] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        match self.vertices.len() {
            0 | 1 => 0,
            2 => 1,
            n => n,
        }
    }

    /// World position of vertex `i`
    pub fn vertex(&self, i: usize) -> Result<Point> {
        ensure_defined!(self, "Polygon");
        match self.vertices.get(i) {
            Some(v) => Ok(self.to_world(v)),
            None => Err(GeomError::InvalidArgument(format!(
                "vertex index {i} out of bounds ({} vertices)",
                self.vertex_count()
            ))),
        }
    }

    /// World segment from vertex `i` to vertex `i + 1` (wrapping around)
    pub fn edge(&self, i: usize) -> Result<Segment> {
        ensure_defined!(self, "Polygon");
        if i >= self.edge_count() {
            return Err(GeomError::InvalidArgument(format!(
                "edge index {i} out of bounds ({} edges)",
                self.edge_count()
            )));
        }
        let j = (i + 1) % self.vertex_count();
        Ok(Segment::new(self.vertex(i)?, self.vertex(j)?))
    }

    pub fn vertices(&self) -> Result<Vec<Point>> {
        ensure_defined!(self, "Polygon");
        Ok(self.vertices.iter().map(|v| self.to_world(v)).collect())
    }

    pub fn edges(&self) -> Result<Vec<Segment>> {
        let vertices = self.vertices()?;
        let edges = match vertices.len() {
            0 | 1 => vec![],
            2 => vec![Segment::new(vertices[0], vertices[1])],
            _ => vertices
                .into_iter()
                .circular_tuple_windows()
                .map(|(a, b)| Segment::new(a, b))
                .collect(),
        };
        Ok(edges)
    }

    /// Unit normal of the supporting plane, `x_axis × y_axis`
    pub fn normal(&self) -> Result<Vector3<f64>> {
        ensure_defined!(self, "Polygon");
        self.x_axis
            .cross(&self.y_axis)
            .try_normalize(DIRECTION_TOLERANCE)
            .ok_or_else(|| GeomError::InvalidArgument("polygon frame axes are parallel".into()))
    }

    /// Mean of the world vertices
    pub fn centroid(&self) -> Result<Point> {
        let vertices = self.vertices()?;
        if vertices.is_empty() {
            return Err(GeomError::InvalidArgument("polygon has no vertices".into()));
        }
        let sum = vertices
            .iter()
            .fold(Vector3::zeros(), |acc, v| acc + v.as_vector());
        Ok(Point::from(sum / vertices.len() as f64))
    }

    /// True if both polygons have the same vertex count and matching world vertices within `tolerance`
    pub fn is_near(&self, other: &Polygon, tolerance: f64) -> Result<bool> {
        let (ours, theirs) = (self.vertices()?, other.vertices()?);
        if ours.len() != theirs.len() {
            return Ok(false);
        }
        for (p, q) in ours.iter().zip(theirs.iter()) {
            if !p.is_near(q, tolerance)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn to_world(&self, v: &Point2<f64>) -> Point {
        self.origin + self.x_axis * v.x + self.y_axis * v.y
    }
}

//https://en.wikipedia.org/wiki/Shoelace_formula
//counterclockwise = positive area, clockwise = negative area
fn signed_area(vertices: &[Point2<f64>]) -> f64 {
    let mut sigma = 0.0;
    for i in 0..vertices.len() {
        //next vertex
        let j = (i + 1) % vertices.len();
        let (v_i, v_j) = (vertices[i], vertices[j]);
        sigma += (v_i.y + v_j.y) * (v_i.x - v_j.x);
    }
    0.5 * sigma
}

impl Defined for Polygon {
    fn is_defined(&self) -> bool {
        self.origin.is_defined()
            && self.x_axis.iter().all(|c| c.is_finite())
            && self.y_axis.iter().all(|c| c.is_finite())
            && self.vertices.iter().all(|v| v.x.is_finite() && v.y.is_finite())
    }
}

impl Transformable for Polygon {
    fn apply_transformation(&mut self, t: &Transformation) -> Result<&mut Self> {
        ensure_defined!(t, "Transformation");
        ensure_defined!(self, "Polygon");
        self.origin = t.apply_to_point(&self.origin);
        self.x_axis = t.apply_to_vector(&self.x_axis);
        self.y_axis = t.apply_to_vector(&self.y_axis);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(vertices: &[(f64, f64)]) -> Polygon {
        Polygon::new(
            vertices.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
            Point(0.0, 0.0, 1.0),
            Vector3::x(),
            Vector3::y(),
        )
    }

    #[test]
    fn counterclockwise_ring_is_reordered() {
        let p = square(&[(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]);
        let expected = [(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)];
        for (v, e) in p.vertices_2d().iter().zip(expected) {
            assert_eq!((v.x, v.y), e);
        }
        assert!(signed_area(p.vertices_2d()) < 0.0);
    }

    #[test]
    fn clockwise_ring_is_kept() {
        let ring = [(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)];
        let p = square(&ring);
        for (v, e) in p.vertices_2d().iter().zip(ring) {
            assert_eq!((v.x, v.y), e);
        }
    }

    #[test]
    fn world_frame() {
        let p = square(&[(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]);
        assert_eq!(p.vertex(1).unwrap(), Point(-1.0, 1.0, 1.0));
        assert_eq!(p.centroid().unwrap(), Point(0.0, 0.0, 1.0));
        assert_eq!(p.normal().unwrap(), Vector3::z());
        assert_eq!(
            p.edge(3).unwrap(),
            Segment::new(Point(1.0, -1.0, 1.0), Point(-1.0, -1.0, 1.0))
        );
        assert_eq!(p.edges().unwrap().len(), 4);
    }

    #[test]
    fn index_out_of_bounds() {
        let p = square(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert!(matches!(p.vertex(3), Err(GeomError::InvalidArgument(_))));
        assert!(matches!(p.edge(3), Err(GeomError::InvalidArgument(_))));
    }
}

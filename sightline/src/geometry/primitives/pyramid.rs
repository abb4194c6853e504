use crate::error::{GeomError, Result, ensure_defined};
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Contains, Defined, Intersects, Transformable};
use crate::geometry::primitives::{Plane, Point, PointSet, Polygon, Ray, Segment};
use crate::util::tolerance::{DIRECTION_TOLERANCE, PLANE_TOLERANCE};

/// Infinite solid pyramid: the region swept by the rays from `apex` through the `base` polygon
#[derive(Debug, Clone, PartialEq)]
pub struct Pyramid {
    base: Polygon,
    pub(crate) apex: Point,
}

impl Pyramid {
    pub fn new(base: Polygon, apex: Point) -> Self {
        Pyramid { base, apex }
    }

    pub fn undefined() -> Self {
        Pyramid {
            base: Polygon::undefined(),
            apex: Point::undefined(),
        }
    }

    pub fn base(&self) -> Result<&Polygon> {
        ensure_defined!(self, "Pyramid");
        Ok(&self.base)
    }

    pub fn apex(&self) -> Result<Point> {
        ensure_defined!(self, "Pyramid");
        Ok(self.apex)
    }

    /// `count` rays from the apex through points spread along the base edges.
    ///
    /// Each edge gets `count / edges` rays (the first `count % edges` edges one more),
    /// evenly spaced from its first to its second vertex, both included.
    pub fn lateral_rays(&self, count: usize) -> Result<Vec<Ray>> {
        ensure_defined!(self, "Pyramid");
        let edges = self.base.edges()?;
        if edges.is_empty() {
            return Err(GeomError::InvalidArgument("pyramid base has no edges".into()));
        }
        if count < edges.len() {
            return Err(GeomError::InvalidArgument(format!(
                "pyramid discretization level {count} is below its edge count {}",
                edges.len()
            )));
        }

        let (per_edge, remainder) = (count / edges.len(), count % edges.len());
        let rays = edges
            .iter()
            .enumerate()
            .flat_map(|(i, edge)| {
                let k = per_edge + usize::from(i < remainder);
                (0..k).map(move |j| {
                    let ratio = match k {
                        1 => 0.0,
                        _ => j as f64 / (k - 1) as f64,
                    };
                    edge.first + (edge.second - edge.first) * ratio
                })
            })
            .map(|p| Ray::new(self.apex, p - self.apex))
            .collect();
        Ok(rays)
    }

    /// Planes through the apex and each base edge, normals pointing into the pyramid
    pub fn lateral_faces(&self) -> Result<Vec<Plane>> {
        ensure_defined!(self, "Pyramid");
        let inward = self.base.centroid()? - self.apex;
        let faces = self
            .base
            .edges()?
            .iter()
            .map(|edge| {
                let normal = (edge.first - self.apex).cross(&(edge.second - self.apex));
                match normal.dot(&inward) < 0.0 {
                    true => Plane::new(self.apex, -normal),
                    false => Plane::new(self.apex, normal),
                }
            })
            .collect();
        Ok(faces)
    }
}

impl Defined for Pyramid {
    fn is_defined(&self) -> bool {
        self.base.is_defined() && self.apex.is_defined()
    }
}

impl Transformable for Pyramid {
    fn apply_transformation(&mut self, t: &Transformation) -> Result<&mut Self> {
        ensure_defined!(t, "Transformation");
        ensure_defined!(self, "Pyramid");
        self.base.apply_transformation(t)?;
        self.apex = t.apply_to_point(&self.apex);
        Ok(self)
    }
}

impl Contains<Point> for Pyramid {
    /// Half-space test against every lateral face, degenerate faces are ignored.
    fn contains(&self, point: &Point) -> Result<bool> {
        ensure_defined!(self, "Pyramid");
        ensure_defined!(point, "Point");
        if *point == self.apex {
            return Ok(true);
        }
        let v = *point - self.apex;
        let inside = self
            .lateral_faces()?
            .iter()
            .filter(|face| face.normal.norm() > DIRECTION_TOLERANCE)
            .all(|face| face.normal.dot(&v) >= -PLANE_TOLERANCE * v.norm());
        Ok(inside)
    }
}

impl Contains<PointSet> for Pyramid {
    fn contains(&self, point_set: &PointSet) -> Result<bool> {
        ensure_defined!(self, "Pyramid");
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

impl Contains<Segment> for Pyramid {
    fn contains(&self, segment: &Segment) -> Result<bool> {
        ensure_defined!(segment, "Segment");
        Ok(self.contains(&segment.first)? && self.contains(&segment.second)?)
    }
}

impl Intersects<Point> for Pyramid {
    fn intersects(&self, point: &Point) -> Result<bool> {
        self.contains(point)
    }
}

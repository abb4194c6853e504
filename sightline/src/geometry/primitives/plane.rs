use nalgebra::Vector3;

use crate::error::{GeomError, Result, ensure_defined};
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{
    Contains, Defined, IntersectionWith, Intersects, Transformable,
};
use crate::geometry::primitives::line::normalized_or_raw;
use crate::geometry::primitives::{Line, Point, PointSet, Ray, Segment};
use crate::geometry::{Intersection, Object};
use crate::util::tolerance::{DIRECTION_TOLERANCE, PLANE_TOLERANCE};

/// Infinite plane through `point`, perpendicular to `normal`
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub(crate) point: Point,
    pub(crate) normal: Vector3<f64>,
}

impl Plane {
    /// The normal is normalized unless it is (close to) zero, a zero normal is rejected at query time.
    pub fn new(point: Point, normal: Vector3<f64>) -> Self {
        Plane {
            point,
            normal: normalized_or_raw(normal),
        }
    }

    pub fn undefined() -> Self {
        Plane {
            point: Point::undefined(),
            normal: Vector3::repeat(f64::NAN),
        }
    }

    pub fn point(&self) -> Result<Point> {
        ensure_defined!(self, "Plane");
        Ok(self.point)
    }

    pub fn normal(&self) -> Result<Vector3<f64>> {
        ensure_defined!(self, "Plane");
        Ok(self.normal)
    }

    /// Signed distance from the plane to `point`, positive on the side the normal points to
    pub fn signed_distance_to(&self, point: &Point) -> Result<f64> {
        ensure_defined!(point, "Point");
        let normal = self.valid_normal()?;
        Ok(normal.dot(&(*point - self.point)))
    }

    pub fn distance_to(&self, point: &Point) -> Result<f64> {
        Ok(self.signed_distance_to(point)?.abs())
    }

    fn valid_normal(&self) -> Result<Vector3<f64>> {
        ensure_defined!(self, "Plane");
        match self.normal.norm() > DIRECTION_TOLERANCE {
            true => Ok(self.normal),
            false => Err(GeomError::InvalidArgument("plane normal is zero".into())),
        }
    }

    /// Parameter `t` at which `origin + t * direction` crosses the plane, `None` when parallel.
    /// A parallel line lying in the plane is reported by `Ok(None)` as well, callers check containment of `origin`.
    fn crossing(&self, origin: &Point, direction: &Vector3<f64>) -> Result<Option<f64>> {
        let normal = self.valid_normal()?;
        let denom = normal.dot(direction);
        match denom.abs() <= DIRECTION_TOLERANCE {
            true => Ok(None),
            false => Ok(Some(normal.dot(&(self.point - *origin)) / denom)),
        }
    }
}

impl Defined for Plane {
    fn is_defined(&self) -> bool {
        self.point.is_defined() && self.normal.iter().all(|c| c.is_finite())
    }
}

impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && super::line::is_parallel(&self.normal, &other.normal)
            && self.contains(&other.point).unwrap_or(false)
    }
}

impl Transformable for Plane {
    fn apply_transformation(&mut self, t: &Transformation) -> Result<&mut Self> {
        ensure_defined!(t, "Transformation");
        ensure_defined!(self, "Plane");
        self.point = t.apply_to_point(&self.point);
        self.normal = t.apply_to_vector(&self.normal);
        Ok(self)
    }
}

impl Contains<Point> for Plane {
    fn contains(&self, point: &Point) -> Result<bool> {
        Ok(self.distance_to(point)? <= PLANE_TOLERANCE)
    }
}

impl Contains<PointSet> for Plane {
    fn contains(&self, point_set: &PointSet) -> Result<bool> {
        ensure_defined!(self, "Plane");
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

impl Contains<Line> for Plane {
    fn contains(&self, line: &Line) -> Result<bool> {
        ensure_defined!(line, "Line");
        Ok(self.crossing(&line.origin, &line.direction)?.is_none() && self.contains(&line.origin)?)
    }
}

impl Contains<Ray> for Plane {
    fn contains(&self, ray: &Ray) -> Result<bool> {
        ensure_defined!(ray, "Ray");
        Ok(self.crossing(&ray.origin, &ray.direction)?.is_none() && self.contains(&ray.origin)?)
    }
}

impl Contains<Segment> for Plane {
    fn contains(&self, segment: &Segment) -> Result<bool> {
        ensure_defined!(segment, "Segment");
        Ok(self.contains(&segment.first)? && self.contains(&segment.second)?)
    }
}

impl Intersects<Point> for Plane {
    fn intersects(&self, point: &Point) -> Result<bool> {
        self.contains(point)
    }
}

impl Intersects<PointSet> for Plane {
    fn intersects(&self, point_set: &PointSet) -> Result<bool> {
        Ok(!self.intersection_with(point_set)?.is_empty())
    }
}

impl Intersects<Line> for Plane {
    fn intersects(&self, line: &Line) -> Result<bool> {
        Ok(!self.intersection_with(line)?.is_empty())
    }
}

impl Intersects<Ray> for Plane {
    fn intersects(&self, ray: &Ray) -> Result<bool> {
        Ok(!self.intersection_with(ray)?.is_empty())
    }
}

impl Intersects<Segment> for Plane {
    fn intersects(&self, segment: &Segment) -> Result<bool> {
        Ok(!self.intersection_with(segment)?.is_empty())
    }
}

impl IntersectionWith<Point> for Plane {
    fn intersection_with(&self, point: &Point) -> Result<Intersection> {
        match self.contains(point)? {
            true => Ok(Intersection::point(*point)),
            false => Ok(Intersection::empty()),
        }
    }
}

impl IntersectionWith<PointSet> for Plane {
    fn intersection_with(&self, point_set: &PointSet) -> Result<Intersection> {
        ensure_defined!(self, "Plane");
        ensure_defined!(point_set, "Point set");
        let mut inside = vec![];
        for p in point_set {
            if self.contains(p)? {
                inside.push(*p);
            }
        }
        Ok(Intersection::point_set(PointSet::new(inside)))
    }
}

impl IntersectionWith<Line> for Plane {
    fn intersection_with(&self, line: &Line) -> Result<Intersection> {
        ensure_defined!(line, "Line");
        match self.crossing(&line.origin, &line.direction)? {
            Some(t) => Ok(Intersection::point(line.point_at(t))),
            None if self.contains(&line.origin)? => Ok(Intersection::line(*line)),
            None => Ok(Intersection::empty()),
        }
    }
}

impl IntersectionWith<Ray> for Plane {
    fn intersection_with(&self, ray: &Ray) -> Result<Intersection> {
        ensure_defined!(ray, "Ray");
        match self.crossing(&ray.origin, &ray.direction)? {
            Some(t) if t >= 0.0 => Ok(Intersection::point(ray.point_at(t))),
            Some(_) => Ok(Intersection::empty()),
            None if self.contains(&ray.origin)? => Ok(Intersection::ray(*ray)),
            None => Ok(Intersection::empty()),
        }
    }
}

impl IntersectionWith<Segment> for Plane {
    fn intersection_with(&self, segment: &Segment) -> Result<Intersection> {
        ensure_defined!(segment, "Segment");
        let (first, second) = (segment.first, segment.second);
        let first_in = self.contains(&first)?;
        let second_in = self.contains(&second)?;
        let hit = match (first_in, second_in) {
            (true, true) if first == second => Object::Point(first),
            (true, true) => Object::Segment(*segment),
            (true, false) => Object::Point(first),
            (false, true) => Object::Point(second),
            (false, false) => match self.crossing(&first, &(second - first))? {
                Some(t) if (0.0..=1.0).contains(&t) => Object::Point(first + (second - first) * t),
                _ => return Ok(Intersection::empty()),
            },
        };
        Ok(Intersection::from_objects(vec![hit]))
    }
}

use std::f64::consts::TAU;

use nalgebra::{Unit, UnitQuaternion, Vector3};

use crate::error::{GeomError, Result, ensure_defined};
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{Contains, Defined, Intersects, Transformable};
use crate::geometry::primitives::line::{is_parallel, normalized_or_raw};
use crate::geometry::primitives::{Point, PointSet, Ray, Segment};
use crate::util::FPA;
use crate::util::tolerance::DIRECTION_TOLERANCE;

/// Infinite solid cone: every point whose direction from `apex` is within `angle` of `axis`
#[derive(Debug, Clone, Copy)]
pub struct Cone {
    pub(crate) apex: Point,
    axis: Vector3<f64>,
    /// Half-angle in radians
    angle: f64,
}

impl Cone {
    pub fn new(apex: Point, axis: Vector3<f64>, angle: f64) -> Self {
        Cone {
            apex,
            axis: normalized_or_raw(axis),
            angle,
        }
    }

    pub fn undefined() -> Self {
        Cone {
            apex: Point::undefined(),
            axis: Vector3::repeat(f64::NAN),
            angle: f64::NAN,
        }
    }

    pub fn apex(&self) -> Result<Point> {
        ensure_defined!(self, "Cone");
        Ok(self.apex)
    }

    pub fn axis(&self) -> Result<Vector3<f64>> {
        ensure_defined!(self, "Cone");
        Ok(self.axis)
    }

    pub fn angle(&self) -> Result<f64> {
        ensure_defined!(self, "Cone");
        Ok(self.angle)
    }

    /// `count` rays from the apex along the lateral surface, evenly spaced in azimuth around the axis
    pub fn lateral_rays(&self, count: usize) -> Result<Vec<Ray>> {
        ensure_defined!(self, "Cone");
        if count == 0 {
            return Err(GeomError::InvalidArgument(
                "cone discretization level must be at least 1".into(),
            ));
        }
        let axis = self.unit_axis()?;

        let reference = match is_parallel(&axis, &Vector3::x()) {
            true => Vector3::y(),
            false => Vector3::x(),
        };
        let orthogonal = Unit::new_normalize(axis.cross(&reference));
        let generator = UnitQuaternion::from_axis_angle(&orthogonal, self.angle) * axis.into_inner();

        let rays = (0..count)
            .map(|i| {
                let azimuth = UnitQuaternion::from_axis_angle(&axis, TAU * i as f64 / count as f64);
                Ray::new(self.apex, azimuth * generator)
            })
            .collect();
        Ok(rays)
    }

    fn unit_axis(&self) -> Result<Unit<Vector3<f64>>> {
        Unit::try_new(self.axis, DIRECTION_TOLERANCE)
            .ok_or_else(|| GeomError::InvalidArgument("cone axis is zero".into()))
    }
}

impl Defined for Cone {
    fn is_defined(&self) -> bool {
        self.apex.is_defined() && self.axis.iter().all(|c| c.is_finite()) && self.angle.is_finite()
    }
}

impl PartialEq for Cone {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.apex == other.apex
            && self.axis == other.axis
            && self.angle == other.angle
    }
}

impl Transformable for Cone {
    fn apply_transformation(&mut self, t: &Transformation) -> Result<&mut Self> {
        ensure_defined!(t, "Transformation");
        ensure_defined!(self, "Cone");
        self.apex = t.apply_to_point(&self.apex);
        self.axis = t.apply_to_vector(&self.axis);
        Ok(self)
    }
}

impl Contains<Point> for Cone {
    fn contains(&self, point: &Point) -> Result<bool> {
        ensure_defined!(self, "Cone");
        ensure_defined!(point, "Point");
        if *point == self.apex {
            return Ok(true);
        }
        let axis = self.unit_axis()?;
        let v = *point - self.apex;
        Ok(v.dot(&axis) >= 0.0 && FPA(v.angle(&axis)) <= FPA(self.angle))
    }
}

impl Contains<PointSet> for Cone {
    fn contains(&self, point_set: &PointSet) -> Result<bool> {
        ensure_defined!(self, "Cone");
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

impl Contains<Segment> for Cone {
    fn contains(&self, segment: &Segment) -> Result<bool> {
        ensure_defined!(segment, "Segment");
        Ok(self.contains(&segment.first)? && self.contains(&segment.second)?)
    }
}

impl Intersects<Point> for Cone {
    fn intersects(&self, point: &Point) -> Result<bool> {
        self.contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn lateral_rays_keep_the_half_angle() {
        let cone = Cone::new(Point::origin(), Vector3::z(), FRAC_PI_4);
        let rays = cone.lateral_rays(12).unwrap();
        assert_eq!(rays.len(), 12);
        for ray in &rays {
            let angle = ray.direction().unwrap().angle(&Vector3::z());
            assert!((angle - FRAC_PI_4).abs() < 1e-12);
        }
        assert!(matches!(cone.lateral_rays(0), Err(GeomError::InvalidArgument(_))));
    }

    #[test]
    fn axis_along_x() {
        let cone = Cone::new(Point::origin(), Vector3::x(), 0.1);
        let rays = cone.lateral_rays(4).unwrap();
        for ray in &rays {
            let angle = ray.direction().unwrap().angle(&Vector3::x());
            assert!((angle - 0.1).abs() < 1e-12);
        }
    }

    #[test]
    fn containment() {
        let cone = Cone::new(Point(0.0, 0.0, 1.0), Vector3::z(), FRAC_PI_4);
        assert!(cone.contains(&Point(0.0, 0.0, 1.0)).unwrap());
        assert!(cone.contains(&Point(0.0, 0.0, 5.0)).unwrap());
        assert!(cone.contains(&Point(0.5, 0.0, 2.0)).unwrap());
        assert!(!cone.contains(&Point(2.0, 0.0, 2.0)).unwrap());
        assert!(!cone.contains(&Point(0.0, 0.0, 0.0)).unwrap());
    }
}

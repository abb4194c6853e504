//! Cones and pyramids have no closed-form intersection with quadric surfaces.
//! Their lateral surface is sampled by rays from the apex instead, and every ray is intersected
//! with the surface in closed form.

use log::debug;

use crate::error::{Result, ensure_defined};
use crate::geometry::geo_traits::{Defined, IntersectionWith, Intersects, SampledIntersection};
use crate::geometry::primitives::{Cone, Ellipsoid, LineString, Point, Pyramid, Ray, Sphere};
use crate::geometry::Intersection;
use crate::util::{DEFAULT_DISCRETIZATION_LEVEL, SamplingConfig};

/// Solid bounded by rays emanating from a single apex
pub trait LateralSurface {
    fn apex_point(&self) -> Point;

    /// Deterministic sampling of the lateral surface, fails if `count` is below the minimum of the solid
    fn sample_rays(&self, count: usize) -> Result<Vec<Ray>>;
}

impl LateralSurface for Cone {
    fn apex_point(&self) -> Point {
        self.apex
    }

    fn sample_rays(&self, count: usize) -> Result<Vec<Ray>> {
        self.lateral_rays(count)
    }
}

impl LateralSurface for Pyramid {
    fn apex_point(&self) -> Point {
        self.apex
    }

    fn sample_rays(&self, count: usize) -> Result<Vec<Ray>> {
        self.lateral_rays(count)
    }
}

impl<S> SampledIntersection<Ellipsoid> for S
where
    S: LateralSurface + Defined,
{
    fn intersects_sampled(&self, ellipsoid: &Ellipsoid, discretization_level: usize) -> Result<bool> {
        ensure_defined!(self, "Solid");
        ensure_defined!(ellipsoid, "Ellipsoid");
        for ray in self.sample_rays(discretization_level)? {
            if !ellipsoid.ray_surface_points(&ray)?.is_empty() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn intersection_with_sampled(
        &self,
        ellipsoid: &Ellipsoid,
        config: SamplingConfig,
    ) -> Result<Intersection> {
        ensure_defined!(self, "Solid");
        ensure_defined!(ellipsoid, "Ellipsoid");
        let rays = self.sample_rays(config.discretization_level)?;

        //first hit of every ray is visible from the apex, the second one lies behind the body
        let mut near = vec![];
        let mut far = vec![];
        for ray in &rays {
            let mut hits = ellipsoid.ray_surface_points(ray)?.into_iter();
            if let Some(p) = hits.next() {
                near.push(p);
            }
            if let Some(p) = hits.next().filter(|_| !config.only_in_sight) {
                far.push(p);
            }
        }
        debug!(
            "[SMP] {} rays from {:?}: {} near hits, {} far hits",
            rays.len(),
            self.apex_point(),
            near.len(),
            far.len()
        );

        Ok(curve(near) + curve(far))
    }
}

impl<S> SampledIntersection<Sphere> for S
where
    S: LateralSurface + Defined,
{
    fn intersects_sampled(&self, sphere: &Sphere, discretization_level: usize) -> Result<bool> {
        SampledIntersection::<Ellipsoid>::intersects_sampled(
            self,
            &sphere.to_ellipsoid()?,
            discretization_level,
        )
    }

    fn intersection_with_sampled(&self, sphere: &Sphere, config: SamplingConfig) -> Result<Intersection> {
        SampledIntersection::<Ellipsoid>::intersection_with_sampled(self, &sphere.to_ellipsoid()?, config)
    }
}

/// Polyline through the sampled points, degrading to a point or nothing
fn curve(points: Vec<Point>) -> Intersection {
    match points.len() {
        0 => Intersection::empty(),
        1 => Intersection::point(points[0]),
        _ => Intersection::line_string(LineString::new(points)),
    }
}

/// Exposes the sampled queries through the regular query traits, using the default [`SamplingConfig`]
macro_rules! sampled_queries {
    ($solid:ty => $($target:ty),+) => {
        $(
            impl Intersects<$target> for $solid {
                fn intersects(&self, other: &$target) -> Result<bool> {
                    self.intersects_sampled(other, DEFAULT_DISCRETIZATION_LEVEL)
                }
            }

            impl IntersectionWith<$target> for $solid {
                fn intersection_with(&self, other: &$target) -> Result<Intersection> {
                    self.intersection_with_sampled(other, SamplingConfig::default())
                }
            }
        )+
    };
}

sampled_queries!(Cone => Ellipsoid, Sphere);
sampled_queries!(Pyramid => Ellipsoid, Sphere);

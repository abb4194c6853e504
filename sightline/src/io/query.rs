use log::debug;

use crate::error::{GeomError, Result};
use crate::geometry::Intersection;
use crate::geometry::geo_traits::{Contains, IntersectionWith, Intersects, SampledIntersection};
use crate::io::export::export_intersection;
use crate::io::ext_repr::{ExtAnswer, ExtOperation, ExtQuery};
use crate::io::import::Primitive as P;
use crate::io::import::{Primitive, import_primitive};
use crate::util::SamplingConfig;

/// Imports both operands of `query` and evaluates it.
///
/// `config` drives the sampled (cone and pyramid) queries and the visibility filter of ray queries.
/// Pairs without an algorithm are rejected with [`GeomError::InvalidArgument`].
pub fn run_query(query: &ExtQuery, config: SamplingConfig) -> Result<ExtAnswer> {
    let subject = import_primitive(&query.subject)?;
    let target = import_primitive(&query.target)?;
    debug!(
        "[QRY] {} {:?} {}",
        subject.name(),
        query.operation,
        target.name()
    );

    let unsupported = || {
        GeomError::InvalidArgument(format!(
            "{:?} is not supported between a {} and a {}",
            query.operation,
            subject.name(),
            target.name()
        ))
    };

    let answer = match query.operation {
        ExtOperation::Intersects => ExtAnswer::Boolean(
            intersects(&subject, &target, config)
                .or_else(|| intersects(&target, &subject, config))
                .ok_or_else(unsupported)??,
        ),
        ExtOperation::Contains => {
            ExtAnswer::Boolean(contains(&subject, &target).ok_or_else(unsupported)??)
        }
        ExtOperation::IntersectionWith => {
            let intersection = intersection_with(&subject, &target, config)
                .or_else(|| intersection_with(&target, &subject, config))
                .ok_or_else(unsupported)??;
            ExtAnswer::Intersection(export_intersection(&intersection))
        }
    };
    Ok(answer)
}

/// `None` if no algorithm exists for the ordered pair
fn intersects(a: &Primitive, b: &Primitive, config: SamplingConfig) -> Option<Result<bool>> {
    let level = config.discretization_level;
    let result = match (a, b) {
        (P::Point(x), P::Point(y)) => x.contains(y),
        (P::Line(x), P::Point(y)) => x.intersects(y),
        (P::Ray(x), P::Point(y)) => x.intersects(y),
        (P::Segment(x), P::Point(y)) => x.intersects(y),
        (P::Cone(x), P::Point(y)) => x.intersects(y),
        (P::Pyramid(x), P::Point(y)) => x.intersects(y),

        (P::Plane(x), P::Point(y)) => x.intersects(y),
        (P::Plane(x), P::PointSet(y)) => x.intersects(y),
        (P::Plane(x), P::Line(y)) => x.intersects(y),
        (P::Plane(x), P::Ray(y)) => x.intersects(y),
        (P::Plane(x), P::Segment(y)) => x.intersects(y),

        (P::Ellipsoid(x), P::Point(y)) => x.intersects(y),
        (P::Ellipsoid(x), P::PointSet(y)) => x.intersects(y),
        (P::Ellipsoid(x), P::Line(y)) => x.intersects(y),
        (P::Ellipsoid(x), P::Ray(y)) => x.intersects(y),
        (P::Ellipsoid(x), P::Segment(y)) => x.intersects(y),
        (P::Ellipsoid(x), P::Plane(y)) => x.intersects(y),
        (P::Ellipsoid(x), P::Cone(y)) => y.intersects_sampled(x, level),
        (P::Ellipsoid(x), P::Pyramid(y)) => y.intersects_sampled(x, level),

        (P::Sphere(x), P::Point(y)) => x.intersects(y),
        (P::Sphere(x), P::PointSet(y)) => x.intersects(y),
        (P::Sphere(x), P::Line(y)) => x.intersects(y),
        (P::Sphere(x), P::Ray(y)) => x.intersects(y),
        (P::Sphere(x), P::Segment(y)) => x.intersects(y),
        (P::Sphere(x), P::Plane(y)) => x.intersects(y),
        (P::Sphere(x), P::Cone(y)) => y.intersects_sampled(x, level),
        (P::Sphere(x), P::Pyramid(y)) => y.intersects_sampled(x, level),
        _ => return None,
    };
    Some(result)
}

fn contains(a: &Primitive, b: &Primitive) -> Option<Result<bool>> {
    let result = match (a, b) {
        (P::Point(x), P::Point(y)) => x.contains(y),
        (P::Line(x), P::Point(y)) => x.contains(y),
        (P::Line(x), P::PointSet(y)) => x.contains(y),
        (P::Ray(x), P::Point(y)) => x.contains(y),
        (P::Segment(x), P::Point(y)) => x.contains(y),

        (P::Plane(x), P::Point(y)) => x.contains(y),
        (P::Plane(x), P::PointSet(y)) => x.contains(y),
        (P::Plane(x), P::Line(y)) => x.contains(y),
        (P::Plane(x), P::Ray(y)) => x.contains(y),
        (P::Plane(x), P::Segment(y)) => x.contains(y),

        (P::Sphere(x), P::Point(y)) => x.contains(y),
        (P::Sphere(x), P::PointSet(y)) => x.contains(y),
        (P::Ellipsoid(x), P::Point(y)) => x.contains(y),
        (P::Ellipsoid(x), P::PointSet(y)) => x.contains(y),
        (P::Ellipsoid(x), P::Segment(y)) => x.contains(y),

        (P::Cone(x), P::Point(y)) => x.contains(y),
        (P::Cone(x), P::PointSet(y)) => x.contains(y),
        (P::Cone(x), P::Segment(y)) => x.contains(y),
        (P::Pyramid(x), P::Point(y)) => x.contains(y),
        (P::Pyramid(x), P::PointSet(y)) => x.contains(y),
        (P::Pyramid(x), P::Segment(y)) => x.contains(y),
        _ => return None,
    };
    Some(result)
}

fn intersection_with(
    a: &Primitive,
    b: &Primitive,
    config: SamplingConfig,
) -> Option<Result<Intersection>> {
    let result = match (a, b) {
        (P::Plane(x), P::Point(y)) => x.intersection_with(y),
        (P::Plane(x), P::PointSet(y)) => x.intersection_with(y),
        (P::Plane(x), P::Line(y)) => x.intersection_with(y),
        (P::Plane(x), P::Ray(y)) => x.intersection_with(y),
        (P::Plane(x), P::Segment(y)) => x.intersection_with(y),

        (P::Ellipsoid(x), P::Line(y)) => x.intersection_with(y),
        (P::Ellipsoid(x), P::Ray(y)) => x.intersection_with_ray(y, config.only_in_sight),
        (P::Ellipsoid(x), P::Segment(y)) => x.intersection_with(y),
        (P::Sphere(x), P::Line(y)) => x.intersection_with(y),
        (P::Sphere(x), P::Ray(y)) => x.intersection_with_ray(y, config.only_in_sight),
        (P::Sphere(x), P::Segment(y)) => x.intersection_with(y),

        (P::Cone(x), P::Ellipsoid(y)) => x.intersection_with_sampled(y, config),
        (P::Cone(x), P::Sphere(y)) => x.intersection_with_sampled(y, config),
        (P::Pyramid(x), P::Ellipsoid(y)) => x.intersection_with_sampled(y, config),
        (P::Pyramid(x), P::Sphere(y)) => x.intersection_with_sampled(y, config),
        _ => return None,
    };
    Some(result)
}

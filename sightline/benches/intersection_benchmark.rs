use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nalgebra::{Point2, UnitQuaternion, Vector3};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use sightline::geometry::geo_traits::{IntersectionWith, Intersects, SampledIntersection};
use sightline::geometry::primitives::{Cone, Ellipsoid, Point, Polygon, Pyramid, Segment};
use sightline::util::SamplingConfig;

criterion_main!(benches);
criterion_group!(benches, closed_form_bench, sampled_bench);

const N_SEGMENTS: usize = 1000;

fn random_segments(rng: &mut SmallRng) -> Vec<Segment> {
    let mut random_point = || {
        Point(
            rng.random_range(-3.0..3.0),
            rng.random_range(-3.0..3.0),
            rng.random_range(-3.0..3.0),
        )
    };
    (0..N_SEGMENTS)
        .map(|_| Segment::new(random_point(), random_point()))
        .collect()
}

/// Segment x ellipsoid, boolean closed form against the full intersection
fn closed_form_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let segments = random_segments(&mut rng);
    let ellipsoid = Ellipsoid::new(
        Point::origin(),
        1.0,
        2.0,
        1.5,
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.3),
    )
    .unwrap();

    let mut group = c.benchmark_group("segment_ellipsoid");
    group.bench_function("intersects", |b| {
        b.iter(|| {
            segments
                .iter()
                .filter(|s| ellipsoid.intersects(*s).unwrap())
                .count()
        })
    });
    group.bench_function("intersection_with", |b| {
        b.iter(|| {
            segments
                .iter()
                .filter(|s| !ellipsoid.intersection_with(*s).unwrap().is_empty())
                .count()
        })
    });
    group.finish();
}

/// Cone and pyramid against a sphere-like ellipsoid for increasing discretization levels
fn sampled_bench(c: &mut Criterion) {
    let ellipsoid = Ellipsoid::sphere(Point(0.0, 0.0, 10.0), 5.0).unwrap();
    let cone = Cone::new(Point::origin(), Vector3::z(), 0.1);
    let base = Polygon::new(
        vec![
            Point2::new(-0.1, -0.1),
            Point2::new(0.1, -0.1),
            Point2::new(0.1, 0.1),
            Point2::new(-0.1, 0.1),
        ],
        Point(0.0, 0.0, 1.0),
        Vector3::x(),
        Vector3::y(),
    );
    let pyramid = Pyramid::new(base, Point::origin());

    let mut group = c.benchmark_group("sampled_intersection");
    for level in [8, 40, 200] {
        let config = SamplingConfig::default().with_level(level);
        group.bench_with_input(BenchmarkId::new("cone", level), &config, |b, config| {
            b.iter(|| cone.intersection_with_sampled(&ellipsoid, *config).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("pyramid", level), &config, |b, config| {
            b.iter(|| pyramid.intersection_with_sampled(&ellipsoid, *config).unwrap())
        });
    }
    group.finish();
}

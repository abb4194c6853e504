use log::trace;
use nalgebra::{Matrix3, UnitQuaternion, Vector3};

use crate::error::{GeomError, Result, ensure_defined};
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{
    Contains, Defined, IntersectionWith, Intersects, SampledIntersection, Transformable,
};
use crate::geometry::primitives::{
    Cone, Line, Plane, Point, PointSet, Pyramid, Ray, Segment,
};
use crate::geometry::quadric::{SurfaceHits, line_surface_hits, solve_quadratic};
use crate::geometry::{Intersection, Object};
use crate::util::tolerance::{LINE_TOLERANCE, PLANE_TOLERANCE, ROOT_TOLERANCE, SURFACE_TOLERANCE};
use crate::util::{DEFAULT_DISCRETIZATION_LEVEL, Interval};

/// Ellipsoid surface with semi-axes `a`, `b`, `c` along the body axes, oriented by `orientation`.
///
/// The body axes map to the world through `orientation`: the first principal axis is `orientation * x̂`, and so on.
/// A zero semi-axis collapses the ellipsoid onto a flat ellipse (or a segment, or a point),
/// in which case its "surface" is the whole filled collapsed region.
#[derive(Debug, Clone, Copy)]
pub struct Ellipsoid {
    pub(crate) center: Point,
    pub(crate) semi_axes: Vector3<f64>,
    pub(crate) orientation: UnitQuaternion<f64>,
}

impl Ellipsoid {
    /// Fails on a negative semi-axis
    pub fn new(
        center: Point,
        a: f64,
        b: f64,
        c: f64,
        orientation: UnitQuaternion<f64>,
    ) -> Result<Self> {
        if [a, b, c].iter().any(|&s| s < 0.0) {
            return Err(GeomError::InvalidConstruction(format!(
                "ellipsoid semi-axes must be non-negative, got ({a}, {b}, {c})"
            )));
        }
        Ok(Ellipsoid {
            center,
            semi_axes: Vector3::new(a, b, c),
            orientation,
        })
    }

    pub fn sphere(center: Point, radius: f64) -> Result<Self> {
        Ellipsoid::new(center, radius, radius, radius, UnitQuaternion::identity())
    }

    pub fn undefined() -> Self {
        Ellipsoid {
            center: Point::undefined(),
            semi_axes: Vector3::repeat(f64::NAN),
            orientation: UnitQuaternion::identity(),
        }
    }

    pub fn center(&self) -> Result<Point> {
        ensure_defined!(self, "Ellipsoid");
        Ok(self.center)
    }

    pub fn first_principal_semi_axis(&self) -> Result<f64> {
        ensure_defined!(self, "Ellipsoid");
        Ok(self.semi_axes.x)
    }

    pub fn second_principal_semi_axis(&self) -> Result<f64> {
        ensure_defined!(self, "Ellipsoid");
        Ok(self.semi_axes.y)
    }

    pub fn third_principal_semi_axis(&self) -> Result<f64> {
        ensure_defined!(self, "Ellipsoid");
        Ok(self.semi_axes.z)
    }

    pub fn orientation(&self) -> Result<UnitQuaternion<f64>> {
        ensure_defined!(self, "Ellipsoid");
        Ok(self.orientation)
    }

    pub fn first_axis(&self) -> Result<Vector3<f64>> {
        ensure_defined!(self, "Ellipsoid");
        Ok(self.orientation * Vector3::x())
    }

    pub fn second_axis(&self) -> Result<Vector3<f64>> {
        ensure_defined!(self, "Ellipsoid");
        Ok(self.orientation * Vector3::y())
    }

    pub fn third_axis(&self) -> Result<Vector3<f64>> {
        ensure_defined!(self, "Ellipsoid");
        Ok(self.orientation * Vector3::z())
    }

    pub fn is_degenerate(&self) -> Result<bool> {
        ensure_defined!(self, "Ellipsoid");
        Ok(self.semi_axes.iter().any(|&s| s == 0.0))
    }

    /// Quadratic form `M` such that `p` lies on the surface iff `(p - c)ᵗ M (p - c) = 1`
    pub fn matrix(&self) -> Result<Matrix3<f64>> {
        if self.is_degenerate()? {
            return Err(GeomError::InvalidArgument(
                "degenerate ellipsoid has no quadratic form".into(),
            ));
        }
        let r = self.orientation.to_rotation_matrix();
        let inv_sq = Matrix3::from_diagonal(&self.semi_axes.map(|s| 1.0 / (s * s)));
        Ok(r.matrix() * inv_sq * r.matrix().transpose())
    }

    pub(crate) fn to_body_frame(&self, point: &Point) -> Vector3<f64> {
        self.rotation_to_body(&(*point - self.center))
    }

    pub(crate) fn rotation_to_body(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.orientation.inverse_transform_vector(vector)
    }

    /// Checks `|Σ (pᵢ/aᵢ)² - 1| < tolerance` in the body frame.
    /// Coordinates along a zero semi-axis must vanish instead, and then any point of the filled region qualifies.
    pub(crate) fn lies_on_surface(&self, point: &Point, tolerance: f64) -> bool {
        let p = self.to_body_frame(point);
        let mut sum = 0.0;
        let mut flat = false;
        for i in 0..3 {
            match self.semi_axes[i] == 0.0 {
                true => {
                    if p[i].abs() > PLANE_TOLERANCE {
                        return false;
                    }
                    flat = true;
                }
                false => sum += (p[i] / self.semi_axes[i]).powi(2),
            }
        }
        match flat {
            true => sum <= 1.0 + tolerance,
            false => (sum - 1.0).abs() < tolerance,
        }
    }

    /// Ray intersection, keeping only the hit nearest to the origin of the ray when `only_in_sight` is set
    pub fn intersection_with_ray(&self, ray: &Ray, only_in_sight: bool) -> Result<Intersection> {
        let hits = self.ray_hits(ray)?;
        let objects = match (hits, only_in_sight) {
            (RayHits::Points(points), true) => points.into_iter().take(1).map(Object::Point).collect(),
            (RayHits::Points(points), false) => points.into_iter().map(Object::Point).collect(),
            (RayHits::Chord(s), true) => vec![Object::Point(s.first)],
            (RayHits::Chord(s), false) => vec![Object::Segment(s)],
        };
        Ok(Intersection::from_objects(objects))
    }

    /// Surface points hit by `ray`, ordered by increasing distance to its origin
    pub(crate) fn ray_surface_points(&self, ray: &Ray) -> Result<Vec<Point>> {
        Ok(match self.ray_hits(ray)? {
            RayHits::Points(points) => points,
            RayHits::Chord(s) => vec![s.first, s.second],
        })
    }

    fn ray_hits(&self, ray: &Ray) -> Result<RayHits> {
        ensure_defined!(self, "Ellipsoid");
        ensure_defined!(ray, "Ray");
        let hits = match line_surface_hits(self, &ray.origin, &ray.direction) {
            SurfaceHits::None => RayHits::Points(vec![]),
            SurfaceHits::Roots(roots) => {
                ensure_root_count(&roots)?;
                let points = roots
                    .into_iter()
                    .filter(|&t| t >= -LINE_TOLERANCE)
                    .map(|t| ray.point_at(t.max(0.0)))
                    .filter(|p| self.confirm_root(p))
                    .collect();
                RayHits::Points(points)
            }
            SurfaceHits::Chord(_, t1) if t1 < -LINE_TOLERANCE => RayHits::Points(vec![]),
            SurfaceHits::Chord(t0, t1) => {
                let (t0, t1) = (t0.max(0.0), t1.max(0.0));
                match t0 == t1 {
                    true => RayHits::Points(vec![ray.point_at(t0)]),
                    false => RayHits::Chord(Segment::new(ray.point_at(t0), ray.point_at(t1))),
                }
            }
        };
        Ok(hits)
    }

    /// Re-checks a computed root against the surface
    fn confirm_root(&self, point: &Point) -> bool {
        let on_surface = self.lies_on_surface(point, ROOT_TOLERANCE);
        if !on_surface {
            trace!("[ELL] dropping root {point:?}, not on the surface");
        }
        on_surface
    }

    /// Surface hits of `segment`, the single classification behind both segment queries.
    ///
    /// Roots are parametrized around the segment center and kept if they fall in `[-h, h]`
    /// (widened by [`LINE_TOLERANCE`]) and lie on the surface.
    fn segment_hits(&self, segment: &Segment) -> Result<SegmentHits> {
        ensure_defined!(self, "Ellipsoid");
        ensure_defined!(segment, "Segment");
        if segment.is_degenerate()? {
            let on_surface = self.lies_on_surface(&segment.first, SURFACE_TOLERANCE);
            return Ok(SegmentHits::Points(match on_surface {
                true => vec![segment.first],
                false => vec![],
            }));
        }
        let (center, direction, h) = (segment.center()?, segment.direction()?, segment.half_length()?);
        let at = |t: f64| center + direction * t.clamp(-h, h);
        let domain = Interval::closed(-h - LINE_TOLERANCE, h + LINE_TOLERANCE);

        let roots = match self.is_degenerate()? {
            false => self.quadratic_form_roots(&center, &direction)?,
            true => match line_surface_hits(self, &center, &direction) {
                SurfaceHits::None => vec![],
                SurfaceHits::Roots(roots) => roots,
                SurfaceHits::Chord(t0, t1) => {
                    let (t0, t1) = (t0.max(-h), t1.min(h));
                    let hits = if t0 > t1 + LINE_TOLERANCE {
                        SegmentHits::Points(vec![])
                    } else if t1 - t0 <= LINE_TOLERANCE {
                        SegmentHits::Points(vec![at(t0)])
                    } else {
                        SegmentHits::Chord(Segment::new(at(t0), at(t1)))
                    };
                    return Ok(hits);
                }
            },
        };
        ensure_root_count(&roots)?;
        let points = roots
            .into_iter()
            .filter(|&t| domain.contains_value(t))
            .map(at)
            .filter(|p| self.confirm_root(p))
            .collect();
        Ok(SegmentHits::Points(points))
    }

    /// Roots in `t` of `(o + t d - c)ᵗ M (o + t d - c) = 1`, see [`Ellipsoid::matrix`]
    fn quadratic_form_roots(&self, origin: &Point, direction: &Vector3<f64>) -> Result<Vec<f64>> {
        let m = self.matrix()?;
        let diff = *origin - self.center;
        let a2 = direction.dot(&(m * direction));
        let a1 = direction.dot(&(m * diff));
        let a0 = diff.dot(&(m * diff)) - 1.0;
        Ok(solve_quadratic(a2, a1, a0).roots())
    }
}

/// Hits of a segment, already restricted to its domain
enum SegmentHits {
    Points(Vec<Point>),
    Chord(Segment),
}

/// Parametrized hits of a ray, already restricted to its domain
enum RayHits {
    Points(Vec<Point>),
    Chord(Segment),
}

fn ensure_root_count(roots: &[f64]) -> Result<()> {
    match roots.len() {
        0..=2 => Ok(()),
        n => Err(GeomError::AlgorithmFailure(format!(
            "{n} roots for a line and a quadric"
        ))),
    }
}

impl Defined for Ellipsoid {
    fn is_defined(&self) -> bool {
        self.center.is_defined()
            && self.semi_axes.iter().all(|s| s.is_finite())
            && self.orientation.coords.iter().all(|c| c.is_finite())
    }
}

impl PartialEq for Ellipsoid {
    fn eq(&self, other: &Self) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.center == other.center
            && self.semi_axes == other.semi_axes
            && (self.orientation.coords == other.orientation.coords
                || self.orientation.coords == -other.orientation.coords)
    }
}

impl Transformable for Ellipsoid {
    fn apply_transformation(&mut self, t: &Transformation) -> Result<&mut Self> {
        ensure_defined!(t, "Transformation");
        ensure_defined!(self, "Ellipsoid");
        self.center = t.apply_to_point(&self.center);
        self.orientation = t.rotation() * self.orientation;
        Ok(self)
    }
}

impl Contains<Point> for Ellipsoid {
    fn contains(&self, point: &Point) -> Result<bool> {
        ensure_defined!(self, "Ellipsoid");
        ensure_defined!(point, "Point");
        Ok(self.lies_on_surface(point, SURFACE_TOLERANCE))
    }
}

impl Contains<PointSet> for Ellipsoid {
    fn contains(&self, point_set: &PointSet) -> Result<bool> {
        ensure_defined!(self, "Ellipsoid");
        ensure_defined!(point_set, "Point set");
        Ok(!point_set.is_empty()
            && point_set
                .iter()
                .all(|p| self.lies_on_surface(p, SURFACE_TOLERANCE)))
    }
}

impl Contains<Segment> for Ellipsoid {
    fn contains(&self, segment: &Segment) -> Result<bool> {
        ensure_defined!(self, "Ellipsoid");
        ensure_defined!(segment, "Segment");
        Ok(self.lies_on_surface(&segment.first, SURFACE_TOLERANCE)
            && self.lies_on_surface(&segment.second, SURFACE_TOLERANCE))
    }
}

impl Intersects<Point> for Ellipsoid {
    fn intersects(&self, point: &Point) -> Result<bool> {
        self.contains(point)
    }
}

impl Intersects<PointSet> for Ellipsoid {
    fn intersects(&self, point_set: &PointSet) -> Result<bool> {
        ensure_defined!(self, "Ellipsoid");
        ensure_defined!(point_set, "Point set");
        Ok(point_set
            .iter()
            .any(|p| self.lies_on_surface(p, SURFACE_TOLERANCE)))
    }
}

impl Intersects<Line> for Ellipsoid {
    fn intersects(&self, line: &Line) -> Result<bool> {
        Ok(!self.intersection_with(line)?.is_empty())
    }
}

impl Intersects<Ray> for Ellipsoid {
    fn intersects(&self, ray: &Ray) -> Result<bool> {
        Ok(!self.ray_surface_points(ray)?.is_empty())
    }
}

impl Intersects<Segment> for Ellipsoid {
    /// A degenerate segment reduces to a containment test of its endpoint
    fn intersects(&self, segment: &Segment) -> Result<bool> {
        Ok(match self.segment_hits(segment)? {
            SegmentHits::Points(points) => !points.is_empty(),
            SegmentHits::Chord(_) => true,
        })
    }
}

impl Intersects<Plane> for Ellipsoid {
    /// Support function test: the plane meets the ellipsoid iff its distance to the center
    /// does not exceed the extent of the ellipsoid along the normal.
    fn intersects(&self, plane: &Plane) -> Result<bool> {
        ensure_defined!(self, "Ellipsoid");
        let distance = plane.distance_to(&self.center)?;
        let n = self.rotation_to_body(&plane.normal);
        let extent = n.component_mul(&self.semi_axes).norm();
        Ok(distance <= extent + PLANE_TOLERANCE)
    }
}

impl Intersects<Cone> for Ellipsoid {
    fn intersects(&self, cone: &Cone) -> Result<bool> {
        cone.intersects_sampled(self, DEFAULT_DISCRETIZATION_LEVEL)
    }
}

impl Intersects<Pyramid> for Ellipsoid {
    fn intersects(&self, pyramid: &Pyramid) -> Result<bool> {
        pyramid.intersects_sampled(self, DEFAULT_DISCRETIZATION_LEVEL)
    }
}

impl IntersectionWith<Line> for Ellipsoid {
    fn intersection_with(&self, line: &Line) -> Result<Intersection> {
        ensure_defined!(self, "Ellipsoid");
        ensure_defined!(line, "Line");
        let intersection = match line_surface_hits(self, &line.origin, &line.direction) {
            SurfaceHits::None => Intersection::empty(),
            SurfaceHits::Roots(roots) => {
                ensure_root_count(&roots)?;
                match roots.as_slice() {
                    [t] => Intersection::point(line.point_at(*t)),
                    ts => Intersection::point_set(ts.iter().map(|&t| line.point_at(t)).collect()),
                }
            }
            SurfaceHits::Chord(t0, t1) => {
                Intersection::segment(Segment::new(line.point_at(t0), line.point_at(t1)))
            }
        };
        Ok(intersection)
    }
}

impl IntersectionWith<Ray> for Ellipsoid {
    fn intersection_with(&self, ray: &Ray) -> Result<Intersection> {
        self.intersection_with_ray(ray, false)
    }
}

impl IntersectionWith<Segment> for Ellipsoid {
    fn intersection_with(&self, segment: &Segment) -> Result<Intersection> {
        let intersection = match self.segment_hits(segment)? {
            SegmentHits::Chord(chord) => Intersection::segment(chord),
            SegmentHits::Points(points) => {
                let points = PointSet::new(points);
                match points.size() {
                    0 => Intersection::empty(),
                    1 => Intersection::point(points.points()[0]),
                    _ => Intersection::point_set(points),
                }
            }
        };
        Ok(intersection)
    }
}

use log::trace;
use nalgebra::Vector3;

use crate::geometry::primitives::{Ellipsoid, Point};
use crate::util::tolerance::{
    DIRECTION_TOLERANCE, DISCRIMINANT_TOLERANCE, PLANE_TOLERANCE, ROOT_TOLERANCE,
};

/// Where the line `origin + t * direction` meets the surface of an ellipsoid, in terms of `t`
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SurfaceHits {
    None,
    /// Isolated crossings, in increasing order
    Roots(Vec<f64>),
    /// The line runs through the filled region of a flat (degenerate) ellipsoid from `t0` to `t1`
    Chord(f64, f64),
}

/// Solves `|S⁻¹ R⁻¹ (origin + t * direction - center)|² = 1` for `t`,
/// where `R` is the orientation and `S` the diagonal of semi-axes of the ellipsoid.
pub(crate) fn line_surface_hits(
    ellipsoid: &Ellipsoid,
    origin: &Point,
    direction: &Vector3<f64>,
) -> SurfaceHits {
    let o = ellipsoid.to_body_frame(origin);
    let d = ellipsoid.rotation_to_body(direction);
    let axes = ellipsoid.semi_axes;

    if d.norm() <= DIRECTION_TOLERANCE {
        //the line collapses to its origin
        return match ellipsoid.lies_on_surface(origin, ROOT_TOLERANCE) {
            true => SurfaceHits::Roots(vec![0.0]),
            false => SurfaceHits::None,
        };
    }

    let flat = (0..3).filter(|&i| axes[i] == 0.0).collect::<Vec<_>>();
    if flat.is_empty() {
        let u = o.component_div(&axes);
        let w = d.component_div(&axes);
        return match solve_quadratic(w.dot(&w), w.dot(&u), u.dot(&u) - 1.0) {
            Quadratic::None => SurfaceHits::None,
            Quadratic::Double(t) => SurfaceHits::Roots(vec![t]),
            Quadratic::Distinct(t0, t1) => SurfaceHits::Roots(vec![t0, t1]),
        };
    }

    //degenerate ellipsoid: the surface is the filled region spanned by the non-zero axes
    if let Some(&i) = flat.iter().find(|&&i| d[i].abs() > DIRECTION_TOLERANCE) {
        //transversal: at most a single crossing of the collapsed plane
        let t = -o[i] / d[i];
        let crossing = *origin + direction * t;
        return match ellipsoid.lies_on_surface(&crossing, ROOT_TOLERANCE) {
            true => SurfaceHits::Roots(vec![t]),
            false => {
                trace!("[QDR] transversal crossing at t = {t} misses the flat ellipsoid");
                SurfaceHits::None
            }
        };
    }

    if flat.iter().any(|&i| o[i].abs() > PLANE_TOLERANCE) {
        //parallel to, but outside of the collapsed plane
        return SurfaceHits::None;
    }

    let (mut a2, mut a1, mut a0) = (0.0, 0.0, -1.0);
    for i in (0..3).filter(|i| !flat.contains(i)) {
        let (u, w) = (o[i] / axes[i], d[i] / axes[i]);
        a2 += w * w;
        a1 += w * u;
        a0 += u * u;
    }
    if a2 == 0.0 {
        //the line's only freedom is along collapsed axes
        return match a0 <= 0.0 {
            true => SurfaceHits::Roots(vec![0.0]),
            false => SurfaceHits::None,
        };
    }
    match solve_quadratic(a2, a1, a0) {
        Quadratic::None => SurfaceHits::None,
        Quadratic::Double(t) => SurfaceHits::Roots(vec![t]),
        Quadratic::Distinct(t0, t1) => SurfaceHits::Chord(t0, t1),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Quadratic {
    None,
    Double(f64),
    /// Sorted roots
    Distinct(f64, f64),
}

impl Quadratic {
    pub(crate) fn roots(self) -> Vec<f64> {
        match self {
            Quadratic::None => vec![],
            Quadratic::Double(t) => vec![t],
            Quadratic::Distinct(t0, t1) => vec![t0, t1],
        }
    }
}

/// Real roots of `a2 t² + 2 a1 t + a0 = 0` with `a2 > 0`
pub(crate) fn solve_quadratic(a2: f64, a1: f64, a0: f64) -> Quadratic {
    let discriminant = a1 * a1 - a0 * a2;
    if discriminant < -DISCRIMINANT_TOLERANCE {
        Quadratic::None
    } else if discriminant.abs() <= DISCRIMINANT_TOLERANCE {
        Quadratic::Double(-a1 / a2)
    } else {
        //avoids cancellation between -a1 and the root of the discriminant
        let q = -(a1 + a1.signum() * discriminant.sqrt());
        let (t0, t1) = (q / a2, a0 / q);
        match t0 <= t1 {
            true => Quadratic::Distinct(t0, t1),
            false => Quadratic::Distinct(t1, t0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn quadratic_roots() {
        assert_eq!(solve_quadratic(1.0, 0.0, 1.0), Quadratic::None);
        assert_eq!(solve_quadratic(1.0, -1.0, 1.0), Quadratic::Double(1.0));
        match solve_quadratic(1.0, 0.0, -4.0) {
            Quadratic::Distinct(t0, t1) => {
                assert!(approx_eq!(f64, t0, -2.0, ulps = 2));
                assert!(approx_eq!(f64, t1, 2.0, ulps = 2));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn line_through_unit_sphere() {
        let sphere = Ellipsoid::sphere(Point::origin(), 1.0).unwrap();
        let hits = line_surface_hits(&sphere, &Point(-3.0, 0.0, 0.0), &Vector3::x());
        match hits {
            SurfaceHits::Roots(roots) => {
                assert_eq!(roots.len(), 2);
                assert!(approx_eq!(f64, roots[0], 2.0, epsilon = 1e-12));
                assert!(approx_eq!(f64, roots[1], 4.0, epsilon = 1e-12));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn tangent_line() {
        let sphere = Ellipsoid::sphere(Point::origin(), 1.0).unwrap();
        let hits = line_surface_hits(&sphere, &Point(0.0, 1.0, 0.0), &Vector3::x());
        assert_eq!(hits, SurfaceHits::Roots(vec![0.0]));
    }

    #[test]
    fn flat_ellipsoid() {
        let disk = Ellipsoid::new(
            Point::origin(),
            2.0,
            2.0,
            0.0,
            nalgebra::UnitQuaternion::identity(),
        )
        .unwrap();
        let transversal = line_surface_hits(&disk, &Point(1.0, 0.0, 5.0), &-Vector3::z());
        assert_eq!(transversal, SurfaceHits::Roots(vec![5.0]));

        let missing = line_surface_hits(&disk, &Point(3.0, 0.0, 5.0), &-Vector3::z());
        assert_eq!(missing, SurfaceHits::None);

        match line_surface_hits(&disk, &Point(-4.0, 0.0, 0.0), &Vector3::x()) {
            SurfaceHits::Chord(t0, t1) => {
                assert!(approx_eq!(f64, t0, 2.0, epsilon = 1e-12));
                assert!(approx_eq!(f64, t1, 6.0, epsilon = 1e-12));
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}

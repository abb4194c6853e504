//! All tolerances are compiled-in policy, not user configuration.

/// Maximum deviation of the normalized quadratic form from 1 for a point to lie on an ellipsoid surface.
pub const SURFACE_TOLERANCE: f64 = f64::EPSILON;

/// Discriminant band within which the line/ellipsoid quadratic is considered to have a double root.
pub const DISCRIMINANT_TOLERANCE: f64 = 1e-25;

/// Surface deviation accepted when re-checking a computed root against the ellipsoid.
///
/// Computed roots carry a few ULPs of error per coordinate, so the re-check is looser than [`SURFACE_TOLERANCE`].
pub const ROOT_TOLERANCE: f64 = 1e-9;

/// Maximum distance between a point and a line (ray, segment) for the point to lie on it.
pub const LINE_TOLERANCE: f64 = 1e-12;

/// Maximum distance between a point and a plane for the point to lie on it.
pub const PLANE_TOLERANCE: f64 = 1e-12;

/// Below this norm a direction vector is considered to be zero.
pub const DIRECTION_TOLERANCE: f64 = 1e-15;

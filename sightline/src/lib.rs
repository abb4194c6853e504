//! Exact and discretized intersection queries between 3D geometric primitives.
//!
//! Points, lines, rays, segments, planes, polygons, spheres, ellipsoids, cones and pyramids
//! can be tested against each other with [`Intersects`](geometry::geo_traits::Intersects) and
//! [`Contains`](geometry::geo_traits::Contains), or intersected with
//! [`IntersectionWith`](geometry::geo_traits::IntersectionWith), which produces a uniform
//! [`Intersection`](geometry::Intersection) value.

/// Error taxonomy shared by every query
pub mod error;

/// Geometric primitives, the intersection result type and the intersection algorithms
pub mod geometry;

/// Importing queries from and exporting results to their external (serializable) representation
pub mod io;

/// Helper types and constants which do not belong to any specific primitive
pub mod util;

#[doc(inline)]
pub use error::{GeomError, Result};

#[doc(inline)]
pub use nalgebra::{UnitQuaternion, Vector3};

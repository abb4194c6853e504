/// Set of traits representing the query contract shared by every primitive
pub mod geo_traits;

/// Set of geometric primitives - the value types every query operates on
pub mod primitives;

/// Closed-form line/ellipsoid root solving
mod quadric;

/// Discretized approximators for cone and pyramid lateral surfaces
pub mod sampling;

mod intersection;
mod transformation;

#[doc(inline)]
pub use intersection::{Intersection, IntersectionObject, IntersectionType, Object};

#[doc(inline)]
pub use transformation::Transformation;

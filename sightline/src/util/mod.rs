mod config;
mod fpa;
mod interval;

/// Fixed numeric tolerances used by the intersection algorithms
pub mod tolerance;

#[doc(inline)]
pub use config::{DEFAULT_DISCRETIZATION_LEVEL, SamplingConfig};
#[doc(inline)]
pub use fpa::FPA;
#[doc(inline)]
pub use interval::{Interval, IntervalKind};

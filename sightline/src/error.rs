use thiserror::Error;

use crate::geometry::IntersectionType;

/// Every failure a query, constructor or accessor of this crate can raise.
///
/// Errors are never swallowed: each operation either fully succeeds or returns one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// An operand (`self` or an argument) is not fully defined
    #[error("{0} is undefined")]
    Undefined(&'static str),
    /// A value is structurally invalid and was rejected at construction
    #[error("invalid construction: {0}")]
    InvalidConstruction(String),
    /// A parameter is out of its allowed range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A solver produced an outcome the classification logic cannot map
    #[error("intersection algorithm has failed: {0}")]
    AlgorithmFailure(String),
    /// The intersection was downcast to the wrong geometry
    #[error("intersection holds {actual:?}, not {expected:?}")]
    TypeMismatch {
        expected: IntersectionType,
        actual: IntersectionType,
    },
}

pub type Result<T> = std::result::Result<T, GeomError>;

/// Returns early with [`GeomError::Undefined`] if `$value` is not defined.
macro_rules! ensure_defined {
    ($value:expr, $name:literal) => {
        if !$crate::geometry::geo_traits::Defined::is_defined($value) {
            return Err($crate::error::GeomError::Undefined($name));
        }
    };
}

pub(crate) use ensure_defined;

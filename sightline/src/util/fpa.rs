use std::cmp::Ordering;
use std::fmt::Display;

use float_cmp::approx_eq;

/// Angle or length compared with a few ULPs of slack, so that values computed along
/// different paths (e.g. `acos` of a dot product against a stored half-angle) still compare equal.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl FPA {
    /// Maximum distance in units of least precision for two values to be equal
    pub const ULPS: i64 = 8;

    /// Absolute slack around zero, where ULP comparison breaks down
    pub const EPSILON: f64 = 4.0 * f64::EPSILON;

    pub fn is_zero(self) -> bool {
        self == FPA(0.0)
    }
}

impl From<f64> for FPA {
    fn from(value: f64) -> Self {
        FPA(value)
    }
}

impl PartialEq for FPA {
    fn eq(&self, other: &Self) -> bool {
        approx_eq!(f64, self.0, other.0, epsilon = Self::EPSILON, ulps = Self::ULPS)
    }
}

impl PartialOrd for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        self.0.partial_cmp(&other.0)
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "~{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recomputed_angle_is_equal() {
        let angle = 0.3_f64;
        let recomputed = angle.cos().acos();
        assert!(FPA(recomputed) <= FPA(angle));
        assert!(FPA(recomputed) >= FPA(angle));
    }

    #[test]
    fn distinct_values_are_ordered() {
        assert!(FPA(0.1) < FPA(0.1 + 1e-9));
        assert!(FPA(1e-17).is_zero());
        assert!(!FPA(1e-9).is_zero());
        assert!(FPA(f64::NAN).partial_cmp(&FPA(0.0)).is_none());
    }
}

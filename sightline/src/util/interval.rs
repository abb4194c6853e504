use serde::{Deserialize, Serialize};

/// Which bounds of an [`Interval`] belong to it
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntervalKind {
    /// `[lower, upper]`
    Closed,
    /// `(lower, upper)`
    Open,
    /// `(lower, upper]`
    HalfOpenLeft,
    /// `[lower, upper)`
    HalfOpenRight,
}

/// Interval of the real line
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub lower: f64,
    pub upper: f64,
    pub kind: IntervalKind,
}

impl Interval {
    pub fn new(lower: f64, upper: f64, kind: IntervalKind) -> Self {
        Self { lower, upper, kind }
    }

    pub fn closed(lower: f64, upper: f64) -> Self {
        Self::new(lower, upper, IntervalKind::Closed)
    }

    pub fn open(lower: f64, upper: f64) -> Self {
        Self::new(lower, upper, IntervalKind::Open)
    }

    fn lower_closed(&self) -> bool {
        matches!(self.kind, IntervalKind::Closed | IntervalKind::HalfOpenRight)
    }

    fn upper_closed(&self) -> bool {
        matches!(self.kind, IntervalKind::Closed | IntervalKind::HalfOpenLeft)
    }

    pub fn is_empty(&self) -> bool {
        match self.lower.partial_cmp(&self.upper) {
            Some(std::cmp::Ordering::Less) => false,
            Some(std::cmp::Ordering::Equal) => self.kind != IntervalKind::Closed,
            _ => true,
        }
    }

    pub fn contains_value(&self, x: f64) -> bool {
        let above_lower = x > self.lower || (self.lower_closed() && x == self.lower);
        let below_upper = x < self.upper || (self.upper_closed() && x == self.upper);
        above_lower && below_upper
    }

    /// True if every value of `other` is a value of `self`
    pub fn contains_interval(&self, other: &Interval) -> bool {
        if other.is_empty() {
            return !self.is_empty();
        }
        let lower_ok = match other.lower_closed() && !self.lower_closed() {
            true => self.lower < other.lower,
            false => self.lower <= other.lower,
        };
        let upper_ok = match other.upper_closed() && !self.upper_closed() {
            true => other.upper < self.upper,
            false => other.upper <= self.upper,
        };
        lower_ok && upper_ok
    }

    /// True if `self` and `other` share at least one value
    pub fn intersects(&self, other: &Interval) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (lower, lower_closed) = tighter_bound(
            (self.lower, self.lower_closed()),
            (other.lower, other.lower_closed()),
            |a, b| a > b,
        );
        let (upper, upper_closed) = tighter_bound(
            (self.upper, self.upper_closed()),
            (other.upper, other.upper_closed()),
            |a, b| a < b,
        );
        lower < upper || (lower == upper && lower_closed && upper_closed)
    }
}

fn tighter_bound(a: (f64, bool), b: (f64, bool), tighter: fn(f64, f64) -> bool) -> (f64, bool) {
    if a.0 == b.0 {
        (a.0, a.1 && b.1)
    } else if tighter(a.0, b.0) {
        a
    } else {
        b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_interval_excludes_bounds() {
        let i = Interval::open(-1.0, 1.0);
        assert!(i.contains_value(0.0));
        assert!(!i.contains_value(1.0));
        assert!(!i.contains_value(-1.0));
        assert!(Interval::closed(-1.0, 1.0).contains_value(1.0));
    }

    #[test]
    fn containment_respects_boundary_kind() {
        let closed = Interval::closed(-1.0, 1.0);
        assert!(!Interval::open(-1.0, 1.0).contains_interval(&closed));
        assert!(Interval::open(-1.5, 1.5).contains_interval(&closed));
        assert!(closed.contains_interval(&Interval::open(-1.0, 1.0)));
        assert!(!closed.contains_interval(&Interval::closed(-1.0, 2.0)));
    }

    #[test]
    fn touching_intervals() {
        let a = Interval::closed(0.0, 1.0);
        assert!(a.intersects(&Interval::closed(1.0, 2.0)));
        assert!(!a.intersects(&Interval::open(1.0, 2.0)));
        assert!(a.intersects(&Interval::open(0.5, 2.0)));
        assert!(!a.intersects(&Interval::closed(1.5, 2.0)));
    }

    #[test]
    fn degenerate_intervals() {
        assert!(!Interval::closed(1.0, 1.0).is_empty());
        assert!(Interval::open(1.0, 1.0).is_empty());
        assert!(Interval::closed(2.0, 1.0).is_empty());
    }
}

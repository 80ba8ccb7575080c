//! Interval arithmetic for ray parameter ranges.
//!
//! Provides intervals over the ray parameter t. Hit testing uses the open
//! interval semantics of [`Interval::surrounds`]: a candidate root exactly
//! equal to either bound is rejected.

/// Interval between two values of the ray parameter.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f64,
    /// Maximum value of the interval
    pub max: f64,
}

impl Interval {
    /// Empty interval constant (surrounds and contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// Universe interval constant (contains all real numbers).
    pub const UNIVERSE: Interval = Interval {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// Create a new interval with given min and max values.
    ///
    /// An inverted interval (min >= max) is valid and behaves as empty for
    /// `surrounds`.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Calculate the size (width) of the interval
    pub fn size(&self) -> f64 {
        self.max - self.min
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f64) -> bool {
        self.min <= x && x <= self.max
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }

    /// Clamp the given value to be within this interval's bounds
    pub fn clamp(&self, x: f64) -> f64 {
        x.clamp(self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounds_excludes_both_bounds() {
        let i = Interval::new(0.0, 1.0);
        assert!(i.surrounds(0.5));
        assert!(!i.surrounds(0.0));
        assert!(!i.surrounds(1.0));
        assert!(!i.surrounds(-0.1));
        assert!(!i.surrounds(1.1));
    }

    #[test]
    fn contains_includes_both_bounds() {
        let i = Interval::new(0.0, 1.0);
        assert!(i.contains(0.0));
        assert!(i.contains(1.0));
        assert!(!i.contains(1.5));
    }

    #[test]
    fn inverted_interval_surrounds_nothing() {
        let i = Interval::new(0.0, -1.0);
        assert!(!i.surrounds(0.5));
        assert!(!i.surrounds(-0.5));
        assert_eq!(i.size(), -1.0);
    }

    #[test]
    fn empty_and_universe_constants() {
        assert!(!Interval::EMPTY.surrounds(0.0));
        assert!(Interval::UNIVERSE.surrounds(1e30));
        assert!(Interval::UNIVERSE.surrounds(-1e30));
    }

    #[test]
    fn clamp_limits_to_bounds() {
        let i = Interval::new(0.0, 1.0);
        assert_eq!(i.clamp(-2.0), 0.0);
        assert_eq!(i.clamp(0.25), 0.25);
        assert_eq!(i.clamp(3.0), 1.0);
    }
}

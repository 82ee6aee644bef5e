//! Sales rate tiers used to color the `Sales%` cells.

/// Lower bound (inclusive) of the high tier.
pub const HIGH_THRESHOLD: f64 = 40.0;
/// Lower bound (inclusive) of the medium tier.
pub const MEDIUM_THRESHOLD: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    High,
    Medium,
    Low,
    /// Missing or non-numeric value; rendered without a color.
    None,
}

/// Classify a percent value. Total over every input, NaN included.
pub fn classify_rate(value: Option<f64>) -> Tier {
    match value {
        Some(v) if v.is_nan() => Tier::None,
        Some(v) if v >= HIGH_THRESHOLD => Tier::High,
        Some(v) if v >= MEDIUM_THRESHOLD => Tier::Medium,
        Some(_) => Tier::Low,
        None => Tier::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify_rate(Some(40.0)), Tier::High);
        assert_eq!(classify_rate(Some(39.999)), Tier::Medium);
        assert_eq!(classify_rate(Some(30.0)), Tier::Medium);
        assert_eq!(classify_rate(Some(29.999)), Tier::Low);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify_rate(Some(1234.0)), Tier::High);
        assert_eq!(classify_rate(Some(-5.0)), Tier::Low);
        assert_eq!(classify_rate(Some(f64::INFINITY)), Tier::High);
        assert_eq!(classify_rate(Some(f64::NEG_INFINITY)), Tier::Low);
    }

    #[test]
    fn test_missing_has_no_tier() {
        assert_eq!(classify_rate(None), Tier::None);
        assert_eq!(classify_rate(Some(f64::NAN)), Tier::None);
    }
}

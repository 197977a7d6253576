//! Fixed-breakpoint price tiers used as scoring metadata and display labels.

use serde::{Deserialize, Serialize};

/// Price band of a serving.
///
/// Breakpoints are inclusive on their upper edge: `10_000` is
/// [`PriceTier::Cheap`], anything above it up to `12_000` is
/// [`PriceTier::Normal`].
///
/// # Examples
/// ```
/// use mieayam_core::PriceTier;
///
/// assert_eq!(PriceTier::from_price(7_500.0), PriceTier::AbsurdlyCheap);
/// assert_eq!(PriceTier::from_price(10_000.0), PriceTier::Cheap);
/// assert_eq!(PriceTier::from_price(10_001.0).rank(), 3);
/// assert_eq!(PriceTier::from_price(25_000.0).label(), "expensive");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    /// Below 8 000.
    AbsurdlyCheap,
    /// 8 000 to 10 000.
    Cheap,
    /// Above 10 000 up to 12 000.
    Normal,
    /// Above 12 000 up to 15 000.
    MidRange,
    /// Above 15 000 up to 20 000.
    FairlyExpensive,
    /// Above 20 000.
    Expensive,
}

impl PriceTier {
    /// Classify a price.
    #[must_use]
    pub fn from_price(price: f64) -> Self {
        if price < 8_000.0 {
            Self::AbsurdlyCheap
        } else if price <= 10_000.0 {
            Self::Cheap
        } else if price <= 12_000.0 {
            Self::Normal
        } else if price <= 15_000.0 {
            Self::MidRange
        } else if price <= 20_000.0 {
            Self::FairlyExpensive
        } else {
            Self::Expensive
        }
    }

    /// One-based tier number, `1..=6`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::AbsurdlyCheap => 1,
            Self::Cheap => 2,
            Self::Normal => 3,
            Self::MidRange => 4,
            Self::FairlyExpensive => 5,
            Self::Expensive => 6,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AbsurdlyCheap => "absurdly cheap",
            Self::Cheap => "cheap",
            Self::Normal => "normal",
            Self::MidRange => "mid-range restaurant",
            Self::FairlyExpensive => "fairly expensive",
            Self::Expensive => "expensive",
        }
    }
}

impl std::fmt::Display for PriceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.0, PriceTier::AbsurdlyCheap)]
    #[case(7_999.0, PriceTier::AbsurdlyCheap)]
    #[case(8_000.0, PriceTier::Cheap)]
    #[case(10_000.0, PriceTier::Cheap)]
    #[case(10_000.5, PriceTier::Normal)]
    #[case(12_000.0, PriceTier::Normal)]
    #[case(12_001.0, PriceTier::MidRange)]
    #[case(15_000.0, PriceTier::MidRange)]
    #[case(15_001.0, PriceTier::FairlyExpensive)]
    #[case(20_000.0, PriceTier::FairlyExpensive)]
    #[case(20_001.0, PriceTier::Expensive)]
    fn classifies_breakpoints(#[case] price: f64, #[case] expected: PriceTier) {
        assert_eq!(PriceTier::from_price(price), expected);
    }

    #[rstest]
    fn ranks_follow_ordering() {
        assert!(PriceTier::Cheap < PriceTier::Expensive);
        assert_eq!(PriceTier::MidRange.rank(), 4);
        assert_eq!(PriceTier::MidRange.to_string(), "mid-range restaurant");
    }
}

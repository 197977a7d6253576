//! Score reviews on the public `0.0..=10.0` scale.
//!
//! The `Scorer` trait turns a [`ReviewRecord`](crate::ReviewRecord) into a
//! [`ScoringResult`] carrying every intermediate stage, so callers can show
//! a breakdown next to the headline score.

use serde::{Deserialize, Serialize};

use crate::{Dimension, PriceTier, ReviewRecord, ScoringError};

/// Upper bound of the public score scale.
pub const MAX_SCORE: f64 = 10.0;

/// Calculate a quality score for a review.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so batches can be
/// scored across threads. Scoring is pure: the same record always yields the
/// same result. Missing optional fields never fail; only an unusable price
/// returns [`ScoringError::InvalidPrice`].
///
/// # Examples
///
/// ```rust
/// use mieayam_core::{
///     Completeness, PriceTier, ProductType, ReviewRecord, Scorer, ScoringError, ScoringResult,
/// };
///
/// struct FlatScorer;
///
/// impl Scorer for FlatScorer {
///     fn score(&self, review: &ReviewRecord) -> Result<ScoringResult, ScoringError> {
///         let price = ScoringError::check_price(review.price)?;
///         Ok(ScoringResult::flat(5.0, PriceTier::from_price(price), Completeness::of(review)))
///     }
/// }
///
/// let review = ReviewRecord::new(1, ProductType::Soup, 10_000.0);
/// assert_eq!(FlatScorer.score(&review)?.final_score, 5.0);
/// # Ok::<(), ScoringError>(())
/// ```
pub trait Scorer: Send + Sync {
    /// Score `review`.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidPrice`] when the price is not a
    /// positive finite number.
    fn score(&self, review: &ReviewRecord) -> Result<ScoringResult, ScoringError>;

    /// Clamp and validate a raw public score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=10.0`.
    #[must_use]
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, MAX_SCORE)
    }
}

/// Breakdown of a review's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    /// Average of the active flavour dimensions (`rasaScore`).
    pub flavor_score: f64,
    /// Average of the facility dimensions (`fasilitasScore`).
    pub facility_score: f64,
    /// Weighted blend of flavour and facility.
    pub base_score: f64,
    /// Service-time bonus or penalty.
    pub time_score: f64,
    /// Bonus for available toppings.
    pub topping_bonus: f64,
    /// Price multiplier.
    pub value_factor: f64,
    /// Final score on the internal 0–100 scale.
    #[serde(rename = "finalScore100")]
    pub final_score_100: f64,
    /// Final score on the public 0–10 scale.
    pub final_score: f64,
    /// Price band of the review.
    pub price_tier: PriceTier,
    /// Which active dimensions were rated.
    pub completeness: Completeness,
}

impl ScoringResult {
    /// Result whose every stage equals `score`, with neutral adjustments.
    ///
    /// Useful for fixed-score scorers and test doubles.
    #[must_use]
    pub fn flat(score: f64, price_tier: PriceTier, completeness: Completeness) -> Self {
        Self {
            flavor_score: score,
            facility_score: score,
            base_score: score,
            time_score: 0.0,
            topping_bonus: 0.0,
            value_factor: 1.0,
            final_score_100: score,
            final_score: score,
            price_tier,
            completeness,
        }
    }
}

/// Report of which active dimensions carried a rating.
///
/// Absent dimensions still score as zero; this report lets callers warn
/// about incomplete reviews without changing the score.
///
/// # Examples
/// ```
/// use mieayam_core::{Completeness, Dimension, ProductType, ReviewRecord};
///
/// let review = ReviewRecord::new(1, ProductType::Fried, 10_000.0)
///     .with_rating(Dimension::OilBalance, 7.0);
/// let completeness = Completeness::of(&review);
/// assert_eq!(completeness.expected, 9);
/// assert_eq!(completeness.rated(), 1);
/// assert!(!completeness.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Completeness {
    /// Number of active dimensions.
    pub expected: usize,
    /// Active dimensions without a usable rating.
    pub missing: Vec<Dimension>,
}

impl Completeness {
    /// Inspect the active dimensions of `review`.
    #[must_use]
    pub fn of(review: &ReviewRecord) -> Self {
        let active = review.active_dimensions();
        Self {
            expected: active.len(),
            missing: review.ratings.missing_from(&active),
        }
    }

    /// Number of active dimensions that carried a rating.
    #[must_use]
    pub fn rated(&self) -> usize {
        self.expected.saturating_sub(self.missing.len())
    }

    /// Report whether every active dimension was rated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::worked_example_soup;
    use crate::ProductType;
    use rstest::rstest;

    struct FixedScorer;

    impl Scorer for FixedScorer {
        fn score(&self, review: &ReviewRecord) -> Result<ScoringResult, ScoringError> {
            let price = ScoringError::check_price(review.price)?;
            Ok(ScoringResult::flat(
                7.0,
                PriceTier::from_price(price),
                Completeness::of(review),
            ))
        }
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    #[case(-0.5, 0.0)]
    #[case(12.0, 10.0)]
    #[case(4.2, 4.2)]
    fn sanitise_clamps_and_filters(#[case] input: f64, #[case] expected: f64) {
        let result = FixedScorer::sanitise(input);
        assert!((result - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn scorer_rejects_zero_price() {
        let review = ReviewRecord::new(1, ProductType::Soup, 0.0);
        let err = FixedScorer.score(&review).expect_err("zero price");
        assert!(matches!(err, ScoringError::InvalidPrice { .. }));
    }

    #[rstest]
    fn scorer_is_object_safe() {
        let scorer: Box<dyn Scorer> = Box::new(FixedScorer);
        let review = ReviewRecord::new(1, ProductType::Fried, 9_000.0);
        let result = scorer.score(&review).expect("valid price");
        assert_eq!(result.price_tier, PriceTier::Cheap);
    }

    #[rstest]
    fn worked_example_is_complete() {
        let completeness = Completeness::of(&worked_example_soup());
        assert!(completeness.is_complete());
        assert_eq!(completeness.rated(), 11);
    }

    #[rstest]
    fn fried_fields_do_not_count_towards_soup_completeness() {
        let review = ReviewRecord::new(1, ProductType::Soup, 10_000.0)
            .with_rating(Dimension::OilBalance, 9.0);
        assert_eq!(Completeness::of(&review).rated(), 0);
    }

    #[rstest]
    fn result_serialises_with_camel_case_names() {
        let review = ReviewRecord::new(1, ProductType::Soup, 10_000.0);
        let result = ScoringResult::flat(1.0, PriceTier::Cheap, Completeness::of(&review));
        let json = serde_json::to_value(&result).expect("encode result");
        assert!(json.get("finalScore100").is_some());
        assert!(json.get("flavorScore").is_some());
        assert_eq!(json["priceTier"], "cheap");
    }
}

//! The value-adjusted scoring formula.
//!
//! Each stage is rounded to two decimals and the rounded value feeds the
//! next stage, so stored breakdowns add up the way they are displayed.
#![forbid(unsafe_code)]

use log::debug;
use mieayam_core::{
    Completeness, FACILITY_DIMENSIONS, MAX_SCORE, PriceTier, ReviewRecord, Scorer, ScoringError,
    ScoringResult,
};

use crate::{ScoringWeights, WeightsError, round2};

/// Upper bound of the internal score scale.
const MAX_SCORE_100: f64 = 100.0;

/// Scorer implementing the value-adjusted formula.
///
/// # Examples
/// ```
/// use mieayam_core::{ProductType, ReviewRecord, Scorer};
/// use mieayam_scorer::ValueScorer;
///
/// let review = ReviewRecord::new(1, ProductType::Soup, 17_000.0);
/// let result = ValueScorer::default().score(&review)?;
/// assert_eq!(result.value_factor, 1.0);
/// assert_eq!(result.final_score, 0.0);
/// # Ok::<(), mieayam_core::ScoringError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ValueScorer {
    weights: ScoringWeights,
}

impl ValueScorer {
    /// Construct a scorer from validated weights.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when [`ScoringWeights::validate`] rejects the
    /// weights.
    pub fn new(weights: ScoringWeights) -> Result<Self, WeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights used by this scorer.
    #[must_use]
    pub const fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Average of the flavour dimensions selected by the product type.
    #[must_use]
    pub fn flavor_score(review: &ReviewRecord) -> f64 {
        round2(review.ratings.mean_of(review.active_flavor_dimensions()))
    }

    /// Average of the facility dimensions.
    #[must_use]
    pub fn facility_score(review: &ReviewRecord) -> f64 {
        round2(review.ratings.mean_of(&FACILITY_DIMENSIONS))
    }

    /// Bonus for fast service or penalty for slow service.
    ///
    /// Absent durations score zero.
    #[expect(
        clippy::float_arithmetic,
        reason = "the time score scales the deviation from the standard"
    )]
    #[must_use]
    pub fn time_score(&self, service_minutes: Option<f64>) -> f64 {
        let Some(minutes) = service_minutes else {
            return 0.0;
        };
        let diff = self.weights.standard_service_minutes - minutes;
        let multiplier = if minutes <= self.weights.standard_service_minutes {
            self.weights.fast_service_multiplier
        } else {
            self.weights.slow_service_multiplier
        };
        round2(diff * multiplier)
    }

    /// Bonus for the available toppings.
    #[expect(
        clippy::float_arithmetic,
        reason = "the topping bonus multiplies a count by a per-topping weight"
    )]
    #[must_use]
    pub fn topping_bonus(&self, review: &ReviewRecord) -> f64 {
        round2(f64::from(review.toppings.count()) * self.weights.topping_bonus)
    }

    /// Price multiplier, clamped to the configured bounds.
    #[expect(
        clippy::float_arithmetic,
        reason = "the value factor divides the reference price by the price"
    )]
    #[must_use]
    pub fn value_factor(&self, price: f64) -> f64 {
        let raw = self.weights.reference_price / price;
        round2(raw.clamp(self.weights.min_value_factor, self.weights.max_value_factor))
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the base score is a weighted blend of two averages"
    )]
    fn base_score(&self, flavor: f64, facility: f64) -> f64 {
        round2(flavor * self.weights.flavor_weight + facility * self.weights.facility_weight)
    }
}

impl Scorer for ValueScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the final score sums adjustments and rescales them"
    )]
    fn score(&self, review: &ReviewRecord) -> Result<ScoringResult, ScoringError> {
        let price = ScoringError::check_price(review.price)?;

        let flavor_score = Self::flavor_score(review);
        let facility_score = Self::facility_score(review);
        let base_score = self.base_score(flavor_score, facility_score);
        let time_score = self.time_score(review.service_duration());
        let topping_bonus = self.topping_bonus(review);
        let value_factor = self.value_factor(price);

        let raw_100 = (base_score + time_score + topping_bonus) * value_factor;
        let final_score_100 = round2(raw_100.clamp(0.0, MAX_SCORE_100));
        let final_score =
            <Self as Scorer>::sanitise(round2((final_score_100 / 10.0).min(MAX_SCORE)));

        let completeness = Completeness::of(review);
        if !completeness.is_complete() {
            debug!(
                "review {} scored with {} of {} dimensions rated; missing ones count as zero",
                review.id,
                completeness.rated(),
                completeness.expected,
            );
        }

        Ok(ScoringResult {
            flavor_score,
            facility_score,
            base_score,
            time_score,
            topping_bonus,
            value_factor,
            final_score_100,
            final_score,
            price_tier: PriceTier::from_price(price),
            completeness,
        })
    }
}

//! Tunable constants of the value-scoring formula.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::WeightsError;

/// Constants applied by [`ValueScorer`](crate::ValueScorer).
///
/// [`Default`] reproduces the published formula: flavour counts 80 % and
/// facilities 20 % of the base score, service is judged against an
/// eight-minute standard, each topping adds half a point, and price
/// adjusts the result by at most 15 % either side of 17 000.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringWeights {
    /// Share of the flavour average in the base score.
    pub flavor_weight: f64,
    /// Share of the facility average in the base score.
    pub facility_weight: f64,
    /// Service time, in minutes, that earns neither bonus nor penalty.
    pub standard_service_minutes: f64,
    /// Points per minute faster than the standard.
    pub fast_service_multiplier: f64,
    /// Points deducted per minute slower than the standard.
    pub slow_service_multiplier: f64,
    /// Points per available topping.
    pub topping_bonus: f64,
    /// Price at which the value factor is exactly `1.0`.
    pub reference_price: f64,
    /// Lower clamp of the value factor.
    pub min_value_factor: f64,
    /// Upper clamp of the value factor.
    pub max_value_factor: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            flavor_weight: 0.80,
            facility_weight: 0.20,
            standard_service_minutes: 8.0,
            fast_service_multiplier: 1.5,
            slow_service_multiplier: 2.0,
            topping_bonus: 0.5,
            reference_price: 17_000.0,
            min_value_factor: 0.85,
            max_value_factor: 1.15,
        }
    }
}

impl ScoringWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError`] when a value is not finite, a weight or
    /// multiplier is negative, the reference price is not positive, or the
    /// value-factor bounds are inverted.
    pub fn validate(self) -> Result<Self, WeightsError> {
        for (field, value) in self.fields() {
            if !value.is_finite() {
                return Err(WeightsError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(WeightsError::Negative { field });
            }
        }
        if self.reference_price <= 0.0 {
            return Err(WeightsError::NonPositiveReferencePrice);
        }
        if self.min_value_factor > self.max_value_factor {
            return Err(WeightsError::InvertedValueBounds {
                min: self.min_value_factor,
                max: self.max_value_factor,
            });
        }
        Ok(self)
    }

    /// Replace the reference price while returning `self` for chaining.
    #[must_use]
    pub const fn with_reference_price(mut self, price: f64) -> Self {
        self.reference_price = price;
        self
    }

    const fn fields(&self) -> [(&'static str, f64); 9] {
        [
            ("flavorWeight", self.flavor_weight),
            ("facilityWeight", self.facility_weight),
            ("standardServiceMinutes", self.standard_service_minutes),
            ("fastServiceMultiplier", self.fast_service_multiplier),
            ("slowServiceMultiplier", self.slow_service_multiplier),
            ("toppingBonus", self.topping_bonus),
            ("referencePrice", self.reference_price),
            ("minValueFactor", self.min_value_factor),
            ("maxValueFactor", self.max_value_factor),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_are_valid() {
        assert!(ScoringWeights::default().validate().is_ok());
    }

    #[rstest]
    fn rejects_non_finite_weight() {
        let weights = ScoringWeights {
            flavor_weight: f64::NAN,
            ..ScoringWeights::default()
        };
        let err = weights.validate().expect_err("NaN weight");
        assert!(matches!(err, WeightsError::NonFinite { field: "flavorWeight" }));
    }

    #[rstest]
    fn rejects_negative_multiplier() {
        let weights = ScoringWeights {
            slow_service_multiplier: -2.0,
            ..ScoringWeights::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(WeightsError::Negative {
                field: "slowServiceMultiplier"
            })
        ));
    }

    #[rstest]
    fn rejects_zero_reference_price() {
        let weights = ScoringWeights::default().with_reference_price(0.0);
        assert!(matches!(
            weights.validate(),
            Err(WeightsError::NonPositiveReferencePrice)
        ));
    }

    #[rstest]
    fn rejects_inverted_bounds() {
        let weights = ScoringWeights {
            min_value_factor: 1.2,
            max_value_factor: 0.9,
            ..ScoringWeights::default()
        };
        assert!(matches!(
            weights.validate(),
            Err(WeightsError::InvertedValueBounds { .. })
        ));
    }
}

//! Error types shared across the review engine.

use thiserror::Error;

/// Errors raised while scoring a review.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScoringError {
    /// The review price was zero, negative, or not finite.
    #[error("review price must be a positive finite number, got {price}")]
    InvalidPrice {
        /// Price supplied with the review.
        price: f64,
    },
}

impl ScoringError {
    /// Validate a price, returning it unchanged when usable.
    ///
    /// # Errors
    /// Returns [`ScoringError::InvalidPrice`] for `price <= 0` and for
    /// non-finite values.
    ///
    /// # Examples
    /// ```
    /// use mieayam_core::ScoringError;
    ///
    /// assert_eq!(ScoringError::check_price(17_000.0), Ok(17_000.0));
    /// assert!(ScoringError::check_price(0.0).is_err());
    /// ```
    pub fn check_price(price: f64) -> Result<f64, Self> {
        if price.is_finite() && price > 0.0 {
            Ok(price)
        } else {
            Err(Self::InvalidPrice { price })
        }
    }
}

/// Error returned when text does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseError {
    kind: &'static str,
    value: String,
}

impl ParseError {
    /// Record that `value` does not name a known `kind`.
    #[must_use]
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }

    /// Name of the type that failed to parse.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_unusable_prices(#[case] price: f64) {
        assert!(matches!(
            ScoringError::check_price(price),
            Err(ScoringError::InvalidPrice { .. })
        ));
    }

    #[rstest]
    fn parse_error_names_kind_and_value() {
        let err = ParseError::new("product type", "steamed");
        assert_eq!(err.kind(), "product type");
        assert_eq!(err.value(), "steamed");
        assert_eq!(err.to_string(), "unknown product type 'steamed'");
    }
}

//! Error types raised while configuring or running the scorer.
#![forbid(unsafe_code)]

use mieayam_core::ScoringError;
use thiserror::Error;

/// Errors raised when validating [`ScoringWeights`](crate::ScoringWeights).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightsError {
    /// A constant was NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Wire name of the offending field.
        field: &'static str,
    },
    /// A weight or multiplier was negative.
    #[error("{field} must not be negative")]
    Negative {
        /// Wire name of the offending field.
        field: &'static str,
    },
    /// The reference price was zero.
    #[error("reference price must be positive")]
    NonPositiveReferencePrice,
    /// The lower value-factor bound exceeded the upper bound.
    #[error("value factor bounds are inverted: {min} > {max}")]
    InvertedValueBounds {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
}

/// A review in a batch could not be scored.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("failed to score review {review_id}")]
pub struct BatchScoringError {
    /// Identifier of the rejected review.
    pub review_id: u64,
    /// Underlying scoring failure.
    #[source]
    pub source: ScoringError,
}

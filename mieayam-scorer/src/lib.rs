//! Scoring engine for chicken-noodle reviews.
//!
//! The crate provides two formulas:
//! - **Value-adjusted scoring** ([`ValueScorer`], [`compute_score`]) averages
//!   the flavour dimensions active for the review's product type and the
//!   facility dimensions, blends them 80/20, adds a service-time bonus or
//!   penalty and a topping bonus, then scales the sum by a price-derived
//!   value factor clamped to ±15 %. The result is reported on a `0.0..=10.0`
//!   scale together with every intermediate stage.
//! - **Legacy scoring** ([`legacy_score`]) reproduces scores stored before
//!   the value-adjusted formula existed.
//!
//! Both are pure functions of the review; missing ratings count as zero and
//! only a non-positive price is an error.
//!
//! # Examples
//!
//! ```
//! use mieayam_core::{Dimension, ProductType, ReviewRecord};
//! use mieayam_scorer::compute_score;
//!
//! let review = ReviewRecord::new(1, ProductType::Fried, 17_000.0)
//!     .with_rating(Dimension::NoodleTexture, 9.0)
//!     .with_service_duration(8.0);
//! let result = compute_score(&review)?;
//! assert_eq!(result.flavor_score, 1.5);
//! assert_eq!(result.time_score, 0.0);
//! # Ok::<(), mieayam_core::ScoringError>(())
//! ```

#![forbid(unsafe_code)]

mod error;
mod legacy;
mod value;
mod weights;

pub use error::{BatchScoringError, WeightsError};
pub use legacy::legacy_score;
pub use value::ValueScorer;
pub use weights::ScoringWeights;

use mieayam_core::{ReviewRecord, Scorer, ScoringError, ScoringResult};

/// Score a review with the default weights.
///
/// # Errors
/// Returns [`ScoringError::InvalidPrice`] when the price is not a positive
/// finite number.
pub fn compute_score(review: &ReviewRecord) -> Result<ScoringResult, ScoringError> {
    ValueScorer::default().score(review)
}

/// Score every review with `scorer`, preserving input order.
///
/// Stops at the first review with an unusable price.
///
/// # Errors
/// Returns [`BatchScoringError`] naming the first review that failed.
pub fn score_reviews<S: Scorer + ?Sized>(
    scorer: &S,
    reviews: &[ReviewRecord],
) -> Result<Vec<ScoringResult>, BatchScoringError> {
    reviews
        .iter()
        .map(|review| {
            scorer.score(review).map_err(|source| BatchScoringError {
                review_id: review.id,
                source,
            })
        })
        .collect()
}

/// Round to two decimals, halves away from zero.
#[expect(
    clippy::float_arithmetic,
    reason = "rounding scales by one hundred and back"
)]
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

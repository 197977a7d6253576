//! The historical price-normalised score.
//!
//! Scores stored before the value-adjusted formula was introduced were
//! computed as `((avg_flavor + facility) / price) * 1000`, unclamped and
//! unrounded. The formula is kept so those stored values can be reproduced
//! and compared; it is never blended into [`ValueScorer`](crate::ValueScorer).
#![forbid(unsafe_code)]

use mieayam_core::{
    BROTH_DIMENSIONS, Dimension, FACILITY_DIMENSIONS, ProductType, ReviewRecord, ScoringError,
};

const CHICKEN_DIMENSIONS: [Dimension; 2] = [Dimension::ChickenSeasoning, Dimension::ChickenCut];
const NOODLE_DIMENSIONS: [Dimension; 1] = [Dimension::NoodleTexture];
const PRICE_SCALE: f64 = 1_000.0;

/// Compute the legacy score for `review`.
///
/// The flavour average is the mean of three sub-averages: broth (soup
/// only, otherwise zero), noodle, and chicken. Missing ratings count as
/// zero.
///
/// # Errors
/// Returns [`ScoringError::InvalidPrice`] when the price is not a positive
/// finite number.
///
/// # Examples
/// ```
/// use mieayam_core::{Dimension, ProductType, ReviewRecord};
/// use mieayam_scorer::legacy_score;
///
/// let review = ReviewRecord::new(1, ProductType::Fried, 10_000.0)
///     .with_rating(Dimension::NoodleTexture, 9.0)
///     .with_rating(Dimension::ChickenSeasoning, 6.0)
///     .with_rating(Dimension::ChickenCut, 6.0)
///     .with_rating(Dimension::Cleanliness, 6.0);
/// // flavour = (0 + 9 + 6) / 3 = 5, facility = 6 / 3 = 2
/// assert!((legacy_score(&review)? - 0.7).abs() < 1e-9);
/// # Ok::<(), mieayam_core::ScoringError>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the legacy score divides rating averages by price"
)]
pub fn legacy_score(review: &ReviewRecord) -> Result<f64, ScoringError> {
    let price = ScoringError::check_price(review.price)?;
    let ratings = &review.ratings;

    let broth = match review.product_type {
        ProductType::Soup => ratings.mean_of(&BROTH_DIMENSIONS),
        ProductType::Fried => 0.0,
    };
    let noodle = ratings.mean_of(&NOODLE_DIMENSIONS);
    let chicken = ratings.mean_of(&CHICKEN_DIMENSIONS);
    let avg_flavor = (broth + noodle + chicken) / 3.0;
    let facility = ratings.mean_of(&FACILITY_DIMENSIONS);

    Ok((avg_flavor + facility) / price * PRICE_SCALE)
}

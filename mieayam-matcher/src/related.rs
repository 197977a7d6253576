//! "More like this" ranking around an anchor review.
#![forbid(unsafe_code)]

use mieayam_core::ReviewRecord;
use serde::Serialize;

/// Number of related reviews shown under a review page.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

const SAME_TYPE_POINTS: u32 = 3;
const SAME_CITY_POINTS: u32 = 2;
const SIMILAR_PRICE_POINTS: u32 = 2;
const SIMILAR_SCORE_POINTS: u32 = 1;
const EDITORS_CHOICE_POINTS: u32 = 1;

const PRICE_WINDOW: f64 = 5_000.0;
const SCORE_WINDOW: f64 = 1.0;

/// A candidate paired with its relevance to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RelatedReview<'a> {
    /// Additive relevance points.
    pub relevance: u32,
    /// The candidate review.
    pub review: &'a ReviewRecord,
}

/// Relevance of `candidate` to `anchor`.
///
/// Points are additive: three for the same product type, two for the same
/// city, two for a price within 5000 of the anchor's, one for a stored score
/// within one point, and one for an editor's choice. Reviews without a city
/// never share one.
///
/// # Examples
/// ```
/// use mieayam_core::{ProductType, ReviewRecord};
/// use mieayam_matcher::score_relevance;
///
/// let anchor = ReviewRecord::new(1, ProductType::Soup, 12_000.0).with_city("Solo");
/// let candidate = ReviewRecord::new(2, ProductType::Soup, 15_000.0)
///     .with_city("Solo")
///     .with_editors_choice();
/// assert_eq!(score_relevance(&candidate, &anchor), 9);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "price and score proximity compare absolute differences"
)]
#[must_use]
pub fn score_relevance(candidate: &ReviewRecord, anchor: &ReviewRecord) -> u32 {
    let same_type = candidate.product_type == anchor.product_type;
    let same_city = !anchor.city.is_empty() && candidate.city == anchor.city;
    let similar_price = (candidate.price - anchor.price).abs() <= PRICE_WINDOW;
    let similar_score = (candidate.stored_score() - anchor.stored_score()).abs() <= SCORE_WINDOW;

    [
        (same_type, SAME_TYPE_POINTS),
        (same_city, SAME_CITY_POINTS),
        (similar_price, SIMILAR_PRICE_POINTS),
        (similar_score, SIMILAR_SCORE_POINTS),
        (candidate.editors_choice, EDITORS_CHOICE_POINTS),
    ]
    .into_iter()
    .filter_map(|(hit, points)| hit.then_some(points))
    .sum()
}

/// The `limit` candidates most relevant to `anchor`, most relevant first.
///
/// The anchor itself (matched by id) and candidates scoring zero are
/// dropped. Equal relevance keeps the candidates' input order.
#[must_use]
pub fn related_reviews<'a>(
    anchor: &ReviewRecord,
    candidates: &'a [ReviewRecord],
    limit: usize,
) -> Vec<RelatedReview<'a>> {
    let mut related: Vec<RelatedReview<'a>> = candidates
        .iter()
        .filter(|candidate| candidate.id != anchor.id)
        .map(|review| RelatedReview {
            relevance: score_relevance(review, anchor),
            review,
        })
        .filter(|related| related.relevance > 0)
        .collect();
    related.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    related.truncate(limit);
    related
}

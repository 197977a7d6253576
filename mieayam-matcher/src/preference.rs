//! Category-based recommendation.
#![forbid(unsafe_code)]

use log::debug;
use mieayam_core::{ComplexityCategory, ProductType, ReviewRecord, TasteCategory};
use serde::{Deserialize, Serialize};

/// A visitor's coarse preference: how the noodles are served plus one taste
/// band and one complexity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceSelection {
    /// Required serving style.
    pub product_type: ProductType,
    /// Sweetness band.
    pub taste_category: TasteCategory,
    /// Complexity band.
    pub complexity_category: ComplexityCategory,
}

impl PreferenceSelection {
    /// Construct a selection.
    #[must_use]
    pub const fn new(
        product_type: ProductType,
        taste_category: TasteCategory,
        complexity_category: ComplexityCategory,
    ) -> Self {
        Self {
            product_type,
            taste_category,
            complexity_category,
        }
    }

    /// Report whether `review` satisfies all three constraints.
    ///
    /// Missing flavour coordinates read as zero.
    #[must_use]
    pub fn admits(&self, review: &ReviewRecord) -> bool {
        let point = review.flavor_point();
        review.product_type == self.product_type
            && self.taste_category.range().contains(&point.sweetness())
            && self.complexity_category.range().contains(&point.complexity())
    }
}

/// Recommend the highest-scored review that fits `selection`.
///
/// When no review satisfies every constraint the match relaxes to the product
/// type alone. Among equal stored scores the earliest review wins. Returns
/// `None` when no review has the requested product type.
///
/// # Examples
/// ```
/// use mieayam_core::{ComplexityCategory, ProductType, ReviewRecord, TasteCategory};
/// use mieayam_matcher::{PreferenceSelection, match_by_categories};
///
/// // Nothing is sweet and complex, so the best fried review is offered.
/// let reviews = vec![
///     ReviewRecord::new(1, ProductType::Fried, 12_000.0)
///         .with_flavor(3.0, -3.0)
///         .with_overall_score(2.1),
///     ReviewRecord::new(2, ProductType::Soup, 9_000.0).with_overall_score(2.9),
/// ];
/// let selection = PreferenceSelection::new(
///     ProductType::Fried,
///     TasteCategory::Sweet,
///     ComplexityCategory::Complex,
/// );
/// assert_eq!(match_by_categories(&reviews, &selection).map(|r| r.id), Some(1));
/// ```
#[must_use]
pub fn match_by_categories<'a>(
    reviews: &'a [ReviewRecord],
    selection: &PreferenceSelection,
) -> Option<&'a ReviewRecord> {
    if let Some(review) = highest_scored(reviews.iter().filter(|review| selection.admits(review))) {
        return Some(review);
    }

    debug!(
        "no {} review is {} and {}; relaxing to product type",
        selection.product_type,
        selection.taste_category,
        selection.complexity_category,
    );
    highest_scored(
        reviews
            .iter()
            .filter(|review| review.product_type == selection.product_type),
    )
}

/// First review carrying the highest stored score.
fn highest_scored<'a>(
    candidates: impl Iterator<Item = &'a ReviewRecord>,
) -> Option<&'a ReviewRecord> {
    candidates.fold(None, |best, review| match best {
        Some(current) if current.stored_score() >= review.stored_score() => Some(current),
        _ => Some(review),
    })
}

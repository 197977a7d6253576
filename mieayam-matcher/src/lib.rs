//! Selection and ranking over review collections.
//!
//! Three stateless operations sit on top of [`mieayam_core::ReviewRecord`]:
//! - [`match_by_categories`] turns a coarse visitor selection (product type,
//!   taste, complexity) into a single recommendation, relaxing to the
//!   product type alone when nothing fits.
//! - [`filter_by_ranges`] applies the browse filters in [`Filters`] and sorts
//!   the survivors.
//! - [`related_reviews`] ranks other reviews by their [`score_relevance`] to
//!   an anchor review.
//!
//! None of them fail: an empty result is a valid answer.
//!
//! # Examples
//!
//! ```
//! use mieayam_core::{ComplexityCategory, ProductType, ReviewRecord, TasteCategory};
//! use mieayam_matcher::{PreferenceSelection, match_by_categories};
//!
//! let reviews = vec![
//!     ReviewRecord::new(1, ProductType::Soup, 10_000.0)
//!         .with_flavor(-3.0, 4.0)
//!         .with_overall_score(1.9),
//! ];
//! let selection = PreferenceSelection::new(
//!     ProductType::Soup,
//!     TasteCategory::Sweet,
//!     ComplexityCategory::Simple,
//! );
//! let pick = match_by_categories(&reviews, &selection).map(|review| review.id);
//! assert_eq!(pick, Some(1));
//! ```

#![forbid(unsafe_code)]

mod filter;
mod preference;
mod related;

pub use filter::{
    DISABLED_FLAVOR_VALUE, FLAVOR_VALUE_TOLERANCE, Filters, SortKey, TypeFilter, filter_by_ranges,
};
pub use preference::{PreferenceSelection, match_by_categories};
pub use related::{DEFAULT_RELATED_LIMIT, RelatedReview, related_reviews, score_relevance};

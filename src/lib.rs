//! Facade crate for the mie ayam review engine.
//!
//! This crate re-exports the review domain types, the value scorer and the
//! preference matcher so callers depend on a single crate.
//!
//! ```
//! use mieayam_engine::{ProductType, ReviewRecord, compute_score};
//!
//! let review = ReviewRecord::new(1, ProductType::Fried, 12_000.0);
//! let result = compute_score(&review).expect("priced review scores");
//! assert!(result.final_score >= 0.0);
//! ```

#![forbid(unsafe_code)]

pub use mieayam_core::{
    ComplexityCategory, Dimension, FlavorPoint, ParseError, PriceTier, ProductType, Ratings,
    RegionalStyle, ReviewRecord, Scorer, ScoringError, ScoringResult, TasteCategory, Topping,
    Toppings,
};

pub use mieayam_scorer::{
    BatchScoringError, ScoringWeights, ValueScorer, WeightsError, compute_score, legacy_score,
    score_reviews,
};

pub use mieayam_matcher::{
    DEFAULT_RELATED_LIMIT, Filters, PreferenceSelection, RelatedReview, SortKey, TypeFilter,
    filter_by_ranges, match_by_categories, related_reviews,
};

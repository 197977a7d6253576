//! Core domain types for the chicken-noodle review engine.
//!
//! A [`ReviewRecord`] is the immutable snapshot an admin submits for one
//! stall. Its [`ProductType`] selects which rating [`Dimension`]s are active;
//! the scoring crate turns the record into a [`ScoringResult`] through the
//! [`Scorer`] trait, and the matcher crate ranks collections of records
//! against visitor preferences expressed in the flavour plane.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod dimension;
pub mod error;
pub mod flavor;
pub mod price;
pub mod ratings;
pub mod review;
pub mod scorer;
pub mod topping;
pub mod wire;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use dimension::{
    BROTH_DIMENSIONS, Dimension, FACILITY_DIMENSIONS, FRIED_FLAVOR_DIMENSIONS,
    SOUP_FLAVOR_DIMENSIONS,
};
pub use error::{ParseError, ScoringError};
pub use flavor::{ComplexityCategory, FlavorPoint, REGIONAL_MATCH_RADIUS, RegionalStyle, TasteCategory};
pub use price::PriceTier;
pub use ratings::{MAX_RATING, Ratings};
pub use review::{ProductType, ReviewRecord};
pub use scorer::{Completeness, MAX_SCORE, Scorer, ScoringResult};
pub use topping::{Topping, Toppings};

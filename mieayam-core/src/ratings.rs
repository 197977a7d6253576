//! Per-dimension ratings attached to a review.
//!
//! Every dimension is optional. Reads go through [`Ratings::get`], which
//! discards non-finite values and clamps the rest into `0.0..=10.0`, so
//! downstream averaging never sees data-entry mistakes.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::Dimension;

/// Upper bound of every rating dimension.
pub const MAX_RATING: f64 = 10.0;

/// Ratings keyed by [`Dimension`], each in `0.0..=10.0` when present.
///
/// # Examples
/// ```
/// use mieayam_core::{Dimension, Ratings};
///
/// let ratings = Ratings::default()
///     .with(Dimension::NoodleTexture, 8.0)
///     .with(Dimension::Cleanliness, 9.0);
/// assert_eq!(ratings.get(Dimension::NoodleTexture), Some(8.0));
/// assert!(ratings.get(Dimension::BrothAroma).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ratings {
    #[serde(skip_serializing_if = "Option::is_none")]
    noodle_texture: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chicken_seasoning: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chicken_cut: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    broth_thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    broth_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    broth_depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    broth_aroma: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    broth_clarity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    oil_balance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stir_fry_seasoning: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stir_fry_aroma: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cleanliness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    utensils: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ambiance: Option<f64>,
}

impl Ratings {
    /// Return the sanitised rating for `dimension`, if present.
    ///
    /// Non-finite values read as absent; finite values are clamped into
    /// `0.0..=10.0`.
    #[must_use]
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        let raw = *self.slot(dimension);
        raw.and_then(|value| sanitise_rating(dimension, value))
    }

    /// Insert or replace the rating for `dimension`.
    pub fn set(&mut self, dimension: Dimension, value: f64) {
        *self.slot_mut(dimension) = Some(value);
    }

    /// Remove the rating for `dimension`.
    pub fn clear(&mut self, dimension: Dimension) {
        *self.slot_mut(dimension) = None;
    }

    /// Set a rating while returning `self` for chaining.
    #[must_use]
    pub fn with(mut self, dimension: Dimension, value: f64) -> Self {
        self.set(dimension, value);
        self
    }

    /// Average the ratings of `dimensions`, counting absent ones as zero.
    ///
    /// The divisor is always the size of the set, so a partially rated
    /// review averages lower than its rated dimensions alone.
    ///
    /// # Examples
    /// ```
    /// use mieayam_core::{Dimension, Ratings, FACILITY_DIMENSIONS};
    ///
    /// let ratings = Ratings::default().with(Dimension::Cleanliness, 9.0);
    /// assert_eq!(ratings.mean_of(&FACILITY_DIMENSIONS), 3.0);
    /// ```
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "averaging ratings divides a float sum by a small set size"
    )]
    #[must_use]
    pub fn mean_of(&self, dimensions: &[Dimension]) -> f64 {
        if dimensions.is_empty() {
            return 0.0;
        }
        let sum: f64 = dimensions
            .iter()
            .map(|&dimension| self.get(dimension).unwrap_or(0.0))
            .sum();
        sum / dimensions.len() as f64
    }

    /// Return the dimensions of `dimensions` that carry no usable rating.
    #[must_use]
    pub fn missing_from(&self, dimensions: &[Dimension]) -> Vec<Dimension> {
        dimensions
            .iter()
            .copied()
            .filter(|&dimension| self.get(dimension).is_none())
            .collect()
    }

    const fn slot(&self, dimension: Dimension) -> &Option<f64> {
        match dimension {
            Dimension::NoodleTexture => &self.noodle_texture,
            Dimension::ChickenSeasoning => &self.chicken_seasoning,
            Dimension::ChickenCut => &self.chicken_cut,
            Dimension::BrothThickness => &self.broth_thickness,
            Dimension::BrothBalance => &self.broth_balance,
            Dimension::BrothDepth => &self.broth_depth,
            Dimension::BrothAroma => &self.broth_aroma,
            Dimension::BrothClarity => &self.broth_clarity,
            Dimension::OilBalance => &self.oil_balance,
            Dimension::StirFrySeasoning => &self.stir_fry_seasoning,
            Dimension::StirFryAroma => &self.stir_fry_aroma,
            Dimension::Cleanliness => &self.cleanliness,
            Dimension::Utensils => &self.utensils,
            Dimension::Ambiance => &self.ambiance,
        }
    }

    const fn slot_mut(&mut self, dimension: Dimension) -> &mut Option<f64> {
        match dimension {
            Dimension::NoodleTexture => &mut self.noodle_texture,
            Dimension::ChickenSeasoning => &mut self.chicken_seasoning,
            Dimension::ChickenCut => &mut self.chicken_cut,
            Dimension::BrothThickness => &mut self.broth_thickness,
            Dimension::BrothBalance => &mut self.broth_balance,
            Dimension::BrothDepth => &mut self.broth_depth,
            Dimension::BrothAroma => &mut self.broth_aroma,
            Dimension::BrothClarity => &mut self.broth_clarity,
            Dimension::OilBalance => &mut self.oil_balance,
            Dimension::StirFrySeasoning => &mut self.stir_fry_seasoning,
            Dimension::StirFryAroma => &mut self.stir_fry_aroma,
            Dimension::Cleanliness => &mut self.cleanliness,
            Dimension::Utensils => &mut self.utensils,
            Dimension::Ambiance => &mut self.ambiance,
        }
    }
}

fn sanitise_rating(dimension: Dimension, value: f64) -> Option<f64> {
    if !value.is_finite() {
        warn!("ignoring non-finite {dimension} rating");
        return None;
    }
    if !(0.0..=MAX_RATING).contains(&value) {
        warn!("clamping {dimension} rating {value} into 0..={MAX_RATING}");
    }
    Some(value.clamp(0.0, MAX_RATING))
}

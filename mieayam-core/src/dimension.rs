//! Rating dimensions and the fixed sets each score averages over.
//!
//! The enum offers compile-time safety for rating lookups.
//!
//! # Examples
//! ```
//! use mieayam_core::Dimension;
//!
//! assert_eq!(Dimension::BrothAroma.as_str(), "brothAroma");
//! assert_eq!(Dimension::Cleanliness.to_string(), "cleanliness");
//! ```

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// A single 0–10 rating axis captured by a reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    /// Springiness and bite of the noodles.
    NoodleTexture,
    /// Seasoning of the braised chicken topping.
    ChickenSeasoning,
    /// Quality and size of the chicken pieces.
    ChickenCut,
    /// Body of the broth.
    BrothThickness,
    /// Salt, sweet and fat balance of the broth.
    BrothBalance,
    /// Depth and umami of the broth.
    BrothDepth,
    /// Aroma of the broth.
    BrothAroma,
    /// Clarity of the broth.
    BrothClarity,
    /// Oil balance of a fried serving.
    OilBalance,
    /// Seasoning of the stir-fry.
    StirFrySeasoning,
    /// Wok aroma of the stir-fry.
    StirFryAroma,
    /// Cleanliness of the stall.
    Cleanliness,
    /// Condition of bowls, cutlery and condiments.
    Utensils,
    /// Seating comfort and atmosphere.
    Ambiance,
}

/// Flavour dimensions averaged for soup servings.
pub const SOUP_FLAVOR_DIMENSIONS: [Dimension; 8] = [
    Dimension::NoodleTexture,
    Dimension::ChickenSeasoning,
    Dimension::ChickenCut,
    Dimension::BrothThickness,
    Dimension::BrothBalance,
    Dimension::BrothDepth,
    Dimension::BrothAroma,
    Dimension::BrothClarity,
];

/// Flavour dimensions averaged for fried servings.
pub const FRIED_FLAVOR_DIMENSIONS: [Dimension; 6] = [
    Dimension::NoodleTexture,
    Dimension::ChickenSeasoning,
    Dimension::ChickenCut,
    Dimension::OilBalance,
    Dimension::StirFrySeasoning,
    Dimension::StirFryAroma,
];

/// Dimensions averaged into the facility score.
pub const FACILITY_DIMENSIONS: [Dimension; 3] = [
    Dimension::Cleanliness,
    Dimension::Utensils,
    Dimension::Ambiance,
];

/// Broth dimensions, used by the legacy soup sub-average.
pub const BROTH_DIMENSIONS: [Dimension; 5] = [
    Dimension::BrothThickness,
    Dimension::BrothBalance,
    Dimension::BrothDepth,
    Dimension::BrothAroma,
    Dimension::BrothClarity,
];

const ALL: [Dimension; 14] = [
    Dimension::NoodleTexture,
    Dimension::ChickenSeasoning,
    Dimension::ChickenCut,
    Dimension::BrothThickness,
    Dimension::BrothBalance,
    Dimension::BrothDepth,
    Dimension::BrothAroma,
    Dimension::BrothClarity,
    Dimension::OilBalance,
    Dimension::StirFrySeasoning,
    Dimension::StirFryAroma,
    Dimension::Cleanliness,
    Dimension::Utensils,
    Dimension::Ambiance,
];

impl Dimension {
    /// Every dimension in declaration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &ALL
    }

    /// Return the wire name of the dimension.
    ///
    /// # Examples
    /// ```
    /// use mieayam_core::Dimension;
    ///
    /// assert_eq!(Dimension::StirFryAroma.as_str(), "stirFryAroma");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoodleTexture => "noodleTexture",
            Self::ChickenSeasoning => "chickenSeasoning",
            Self::ChickenCut => "chickenCut",
            Self::BrothThickness => "brothThickness",
            Self::BrothBalance => "brothBalance",
            Self::BrothDepth => "brothDepth",
            Self::BrothAroma => "brothAroma",
            Self::BrothClarity => "brothClarity",
            Self::OilBalance => "oilBalance",
            Self::StirFrySeasoning => "stirFrySeasoning",
            Self::StirFryAroma => "stirFryAroma",
            Self::Cleanliness => "cleanliness",
            Self::Utensils => "utensils",
            Self::Ambiance => "ambiance",
        }
    }

    /// Report whether the dimension is part of the facility set.
    #[must_use]
    pub const fn is_facility(self) -> bool {
        matches!(self, Self::Cleanliness | Self::Utensils | Self::Ambiance)
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Dimension {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.iter()
            .copied()
            .find(|dimension| dimension.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::new("dimension", s))
    }
}

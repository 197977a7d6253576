//! The flavour plane: complexity on one axis, sweetness on the other.
//!
//! Both axes run from `-5.0` to `+5.0`. Coarse visitor selections
//! ([`TasteCategory`], [`ComplexityCategory`]) map to inclusive bands on an
//! axis, and each [`RegionalStyle`] names a reference point in the plane.
//! Neither value influences a review's score.

use std::ops::RangeInclusive;

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Half-width of the neutral band around zero on either axis.
const BAND_EDGE: f64 = 2.0;
/// Extent of each axis.
const AXIS_LIMIT: f64 = 5.0;

/// Maximum Euclidean distance for a review to belong to a regional style.
pub const REGIONAL_MATCH_RADIUS: f64 = 2.5;

/// A position in the flavour plane, `x = complexity`, `y = sweetness`.
///
/// # Examples
/// ```
/// use mieayam_core::FlavorPoint;
///
/// let point = FlavorPoint::new(3.0, 4.0);
/// assert_eq!(point.distance_to(FlavorPoint::ORIGIN), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlavorPoint(Coord<f64>);

impl FlavorPoint {
    /// The neutral centre of the plane.
    pub const ORIGIN: Self = Self(Coord { x: 0.0, y: 0.0 });

    /// Construct a point from complexity and sweetness.
    #[must_use]
    pub const fn new(complexity: f64, sweetness: f64) -> Self {
        Self(Coord {
            x: complexity,
            y: sweetness,
        })
    }

    /// Complexity coordinate.
    #[must_use]
    pub const fn complexity(self) -> f64 {
        self.0.x
    }

    /// Sweetness coordinate.
    #[must_use]
    pub const fn sweetness(self) -> f64 {
        self.0.y
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        let delta = self.0 - other.0;
        delta.x.hypot(delta.y)
    }
}

impl From<FlavorPoint> for Coord<f64> {
    fn from(point: FlavorPoint) -> Self {
        point.0
    }
}

/// Coarse taste selection offered to visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TasteCategory {
    /// Sweetness in `-5.0..=-2.0`.
    Salty,
    /// Sweetness in `-2.0..=2.0`.
    Savory,
    /// Sweetness in `2.0..=5.0`.
    Sweet,
}

impl TasteCategory {
    /// Inclusive sweetness band for the category.
    ///
    /// # Examples
    /// ```
    /// use mieayam_core::TasteCategory;
    ///
    /// assert!(TasteCategory::Sweet.range().contains(&3.5));
    /// assert!(!TasteCategory::Salty.range().contains(&0.0));
    /// ```
    #[must_use]
    pub const fn range(self) -> RangeInclusive<f64> {
        match self {
            Self::Salty => band(Band::Low),
            Self::Savory => band(Band::Middle),
            Self::Sweet => band(Band::High),
        }
    }

    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Salty => "salty",
            Self::Savory => "savory",
            Self::Sweet => "sweet",
        }
    }
}

/// Coarse complexity selection offered to visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityCategory {
    /// Complexity in `-5.0..=-2.0`.
    Simple,
    /// Complexity in `-2.0..=2.0`.
    Subtle,
    /// Complexity in `2.0..=5.0`.
    Complex,
}

impl ComplexityCategory {
    /// Inclusive complexity band for the category.
    #[must_use]
    pub const fn range(self) -> RangeInclusive<f64> {
        match self {
            Self::Simple => band(Band::Low),
            Self::Subtle => band(Band::Middle),
            Self::Complex => band(Band::High),
        }
    }

    /// Return the category as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Subtle => "subtle",
            Self::Complex => "complex",
        }
    }
}

enum Band {
    Low,
    Middle,
    High,
}

const fn band(band: Band) -> RangeInclusive<f64> {
    match band {
        Band::Low => RangeInclusive::new(-AXIS_LIMIT, -BAND_EDGE),
        Band::Middle => RangeInclusive::new(-BAND_EDGE, BAND_EDGE),
        Band::High => RangeInclusive::new(BAND_EDGE, AXIS_LIMIT),
    }
}

/// A named regional way of preparing the dish, anchored in the flavour plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionalStyle {
    /// Central Javanese, sweet soy-braised chicken and a plain broth.
    Wonogiri,
    /// Solo street style, mildly sweet.
    Solo,
    /// Balanced West Javanese style.
    Bandung,
    /// Capital-city style, savoury with more aromatics.
    Jakarta,
    /// Bangka island style, salty and layered.
    Bangka,
}

impl RegionalStyle {
    /// All styles.
    pub const ALL: [Self; 5] = [
        Self::Wonogiri,
        Self::Solo,
        Self::Bandung,
        Self::Jakarta,
        Self::Bangka,
    ];

    /// Reference point of the style in the flavour plane.
    #[must_use]
    pub const fn reference_point(self) -> FlavorPoint {
        match self {
            Self::Wonogiri => FlavorPoint::new(-2.0, 3.0),
            Self::Solo => FlavorPoint::new(-1.0, 1.5),
            Self::Bandung => FlavorPoint::ORIGIN,
            Self::Jakarta => FlavorPoint::new(1.5, -1.5),
            Self::Bangka => FlavorPoint::new(3.0, -3.0),
        }
    }

    /// Report whether `point` lies within [`REGIONAL_MATCH_RADIUS`] of the style.
    ///
    /// # Examples
    /// ```
    /// use mieayam_core::{FlavorPoint, RegionalStyle};
    ///
    /// assert!(RegionalStyle::Bandung.admits(FlavorPoint::new(1.5, 2.0)));
    /// assert!(!RegionalStyle::Bandung.admits(FlavorPoint::new(2.0, 2.0)));
    /// ```
    #[must_use]
    pub fn admits(self, point: FlavorPoint) -> bool {
        self.reference_point().distance_to(point) <= REGIONAL_MATCH_RADIUS
    }

    /// Return the style as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wonogiri => "wonogiri",
            Self::Solo => "solo",
            Self::Bandung => "bandung",
            Self::Jakarta => "jakarta",
            Self::Bangka => "bangka",
        }
    }
}

macro_rules! impl_text {
    ($ty:ty, $kind:literal, [$($variant:ident),+ $(,)?]) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                [$(Self::$variant),+]
                    .into_iter()
                    .find(|candidate| candidate.as_str().eq_ignore_ascii_case(s.trim()))
                    .ok_or_else(|| ParseError::new($kind, s))
            }
        }
    };
}

impl_text!(TasteCategory, "taste category", [Salty, Savory, Sweet]);
impl_text!(ComplexityCategory, "complexity category", [Simple, Subtle, Complex]);
impl_text!(
    RegionalStyle,
    "regional style",
    [Wonogiri, Solo, Bandung, Jakarta, Bangka]
);

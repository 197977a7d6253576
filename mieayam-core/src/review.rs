//! Review records: the immutable snapshot every computation reads.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::wire::null_as_default;
use crate::{
    Dimension, FACILITY_DIMENSIONS, FRIED_FLAVOR_DIMENSIONS, FlavorPoint, ParseError, Ratings,
    SOUP_FLAVOR_DIMENSIONS, Topping, Toppings,
};

/// How the noodles are served. Selects the active flavour dimensions.
///
/// # Examples
/// ```
/// use mieayam_core::{Dimension, ProductType};
///
/// assert_eq!(ProductType::Soup.flavor_dimensions().len(), 8);
/// assert!(ProductType::Fried.flavor_dimensions().contains(&Dimension::OilBalance));
/// assert!("steamed".parse::<ProductType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// Noodles served with broth.
    Soup,
    /// Dry, wok-fried noodles.
    Fried,
}

impl ProductType {
    /// Flavour dimensions averaged for this product type.
    #[must_use]
    pub const fn flavor_dimensions(self) -> &'static [Dimension] {
        match self {
            Self::Soup => &SOUP_FLAVOR_DIMENSIONS,
            Self::Fried => &FRIED_FLAVOR_DIMENSIONS,
        }
    }

    /// Return the product type as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Soup => "soup",
            Self::Fried => "fried",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProductType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "soup" => Ok(Self::Soup),
            "fried" => Ok(Self::Fried),
            _ => Err(ParseError::new("product type", s)),
        }
    }
}

/// A single stall review as supplied by the storage layer.
///
/// Fields follow the camelCase wire shape. Ratings and topping flags are
/// flattened into the record, so `{"noodleTexture": 8, "egg": true}` sit
/// next to `productType` and `price`.
///
/// # Examples
/// ```
/// use mieayam_core::{Dimension, ProductType, ReviewRecord, Topping};
///
/// let review = ReviewRecord::new(1, ProductType::Soup, 12_000.0)
///     .with_name("Mie Ayam Pak Kumis")
///     .with_rating(Dimension::NoodleTexture, 8.0)
///     .with_topping(Topping::Egg);
/// assert_eq!(review.ratings.get(Dimension::NoodleTexture), Some(8.0));
/// assert_eq!(review.toppings.count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    /// Storage identifier.
    pub id: u64,
    /// Stall name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Street address.
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    /// City the stall operates in.
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    /// Serving style; selects the active flavour dimensions.
    pub product_type: ProductType,
    /// Price of one portion.
    pub price: f64,
    /// Per-dimension ratings.
    #[serde(flatten)]
    pub ratings: Ratings,
    /// Minutes from ordering to serving.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_duration_minutes: Option<f64>,
    /// Topping availability flags.
    #[serde(flatten)]
    pub toppings: Toppings,
    /// Flavour complexity in `-5.0..=5.0`; metadata only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<f64>,
    /// Sweetness in `-5.0..=5.0`; metadata only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sweetness: Option<f64>,
    /// Stored 0–10 score written back after scoring.
    #[serde(default, alias = "overall_score", skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
    /// Editor's-choice flag.
    #[serde(default, deserialize_with = "null_as_default")]
    pub editors_choice: bool,
    /// Creation timestamp as ISO-8601 text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ReviewRecord {
    /// Construct a review with no ratings, toppings or metadata.
    #[must_use]
    pub fn new(id: u64, product_type: ProductType, price: f64) -> Self {
        Self {
            id,
            name: String::new(),
            address: String::new(),
            city: String::new(),
            product_type,
            price,
            ratings: Ratings::default(),
            service_duration_minutes: None,
            toppings: Toppings::default(),
            complexity: None,
            sweetness: None,
            overall_score: None,
            editors_choice: false,
            created_at: None,
        }
    }

    /// Set the stall name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the street address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Record a rating.
    #[must_use]
    pub fn with_rating(mut self, dimension: Dimension, value: f64) -> Self {
        self.ratings.set(dimension, value);
        self
    }

    /// Mark a topping as available.
    #[must_use]
    pub const fn with_topping(mut self, topping: Topping) -> Self {
        self.toppings.set(topping, true);
        self
    }

    /// Record the service duration in minutes.
    #[must_use]
    pub const fn with_service_duration(mut self, minutes: f64) -> Self {
        self.service_duration_minutes = Some(minutes);
        self
    }

    /// Record the flavour profile.
    #[must_use]
    pub const fn with_flavor(mut self, complexity: f64, sweetness: f64) -> Self {
        self.complexity = Some(complexity);
        self.sweetness = Some(sweetness);
        self
    }

    /// Record the stored 0–10 score.
    #[must_use]
    pub const fn with_overall_score(mut self, score: f64) -> Self {
        self.overall_score = Some(score);
        self
    }

    /// Flag the review as an editor's choice.
    #[must_use]
    pub const fn with_editors_choice(mut self) -> Self {
        self.editors_choice = true;
        self
    }

    /// Set the creation timestamp.
    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// Flavour dimensions active for this review's product type.
    #[must_use]
    pub const fn active_flavor_dimensions(&self) -> &'static [Dimension] {
        self.product_type.flavor_dimensions()
    }

    /// Every dimension that contributes to the score of this review.
    #[must_use]
    pub fn active_dimensions(&self) -> Vec<Dimension> {
        self.active_flavor_dimensions()
            .iter()
            .chain(FACILITY_DIMENSIONS.iter())
            .copied()
            .collect()
    }

    /// Service duration usable for scoring.
    ///
    /// Non-finite values read as absent and negative values as zero.
    #[must_use]
    pub fn service_duration(&self) -> Option<f64> {
        let minutes = self.service_duration_minutes?;
        if !minutes.is_finite() {
            warn!("review {} has a non-finite service duration", self.id);
            return None;
        }
        if minutes < 0.0 {
            warn!("review {} has a negative service duration", self.id);
            return Some(0.0);
        }
        Some(minutes)
    }

    /// Position in the flavour plane; missing coordinates read as zero.
    #[must_use]
    pub fn flavor_point(&self) -> FlavorPoint {
        FlavorPoint::new(
            self.complexity.unwrap_or(0.0),
            self.sweetness.unwrap_or(0.0),
        )
    }

    /// Stored score, reading a missing score as zero.
    #[must_use]
    pub fn stored_score(&self) -> f64 {
        self.overall_score.unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case("soup", ProductType::Soup)]
    #[case("Fried", ProductType::Fried)]
    fn product_type_parses(#[case] raw: &str, #[case] expected: ProductType) {
        assert_eq!(ProductType::from_str(raw).expect("known type"), expected);
    }

    #[rstest]
    fn product_type_rejects_unknown() {
        let err = ProductType::from_str("soto").expect_err("unknown type");
        assert_eq!(err.to_string(), "unknown product type 'soto'");
    }

    #[rstest]
    fn decoding_rejects_unknown_product_type() {
        let payload = r#"{"id":1,"productType":"steamed","price":10000}"#;
        assert!(serde_json::from_str::<ReviewRecord>(payload).is_err());
    }

    #[rstest]
    fn decodes_flattened_wire_shape() {
        let payload = r#"{
            "id": 7,
            "name": "Mie Ayam Tumini",
            "city": "Yogyakarta",
            "productType": "soup",
            "price": 15000,
            "noodleTexture": 9,
            "brothClarity": 7.5,
            "serviceDurationMinutes": 6,
            "egg": true,
            "meatball": true,
            "sweetness": 3,
            "overall_score": 2.1,
            "editorsChoice": true
        }"#;
        let review: ReviewRecord = serde_json::from_str(payload).expect("decode review");
        assert_eq!(review.id, 7);
        assert_eq!(review.product_type, ProductType::Soup);
        assert_eq!(review.ratings.get(Dimension::NoodleTexture), Some(9.0));
        assert_eq!(review.ratings.get(Dimension::BrothClarity), Some(7.5));
        assert_eq!(review.toppings.count(), 2);
        assert_eq!(review.service_duration(), Some(6.0));
        assert_eq!(review.overall_score, Some(2.1));
        assert!(review.editors_choice);
        assert!(review.complexity.is_none());
    }

    #[rstest]
    #[case::topping(r#""egg": null"#)]
    #[case::address(r#""address": null"#)]
    #[case::editors_choice(r#""editorsChoice": null"#)]
    #[case::every_nullable_column(
        r#""name": null, "city": null, "meatball": null, "noodleTexture": null, "sweetness": null"#
    )]
    fn decoding_reads_null_columns_as_defaults(#[case] nulls: &str) {
        let payload = format!(r#"{{"id": 1, "productType": "soup", "price": 10000, {nulls}}}"#);
        let review: ReviewRecord = serde_json::from_str(&payload).expect("nullable columns decode");
        assert_eq!(review, ReviewRecord::new(1, ProductType::Soup, 10_000.0));
    }

    #[rstest]
    fn encoding_round_trips_through_camel_case() {
        let review = ReviewRecord::new(3, ProductType::Fried, 9_000.0)
            .with_rating(Dimension::OilBalance, 6.0)
            .with_topping(Topping::Crackers);
        let json = serde_json::to_value(&review).expect("encode review");
        assert_eq!(json["productType"], "fried");
        assert_eq!(json["oilBalance"], 6.0);
        assert_eq!(json["crackers"], true);
        assert!(json.get("overallScore").is_none());
    }

    #[rstest]
    #[case(Some(-4.0), Some(0.0))]
    #[case(Some(f64::NAN), None)]
    #[case(Some(9.5), Some(9.5))]
    #[case(None, None)]
    fn service_duration_is_sanitised(#[case] raw: Option<f64>, #[case] expected: Option<f64>) {
        let mut review = ReviewRecord::new(1, ProductType::Soup, 10_000.0);
        review.service_duration_minutes = raw;
        assert_eq!(review.service_duration(), expected);
    }

    #[rstest]
    fn missing_flavor_reads_as_origin() {
        let review = ReviewRecord::new(1, ProductType::Soup, 10_000.0);
        assert_eq!(review.flavor_point(), FlavorPoint::ORIGIN);
        assert!(review.stored_score().abs() < f64::EPSILON);
    }

    #[rstest]
    fn active_dimensions_follow_product_type() {
        let soup = ReviewRecord::new(1, ProductType::Soup, 10_000.0);
        let fried = ReviewRecord::new(2, ProductType::Fried, 10_000.0);
        assert_eq!(soup.active_dimensions().len(), 11);
        assert_eq!(fried.active_dimensions().len(), 9);
        assert!(!fried.active_dimensions().contains(&Dimension::BrothAroma));
    }
}

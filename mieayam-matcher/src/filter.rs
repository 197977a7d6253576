//! Browse filters over a review collection.
//!
//! Every active filter must pass for a review to survive; sorting runs last
//! and is stable. A missing timestamp sorts as the empty string and a
//! missing score as zero.
#![forbid(unsafe_code)]

use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use log::debug;
use mieayam_core::wire::null_as_default;
use mieayam_core::{ParseError, ProductType, RegionalStyle, ReviewRecord};
use serde::{Deserialize, Deserializer, Serialize};

/// Flavour filter value that disables the filter.
pub const DISABLED_FLAVOR_VALUE: f64 = 99.0;

/// Maximum distance between a review's flavour value and the filter value.
pub const FLAVOR_VALUE_TOLERANCE: f64 = 1.0;

/// Text that disables the city, product type and regional style filters.
const ALL: &str = "all";

/// Product-type filter; [`TypeFilter::All`] admits every review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    /// Soup and fried reviews alike.
    #[default]
    All,
    /// Soup reviews only.
    Soup,
    /// Fried reviews only.
    Fried,
}

impl TypeFilter {
    /// Report whether `product_type` passes the filter.
    #[must_use]
    pub const fn admits(self, product_type: ProductType) -> bool {
        matches!(
            (self, product_type),
            (Self::All, _) | (Self::Soup, ProductType::Soup) | (Self::Fried, ProductType::Fried)
        )
    }

    /// Return the filter as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => ALL,
            Self::Soup => "soup",
            Self::Fried => "fried",
        }
    }
}

impl From<ProductType> for TypeFilter {
    fn from(product_type: ProductType) -> Self {
        match product_type {
            ProductType::Soup => Self::Soup,
            ProductType::Fried => Self::Fried,
        }
    }
}

impl Display for TypeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }
        ProductType::from_str(s).map(Self::from)
    }
}

/// Ordering applied to filtered reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Most recently created first.
    #[default]
    Newest,
    /// Least recently created first.
    Oldest,
    /// Highest stored score first.
    ScoreDesc,
    /// Lowest stored score first.
    ScoreAsc,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
}

impl SortKey {
    /// All sort keys.
    pub const ALL: [Self; 6] = [
        Self::Newest,
        Self::Oldest,
        Self::ScoreDesc,
        Self::ScoreAsc,
        Self::PriceAsc,
        Self::PriceDesc,
    ];

    /// Return the key as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::ScoreDesc => "score-desc",
            Self::ScoreAsc => "score-asc",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }

    /// Compare two reviews under this key.
    #[must_use]
    pub fn compare(self, a: &ReviewRecord, b: &ReviewRecord) -> Ordering {
        match self {
            Self::Newest => created_at(b).cmp(created_at(a)),
            Self::Oldest => created_at(a).cmp(created_at(b)),
            Self::ScoreDesc => b.stored_score().total_cmp(&a.stored_score()),
            Self::ScoreAsc => a.stored_score().total_cmp(&b.stored_score()),
            Self::PriceAsc => a.price.total_cmp(&b.price),
            Self::PriceDesc => b.price.total_cmp(&a.price),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::new("sort key", s))
    }
}

fn created_at(review: &ReviewRecord) -> &str {
    review.created_at.as_deref().unwrap_or_default()
}

/// Browse filters, decoded from the camelCase descriptor the browse page sends.
///
/// `"all"` disables the city, product type and regional style filters, and a
/// flavour value of [`DISABLED_FLAVOR_VALUE`] disables that axis. An empty
/// search text disables the search.
///
/// # Examples
/// ```
/// use mieayam_matcher::{Filters, SortKey, TypeFilter};
///
/// let filters: Filters = serde_json::from_str(
///     r#"{"city": "all", "productType": "soup", "complexityValue": 99, "sortKey": "price-asc"}"#,
/// )?;
/// assert_eq!(filters.city, None);
/// assert_eq!(filters.product_type, TypeFilter::Soup);
/// assert_eq!(filters.complexity_value, None);
/// assert_eq!(filters.sort_key, SortKey::PriceAsc);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Filters {
    /// Case-insensitive text matched against name, address and city.
    #[serde(deserialize_with = "null_as_default")]
    pub search_text: String,
    /// Exact city, or `None` for every city.
    #[serde(deserialize_with = "all_as_none", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Product-type restriction.
    #[serde(deserialize_with = "null_as_default")]
    pub product_type: TypeFilter,
    /// Regional style the review must sit near.
    #[serde(deserialize_with = "all_as_none", skip_serializing_if = "Option::is_none")]
    pub regional_style: Option<RegionalStyle>,
    /// Target complexity, matched within [`FLAVOR_VALUE_TOLERANCE`].
    #[serde(deserialize_with = "sentinel_as_none", skip_serializing_if = "Option::is_none")]
    pub complexity_value: Option<f64>,
    /// Target sweetness, matched within [`FLAVOR_VALUE_TOLERANCE`].
    #[serde(deserialize_with = "sentinel_as_none", skip_serializing_if = "Option::is_none")]
    pub sweetness_value: Option<f64>,
    /// Ordering of the survivors.
    #[serde(deserialize_with = "null_as_default")]
    pub sort_key: SortKey,
}

impl Filters {
    /// Filters that admit every review, newest first.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Search name, address and city for `text`.
    #[must_use]
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Restrict to one city; `"all"` lifts the restriction.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        let name = city.into();
        self.city = (!name.trim().eq_ignore_ascii_case(ALL)).then_some(name);
        self
    }

    /// Restrict the product type.
    #[must_use]
    pub const fn with_product_type(mut self, product_type: TypeFilter) -> Self {
        self.product_type = product_type;
        self
    }

    /// Restrict to reviews near a regional style.
    #[must_use]
    pub const fn with_regional_style(mut self, style: RegionalStyle) -> Self {
        self.regional_style = Some(style);
        self
    }

    /// Target a complexity value; [`DISABLED_FLAVOR_VALUE`] lifts the target.
    #[must_use]
    pub fn with_complexity(mut self, value: f64) -> Self {
        self.complexity_value = enabled(value);
        self
    }

    /// Target a sweetness value; [`DISABLED_FLAVOR_VALUE`] lifts the target.
    #[must_use]
    pub fn with_sweetness(mut self, value: f64) -> Self {
        self.sweetness_value = enabled(value);
        self
    }

    /// Choose the ordering.
    #[must_use]
    pub const fn with_sort_key(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// Report whether `review` passes every active filter.
    #[must_use]
    pub fn admits(&self, review: &ReviewRecord) -> bool {
        let point = review.flavor_point();
        self.product_type.admits(review.product_type)
            && self.matches_city(review)
            && self.matches_search(review)
            && self
                .regional_style
                .is_none_or(|style| style.admits(point))
            && within_tolerance(point.complexity(), self.complexity_value)
            && within_tolerance(point.sweetness(), self.sweetness_value)
    }

    fn matches_city(&self, review: &ReviewRecord) -> bool {
        self.city.as_deref().is_none_or(|city| review.city == city)
    }

    fn matches_search(&self, review: &ReviewRecord) -> bool {
        let needle = self.search_text.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&review.name, &review.address, &review.city]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Apply `filters` to `reviews` and sort the survivors.
///
/// # Examples
/// ```
/// use mieayam_core::{ProductType, ReviewRecord};
/// use mieayam_matcher::{Filters, SortKey, filter_by_ranges};
///
/// let reviews = vec![
///     ReviewRecord::new(1, ProductType::Soup, 15_000.0).with_city("Jakarta"),
///     ReviewRecord::new(2, ProductType::Soup, 9_000.0).with_city("Jakarta"),
///     ReviewRecord::new(3, ProductType::Soup, 8_000.0).with_city("Bandung"),
/// ];
/// let filters = Filters::new()
///     .with_city("Jakarta")
///     .with_sort_key(SortKey::PriceAsc);
/// let ids: Vec<u64> = filter_by_ranges(&reviews, &filters)
///     .iter()
///     .map(|review| review.id)
///     .collect();
/// assert_eq!(ids, vec![2, 1]);
/// ```
#[must_use]
pub fn filter_by_ranges<'a>(reviews: &'a [ReviewRecord], filters: &Filters) -> Vec<&'a ReviewRecord> {
    let mut survivors: Vec<&ReviewRecord> = reviews
        .iter()
        .filter(|review| filters.admits(review))
        .collect();
    survivors.sort_by(|a, b| filters.sort_key.compare(a, b));
    debug!(
        "{} of {} reviews passed the browse filters",
        survivors.len(),
        reviews.len()
    );
    survivors
}

#[expect(
    clippy::float_arithmetic,
    reason = "flavour filters compare the distance between two axis values"
)]
fn within_tolerance(value: f64, target: Option<f64>) -> bool {
    target.is_none_or(|target| (value - target).abs() <= FLAVOR_VALUE_TOLERANCE)
}

fn enabled(value: f64) -> Option<f64> {
    (value.is_finite() && value < DISABLED_FLAVOR_VALUE).then_some(value)
}

fn sentinel_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.and_then(enabled))
}

fn all_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) if text.eq_ignore_ascii_case(ALL) => Ok(None),
        Some(text) => text.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

//! Browse command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use mieayam_core::RegionalStyle;
use mieayam_matcher::{Filters, SortKey, TypeFilter, filter_by_ranges};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_reviews, require_existing, write_json};
use crate::{
    ARG_CITY, ARG_COMPLEXITY, ARG_PRODUCT_TYPE, ARG_REGIONAL_STYLE, ARG_REVIEWS, ARG_SEARCH,
    ARG_SORT, ARG_SWEETNESS, CliError, ENV_BROWSE_REVIEWS,
};

/// CLI arguments for the `browse` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "browse",
    long_about = "Filter reviews by text, city, serving style, regional \
                 style and flavour values, then sort them. Omitted filters \
                 admit every review; `all` and a flavour value of 99 also \
                 disable a filter.",
    about = "Filter and sort reviews"
)]
#[ortho_config(prefix = "MIEAYAM")]
pub(crate) struct BrowseArgs {
    /// Path to a JSON array of review records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) reviews: Option<Utf8PathBuf>,
    /// Text matched against name, address and city.
    #[arg(long = ARG_SEARCH, value_name = "text")]
    #[serde(default)]
    pub(crate) search: Option<String>,
    /// Exact city, or `all`.
    #[arg(long = ARG_CITY, value_name = "city")]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// Serving style: all, soup or fried.
    #[arg(long = ARG_PRODUCT_TYPE, value_name = "type")]
    #[serde(default)]
    pub(crate) product_type: Option<TypeFilter>,
    /// Regional style the reviews must sit near.
    #[arg(long = ARG_REGIONAL_STYLE, value_name = "style")]
    #[serde(default)]
    pub(crate) regional_style: Option<RegionalStyle>,
    /// Target complexity, matched within one point.
    #[arg(long = ARG_COMPLEXITY, value_name = "value", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) complexity: Option<f64>,
    /// Target sweetness, matched within one point.
    #[arg(long = ARG_SWEETNESS, value_name = "value", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) sweetness: Option<f64>,
    /// Ordering: newest, oldest, score-desc, score-asc, price-asc or price-desc.
    #[arg(long = ARG_SORT, value_name = "key")]
    #[serde(default)]
    pub(crate) sort: Option<SortKey>,
}

impl BrowseArgs {
    pub(crate) fn into_config(self) -> Result<BrowseConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        BrowseConfig::try_from(merged)
    }
}

/// Resolved `browse` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BrowseConfig {
    pub(crate) reviews: Utf8PathBuf,
    pub(crate) filters: Filters,
}

impl TryFrom<BrowseArgs> for BrowseConfig {
    type Error = CliError;

    fn try_from(args: BrowseArgs) -> Result<Self, Self::Error> {
        let reviews = args.reviews.ok_or(CliError::MissingArgument {
            field: ARG_REVIEWS,
            env: ENV_BROWSE_REVIEWS,
        })?;

        let mut filters = Filters::new()
            .with_search_text(args.search.unwrap_or_default())
            .with_product_type(args.product_type.unwrap_or_default())
            .with_sort_key(args.sort.unwrap_or_default());
        if let Some(city) = args.city {
            filters = filters.with_city(city);
        }
        if let Some(style) = args.regional_style {
            filters = filters.with_regional_style(style);
        }
        if let Some(value) = args.complexity {
            filters = filters.with_complexity(value);
        }
        if let Some(value) = args.sweetness {
            filters = filters.with_sweetness(value);
        }
        Ok(Self { reviews, filters })
    }
}

pub(crate) fn run_browse_with(args: BrowseArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.reviews, ARG_REVIEWS)?;
    let reviews = load_reviews(&config.reviews)?;
    write_json(writer, &filter_by_ranges(&reviews, &config.filters))
}

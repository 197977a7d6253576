//! Recommend command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use mieayam_core::{ComplexityCategory, ProductType, TasteCategory};
use mieayam_matcher::{PreferenceSelection, match_by_categories};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_reviews, require_existing, write_json};
use crate::{
    ARG_COMPLEXITY, ARG_PRODUCT_TYPE, ARG_REVIEWS, ARG_TASTE, CliError, ENV_RECOMMEND_COMPLEXITY,
    ENV_RECOMMEND_PRODUCT_TYPE, ENV_RECOMMEND_REVIEWS, ENV_RECOMMEND_TASTE,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "recommend",
    long_about = "Pick the highest-scored review matching a serving style, \
                 taste band and complexity band. When nothing fits the bands \
                 the best review of the serving style is offered instead; \
                 `null` is printed when there is none.",
    about = "Recommend a review for a preference"
)]
#[ortho_config(prefix = "MIEAYAM")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON array of review records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) reviews: Option<Utf8PathBuf>,
    /// Serving style: soup or fried.
    #[arg(long = ARG_PRODUCT_TYPE, value_name = "type")]
    #[serde(default)]
    pub(crate) product_type: Option<ProductType>,
    /// Taste band: salty, savory or sweet.
    #[arg(long = ARG_TASTE, value_name = "taste")]
    #[serde(default)]
    pub(crate) taste: Option<TasteCategory>,
    /// Complexity band: simple, subtle or complex.
    #[arg(long = ARG_COMPLEXITY, value_name = "complexity")]
    #[serde(default)]
    pub(crate) complexity: Option<ComplexityCategory>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) reviews: Utf8PathBuf,
    pub(crate) selection: PreferenceSelection,
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let reviews = args.reviews.ok_or(CliError::MissingArgument {
            field: ARG_REVIEWS,
            env: ENV_RECOMMEND_REVIEWS,
        })?;
        let product_type = args.product_type.ok_or(CliError::MissingArgument {
            field: ARG_PRODUCT_TYPE,
            env: ENV_RECOMMEND_PRODUCT_TYPE,
        })?;
        let taste = args.taste.ok_or(CliError::MissingArgument {
            field: ARG_TASTE,
            env: ENV_RECOMMEND_TASTE,
        })?;
        let complexity = args.complexity.ok_or(CliError::MissingArgument {
            field: ARG_COMPLEXITY,
            env: ENV_RECOMMEND_COMPLEXITY,
        })?;
        Ok(Self {
            reviews,
            selection: PreferenceSelection::new(product_type, taste, complexity),
        })
    }
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.reviews, ARG_REVIEWS)?;
    let reviews = load_reviews(&config.reviews)?;
    let pick = match_by_categories(&reviews, &config.selection);
    if pick.is_none() {
        info!("no {} review to recommend", config.selection.product_type);
    }
    write_json(writer, &pick)
}

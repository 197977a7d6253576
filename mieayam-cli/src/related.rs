//! Related command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use mieayam_matcher::{DEFAULT_RELATED_LIMIT, related_reviews};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_reviews, require_existing, write_json};
use crate::{
    ARG_ANCHOR, ARG_LIMIT, ARG_REVIEWS, CliError, ENV_RELATED_ANCHOR, ENV_RELATED_REVIEWS,
};

/// CLI arguments for the `related` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "related",
    long_about = "Rank the other reviews in a file by their relevance to \
                 an anchor review: shared serving style, city, a similar \
                 price or score, and editor's-choice picks all add points.",
    about = "List reviews related to a review"
)]
#[ortho_config(prefix = "MIEAYAM")]
pub(crate) struct RelatedArgs {
    /// Path to a JSON array of review records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) reviews: Option<Utf8PathBuf>,
    /// Id of the review to find relatives for.
    #[arg(long = ARG_ANCHOR, value_name = "id")]
    #[serde(default)]
    pub(crate) anchor: Option<u64>,
    /// Maximum number of related reviews.
    #[arg(long = ARG_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl RelatedArgs {
    pub(crate) fn into_config(self) -> Result<RelatedConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RelatedConfig::try_from(merged)
    }
}

/// Resolved `related` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RelatedConfig {
    pub(crate) reviews: Utf8PathBuf,
    pub(crate) anchor: u64,
    pub(crate) limit: usize,
}

impl TryFrom<RelatedArgs> for RelatedConfig {
    type Error = CliError;

    fn try_from(args: RelatedArgs) -> Result<Self, Self::Error> {
        let reviews = args.reviews.ok_or(CliError::MissingArgument {
            field: ARG_REVIEWS,
            env: ENV_RELATED_REVIEWS,
        })?;
        let anchor = args.anchor.ok_or(CliError::MissingArgument {
            field: ARG_ANCHOR,
            env: ENV_RELATED_ANCHOR,
        })?;
        Ok(Self {
            reviews,
            anchor,
            limit: args.limit.unwrap_or(DEFAULT_RELATED_LIMIT),
        })
    }
}

pub(crate) fn run_related_with(args: RelatedArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.reviews, ARG_REVIEWS)?;
    let reviews = load_reviews(&config.reviews)?;
    let anchor = reviews
        .iter()
        .find(|review| review.id == config.anchor)
        .ok_or_else(|| CliError::UnknownAnchor {
            id: config.anchor,
            path: config.reviews.clone(),
        })?;
    write_json(writer, &related_reviews(anchor, &reviews, config.limit))
}

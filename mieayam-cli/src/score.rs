//! Score command implementation.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use mieayam_core::{ReviewRecord, ScoringResult};
use mieayam_scorer::{BatchScoringError, ScoringWeights, ValueScorer, legacy_score, score_reviews};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_reviews, require_existing, write_json};
use crate::{ARG_LEGACY, ARG_REFERENCE_PRICE, ARG_REVIEWS, CliError, ENV_SCORE_REVIEWS};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score every review in a JSON file with the value-adjusted \
                 formula and print the full breakdown per review. The legacy \
                 price-normalised score can be included for comparison.",
    about = "Score reviews"
)]
#[ortho_config(prefix = "MIEAYAM")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON array of review records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) reviews: Option<Utf8PathBuf>,
    /// Also print the legacy score.
    #[arg(long = ARG_LEGACY, num_args = 0..=1, default_missing_value = "true")]
    #[serde(default)]
    pub(crate) legacy: Option<bool>,
    /// Price at which the value factor is neutral.
    #[arg(long = ARG_REFERENCE_PRICE, value_name = "price")]
    #[serde(default)]
    pub(crate) reference_price: Option<f64>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    pub(crate) reviews: Utf8PathBuf,
    pub(crate) legacy: bool,
    pub(crate) weights: ScoringWeights,
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let reviews = args.reviews.ok_or(CliError::MissingArgument {
            field: ARG_REVIEWS,
            env: ENV_SCORE_REVIEWS,
        })?;
        let weights = args
            .reference_price
            .map_or_else(ScoringWeights::default, |price| {
                ScoringWeights::default().with_reference_price(price)
            });
        Ok(Self {
            reviews,
            legacy: args.legacy.unwrap_or(false),
            weights,
        })
    }
}

/// One line of `score` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScoreEntry {
    pub(crate) id: u64,
    pub(crate) result: ScoringResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) legacy_score: Option<f64>,
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    require_existing(&config.reviews, ARG_REVIEWS)?;
    let reviews = load_reviews(&config.reviews)?;
    let entries = score_entries(&config, &reviews)?;
    write_json(writer, &entries)
}

pub(crate) fn score_entries(
    config: &ScoreConfig,
    reviews: &[ReviewRecord],
) -> Result<Vec<ScoreEntry>, CliError> {
    let scorer = ValueScorer::new(config.weights)?;
    let results = score_reviews(&scorer, reviews)?;
    reviews
        .iter()
        .zip(results)
        .map(|(review, result)| -> Result<ScoreEntry, CliError> {
            let legacy = if config.legacy {
                let score = legacy_score(review).map_err(|source| BatchScoringError {
                    review_id: review.id,
                    source,
                })?;
                Some(score)
            } else {
                None
            };
            Ok(ScoreEntry {
                id: review.id,
                result,
                legacy_score: legacy,
            })
        })
        .collect()
}

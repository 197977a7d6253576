//! Command-line interface over the mie ayam review engine.
//!
//! Every subcommand reads a JSON array of review records and prints pretty
//! JSON to stdout. Options layer CLI flags over `MIEAYAM_CMDS_<SUBCOMMAND>_*`
//! environment variables over configuration files.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod browse;
mod error;
mod input;
mod recommend;
mod related;
mod score;

pub use error::CliError;

use browse::{BrowseArgs, run_browse_with};
use recommend::{RecommendArgs, run_recommend_with};
use related::{RelatedArgs, run_related_with};
use score::{ScoreArgs, run_score_with};

pub(crate) const ARG_REVIEWS: &str = "reviews";
pub(crate) const ARG_LEGACY: &str = "legacy";
pub(crate) const ARG_REFERENCE_PRICE: &str = "reference-price";
pub(crate) const ARG_PRODUCT_TYPE: &str = "product-type";
pub(crate) const ARG_TASTE: &str = "taste";
pub(crate) const ARG_COMPLEXITY: &str = "complexity";
pub(crate) const ARG_SWEETNESS: &str = "sweetness";
pub(crate) const ARG_SEARCH: &str = "search";
pub(crate) const ARG_CITY: &str = "city";
pub(crate) const ARG_REGIONAL_STYLE: &str = "regional-style";
pub(crate) const ARG_SORT: &str = "sort";
pub(crate) const ARG_ANCHOR: &str = "anchor";
pub(crate) const ARG_LIMIT: &str = "limit";

pub(crate) const ENV_SCORE_REVIEWS: &str = "MIEAYAM_CMDS_SCORE_REVIEWS";
pub(crate) const ENV_RECOMMEND_REVIEWS: &str = "MIEAYAM_CMDS_RECOMMEND_REVIEWS";
pub(crate) const ENV_RECOMMEND_PRODUCT_TYPE: &str = "MIEAYAM_CMDS_RECOMMEND_PRODUCT_TYPE";
pub(crate) const ENV_RECOMMEND_TASTE: &str = "MIEAYAM_CMDS_RECOMMEND_TASTE";
pub(crate) const ENV_RECOMMEND_COMPLEXITY: &str = "MIEAYAM_CMDS_RECOMMEND_COMPLEXITY";
pub(crate) const ENV_BROWSE_REVIEWS: &str = "MIEAYAM_CMDS_BROWSE_REVIEWS";
pub(crate) const ENV_RELATED_REVIEWS: &str = "MIEAYAM_CMDS_RELATED_REVIEWS";
pub(crate) const ENV_RELATED_ANCHOR: &str = "MIEAYAM_CMDS_RELATED_ANCHOR";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments fail to parse, configuration cannot
/// be merged, the reviews file cannot be read, or a review cannot be scored.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

pub(crate) fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Score(args) => run_score_with(args, writer),
        Command::Recommend(args) => run_recommend_with(args, writer),
        Command::Browse(args) => run_browse_with(args, writer),
        Command::Related(args) => run_related_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "mieayam",
    about = "Score, recommend and browse chicken-noodle reviews",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Score every review in a file.
    Score(ScoreArgs),
    /// Recommend one review for a taste and complexity preference.
    Recommend(RecommendArgs),
    /// Filter and sort reviews.
    Browse(BrowseArgs),
    /// List reviews related to an anchor review.
    Related(RelatedArgs),
}

#[cfg(test)]
mod tests;

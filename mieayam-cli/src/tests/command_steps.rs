//! Behaviour-driven step definitions driving the CLI command scenarios.

use super::helpers::ReviewsFile;
use super::*;
use mieayam_core::test_support::{sample_catalogue, worked_example_soup};
use mieayam_core::{ProductType, ReviewRecord};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::Value;
use std::cell::RefCell;

const UNPRICED_REVIEW_ID: u64 = 9;

#[derive(Debug)]
struct CommandWorld {
    reviews: ReviewsFile,
    include_reviews: RefCell<bool>,
    extra_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl CommandWorld {
    fn new() -> Self {
        Self {
            reviews: ReviewsFile::new(),
            include_reviews: RefCell::new(true),
            extra_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn push_args(&self, args: &[&str]) {
        self.extra_args
            .borrow_mut()
            .extend(args.iter().map(|arg| (*arg).to_owned()));
    }

    fn run(&self, subcommand: &str) {
        let mut argv = vec!["mieayam".to_owned(), subcommand.to_owned()];
        if *self.include_reviews.borrow() {
            argv.push(self.reviews.path().as_str().to_owned());
        }
        argv.extend(self.extra_args.borrow().iter().cloned());

        let parsed = Cli::try_parse_from(argv).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| {
            let mut buffer = self.stdout.borrow_mut();
            dispatch(cli.command, &mut *buffer)
        });
        self.result.replace(Some(outcome));
    }

    fn output(&self) -> Value {
        serde_json::from_slice(&self.stdout.borrow()).expect("stdout should be JSON")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> CommandWorld {
    CommandWorld::new()
}

fn ids(value: &Value, pointer: &str) -> Vec<u64> {
    value
        .as_array()
        .expect("output should be an array")
        .iter()
        .map(|entry| {
            entry
                .pointer(pointer)
                .and_then(Value::as_u64)
                .expect("entry should carry an id")
        })
        .collect()
}

#[given("a reviews file holding the reference soup review")]
fn reference_review_file(#[from(world)] world: &CommandWorld) {
    world.reviews.write_reviews(&[worked_example_soup()]);
}

#[given("a reviews file holding an unpriced review")]
fn unpriced_review_file(#[from(world)] world: &CommandWorld) {
    world.reviews.write_reviews(&[
        worked_example_soup(),
        ReviewRecord::new(UNPRICED_REVIEW_ID, ProductType::Fried, 0.0),
    ]);
}

#[given("a reviews file holding the sample catalogue")]
fn catalogue_file(#[from(world)] world: &CommandWorld) {
    world.reviews.write_reviews(&sample_catalogue());
}

#[given("a reviews file holding only soups")]
fn soup_only_file(#[from(world)] world: &CommandWorld) {
    let soups: Vec<ReviewRecord> = sample_catalogue()
        .into_iter()
        .filter(|review| review.product_type == ProductType::Soup)
        .collect();
    world.reviews.write_reviews(&soups);
}

#[given("I request the legacy score")]
fn request_legacy(#[from(world)] world: &CommandWorld) {
    world.push_args(&["--legacy"]);
}

#[given("I omit the reviews path")]
fn omit_reviews_path(#[from(world)] world: &CommandWorld) {
    *world.include_reviews.borrow_mut() = false;
}

#[when("I run the score command")]
fn run_score_command(#[from(world)] world: &CommandWorld) {
    world.run("score");
}

#[when("I ask the CLI for a sweet and complex fried serving")]
fn run_recommend_command(#[from(world)] world: &CommandWorld) {
    world.push_args(&[
        "--product-type",
        "fried",
        "--taste",
        "sweet",
        "--complexity",
        "complex",
    ]);
    world.run("recommend");
}

#[when("I browse soups in Jakarta")]
fn run_browse_command(#[from(world)] world: &CommandWorld) {
    world.push_args(&["--product-type", "soup", "--city", "Jakarta"]);
    world.run("browse");
}

#[when("I list reviews related to the Yogyakarta fried review")]
fn run_related_command(#[from(world)] world: &CommandWorld) {
    world.push_args(&["--anchor", "5"]);
    world.run("related");
}

#[when("I list reviews related to an unknown review")]
fn run_related_unknown(#[from(world)] world: &CommandWorld) {
    world.push_args(&["--anchor", "404"]);
    world.run("related");
}

#[then("the command succeeds")]
fn command_succeeds(#[from(world)] world: &CommandWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err:?}");
    }
}

#[then("the reference review scores 1.34")]
fn reference_scores(#[from(world)] world: &CommandWorld) {
    let output = world.output();
    assert_eq!(ids(&output, "/id"), vec![1]);
    let score = output
        .pointer("/0/result/finalScore")
        .and_then(Value::as_f64)
        .expect("final score");
    assert!((score - 1.34).abs() < 1e-9, "got {score}");
}

#[then("the reference review carries a legacy score")]
fn reference_has_legacy(#[from(world)] world: &CommandWorld) {
    let legacy = world
        .output()
        .pointer("/0/legacyScore")
        .and_then(Value::as_f64)
        .expect("legacy score");
    assert!((legacy - 1.597).abs() < 1e-3, "got {legacy}");
}

#[then("the command fails naming the unpriced review")]
fn fails_naming_review(#[from(world)] world: &CommandWorld) {
    match &*world.error() {
        CliError::Score(source) => assert_eq!(source.review_id, UNPRICED_REVIEW_ID),
        other => panic!("expected Score, found {other:?}"),
    }
    assert!(world.stdout.borrow().is_empty());
}

#[then("the command fails because the reviews path is missing")]
fn fails_missing_reviews(#[from(world)] world: &CommandWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, env } => {
            assert_eq!(*field, ARG_REVIEWS);
            assert_eq!(*env, ENV_SCORE_REVIEWS);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the printed recommendation is the Yogyakarta fried review")]
fn recommendation_is_fried(#[from(world)] world: &CommandWorld) {
    let output = world.output();
    assert_eq!(output.pointer("/id").and_then(Value::as_u64), Some(5));
    assert_eq!(
        output.pointer("/productType").and_then(Value::as_str),
        Some("fried")
    );
}

#[then("the printed recommendation is null")]
fn recommendation_is_null(#[from(world)] world: &CommandWorld) {
    assert!(world.output().is_null());
}

#[then("only the Jakarta soup review is printed")]
fn browse_prints_jakarta_soup(#[from(world)] world: &CommandWorld) {
    assert_eq!(ids(&world.output(), "/id"), vec![2]);
}

#[then("the related reviews are printed by relevance")]
fn related_printed(#[from(world)] world: &CommandWorld) {
    let output = world.output();
    assert_eq!(ids(&output, "/review/id"), vec![2, 3, 1]);
    assert_eq!(
        output.pointer("/0/relevance").and_then(Value::as_u64),
        Some(4)
    );
}

#[then("the command fails because the anchor is unknown")]
fn fails_unknown_anchor(#[from(world)] world: &CommandWorld) {
    match &*world.error() {
        CliError::UnknownAnchor { id, .. } => assert_eq!(*id, 404),
        other => panic!("expected UnknownAnchor, found {other:?}"),
    }
}

macro_rules! register_score_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/score_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CommandWorld) {
            let _ = world;
        }
    };
}

macro_rules! register_query_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/query_commands.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CommandWorld) {
            let _ = world;
        }
    };
}

register_score_scenario!(score_reference_review, "scoring the reference review");
register_score_scenario!(score_with_legacy, "including the legacy score");
register_score_scenario!(score_rejects_unpriced, "rejecting an unpriced review");
register_score_scenario!(score_rejects_missing_path, "rejecting a missing reviews path");
register_query_scenario!(
    recommend_relaxed,
    "recommending with a relaxed preference"
);
register_query_scenario!(
    recommend_none,
    "recommending from a file without that serving style"
);
register_query_scenario!(browse_jakarta_soups, "browsing soups in Jakarta");
register_query_scenario!(related_listing, "listing related reviews");
register_query_scenario!(related_unknown_anchor, "rejecting an unknown anchor");

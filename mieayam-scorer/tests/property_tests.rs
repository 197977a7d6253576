//! Property-based tests for the value-adjusted scorer.
//!
//! # Invariants tested
//!
//! - **Range:** the public score stays within `0.0..=10.0` for any priced
//!   review, however extreme its service time.
//! - **Determinism:** scoring the same review twice yields identical bits.
//! - **Product isolation:** ratings outside the active flavour set never move
//!   the score.

use mieayam_core::{
    BROTH_DIMENSIONS, Dimension, FRIED_FLAVOR_DIMENSIONS, ProductType, ReviewRecord, Scorer, Topping,
};
use mieayam_scorer::ValueScorer;
use proptest::prelude::*;

fn product_type_strategy() -> impl Strategy<Value = ProductType> {
    prop_oneof![Just(ProductType::Soup), Just(ProductType::Fried)]
}

/// Reviews with arbitrary ratings, service times and toppings.
fn review_strategy() -> impl Strategy<Value = ReviewRecord> {
    (
        product_type_strategy(),
        1.0_f64..200_000.0,
        prop::collection::vec(prop::option::of(0.0_f64..=10.0), Dimension::all().len()),
        prop::option::of(0.0_f64..120.0),
        prop::collection::vec(any::<bool>(), Topping::ALL.len()),
    )
        .prop_map(|(product_type, price, ratings, minutes, toppings)| {
            let mut review = ReviewRecord::new(1, product_type, price);
            for (dimension, rating) in Dimension::all().iter().zip(ratings) {
                if let Some(value) = rating {
                    review = review.with_rating(*dimension, value);
                }
            }
            if let Some(value) = minutes {
                review = review.with_service_duration(value);
            }
            for (topping, present) in Topping::ALL.iter().zip(toppings) {
                if present {
                    review = review.with_topping(*topping);
                }
            }
            review
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the public score never leaves its scale.
    #[test]
    fn final_score_stays_in_range(review in review_strategy()) {
        let result = ValueScorer::default().score(&review).expect("positive price");
        prop_assert!((0.0..=10.0).contains(&result.final_score), "got {}", result.final_score);
        prop_assert!((0.0..=100.0).contains(&result.final_score_100));
        prop_assert!((0.85..=1.15).contains(&result.value_factor));
    }

    /// Property: scoring is a pure function of the review.
    #[test]
    fn scoring_is_deterministic(review in review_strategy()) {
        let scorer = ValueScorer::default();
        let first = scorer.score(&review).expect("positive price");
        let second = scorer.score(&review).expect("positive price");
        prop_assert_eq!(first.final_score.to_bits(), second.final_score.to_bits());
        prop_assert_eq!(first, second);
    }

    /// Property: fried-only ratings never affect a soup score.
    #[test]
    fn soup_ignores_fried_ratings(
        review in review_strategy(),
        noise in prop::collection::vec(0.0_f64..=10.0, 3),
    ) {
        let mut soup = review;
        soup.product_type = ProductType::Soup;
        let fried_only = FRIED_FLAVOR_DIMENSIONS
            .iter()
            .filter(|dimension| !matches!(
                dimension,
                Dimension::NoodleTexture | Dimension::ChickenSeasoning | Dimension::ChickenCut
            ));
        let mut noisy = soup.clone();
        for (dimension, value) in fried_only.zip(noise) {
            noisy = noisy.with_rating(*dimension, value);
        }

        let scorer = ValueScorer::default();
        prop_assert_eq!(
            scorer.score(&soup).expect("positive price"),
            scorer.score(&noisy).expect("positive price")
        );
    }

    /// Property: broth ratings never affect a fried score.
    #[test]
    fn fried_ignores_broth_ratings(
        review in review_strategy(),
        noise in prop::collection::vec(0.0_f64..=10.0, BROTH_DIMENSIONS.len()),
    ) {
        let mut fried = review;
        fried.product_type = ProductType::Fried;
        let mut noisy = fried.clone();
        for (dimension, value) in BROTH_DIMENSIONS.iter().zip(noise) {
            noisy = noisy.with_rating(*dimension, value);
        }

        let scorer = ValueScorer::default();
        prop_assert_eq!(
            scorer.score(&fried).expect("positive price"),
            scorer.score(&noisy).expect("positive price")
        );
    }
}

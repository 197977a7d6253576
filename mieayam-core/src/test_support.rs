//! Sample reviews shared by unit and behaviour tests.

use crate::{Dimension, ProductType, ReviewRecord, Topping};

/// The fully rated soup review used as the reference scoring example.
///
/// Scores `final_score = 1.34` with the default weights.
#[must_use]
pub fn worked_example_soup() -> ReviewRecord {
    ReviewRecord::new(1, ProductType::Soup, 10_000.0)
        .with_name("Mie Ayam Bu Tumini")
        .with_city("Yogyakarta")
        .with_rating(Dimension::NoodleTexture, 8.0)
        .with_rating(Dimension::ChickenSeasoning, 7.0)
        .with_rating(Dimension::ChickenCut, 8.0)
        .with_rating(Dimension::BrothThickness, 7.0)
        .with_rating(Dimension::BrothBalance, 8.0)
        .with_rating(Dimension::BrothDepth, 7.0)
        .with_rating(Dimension::BrothAroma, 8.0)
        .with_rating(Dimension::BrothClarity, 7.0)
        .with_rating(Dimension::Cleanliness, 9.0)
        .with_rating(Dimension::Utensils, 8.0)
        .with_rating(Dimension::Ambiance, 8.0)
        .with_service_duration(6.0)
        .with_topping(Topping::Egg)
        .with_topping(Topping::BoiledWonton)
}

/// A fully rated fried review with every dimension at `rating`.
#[must_use]
pub fn uniform_fried(id: u64, price: f64, rating: f64) -> ReviewRecord {
    Dimension::all()
        .iter()
        .fold(ReviewRecord::new(id, ProductType::Fried, price), |review, &dimension| {
            review.with_rating(dimension, rating)
        })
}

/// A small catalogue spanning both product types, cities and flavour regions.
///
/// | id | type  | city       | price  | score | complexity | sweetness |
/// |----|-------|------------|--------|-------|------------|-----------|
/// | 1  | soup  | Yogyakarta | 10 000 | 1.9   | -2.0       | 3.0       |
/// | 2  | soup  | Jakarta    | 15 000 | 2.4   | 1.0        | -1.0      |
/// | 3  | fried | Jakarta    | 12 000 | 2.1   | 3.0        | -3.0      |
/// | 4  | soup  | Bandung    | 9 000  | 1.5   | 0.0        | 0.5       |
/// | 5  | fried | Yogyakarta | 20 000 | 2.8   | -1.0       | 2.5       |
#[must_use]
pub fn sample_catalogue() -> Vec<ReviewRecord> {
    vec![
        ReviewRecord::new(1, ProductType::Soup, 10_000.0)
            .with_name("Mie Ayam Bu Tumini")
            .with_address("Jl. Imogiri Timur 187")
            .with_city("Yogyakarta")
            .with_flavor(-2.0, 3.0)
            .with_overall_score(1.9)
            .with_created_at("2024-03-01T08:00:00Z"),
        ReviewRecord::new(2, ProductType::Soup, 15_000.0)
            .with_name("Bakmi Gajah Mada")
            .with_address("Jl. Gajah Mada 92")
            .with_city("Jakarta")
            .with_flavor(1.0, -1.0)
            .with_overall_score(2.4)
            .with_editors_choice()
            .with_created_at("2024-05-12T11:30:00Z"),
        ReviewRecord::new(3, ProductType::Fried, 12_000.0)
            .with_name("Mie Goreng Bangka Asiong")
            .with_address("Jl. Mangga Besar 4")
            .with_city("Jakarta")
            .with_flavor(3.0, -3.0)
            .with_overall_score(2.1)
            .with_created_at("2024-01-20T19:15:00Z"),
        ReviewRecord::new(4, ProductType::Soup, 9_000.0)
            .with_name("Mie Ayam Mang Dadeng")
            .with_address("Jl. Braga 12")
            .with_city("Bandung")
            .with_flavor(0.0, 0.5)
            .with_overall_score(1.5),
        ReviewRecord::new(5, ProductType::Fried, 20_000.0)
            .with_name("Mie Ayam Goreng Pak Min")
            .with_address("Jl. Kaliurang 5")
            .with_city("Yogyakarta")
            .with_flavor(-1.0, 2.5)
            .with_overall_score(2.8)
            .with_created_at("2024-07-04T12:00:00Z"),
    ]
}

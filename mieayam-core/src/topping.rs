//! Optional add-ons a stall may offer with its noodles.

use serde::{Deserialize, Serialize};

use crate::wire::null_as_default;

/// A single optional topping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topping {
    /// Boiled wonton dumplings.
    BoiledWonton,
    /// Fried wonton crisps.
    FriedWonton,
    /// Beef or chicken meatballs.
    Meatball,
    /// Braised chicken feet.
    ChickenFeet,
    /// Egg, boiled or fried.
    Egg,
    /// Braised mushrooms.
    Mushroom,
    /// Prawn or cassava crackers.
    Crackers,
    /// Extra greens.
    ExtraVegetables,
}

impl Topping {
    /// All eight toppings.
    pub const ALL: [Self; 8] = [
        Self::BoiledWonton,
        Self::FriedWonton,
        Self::Meatball,
        Self::ChickenFeet,
        Self::Egg,
        Self::Mushroom,
        Self::Crackers,
        Self::ExtraVegetables,
    ];
}

/// Availability flags for the eight toppings; absent flags read as `false`.
///
/// # Examples
/// ```
/// use mieayam_core::{Topping, Toppings};
///
/// let toppings = Toppings::default()
///     .with(Topping::Egg)
///     .with(Topping::Meatball);
/// assert_eq!(toppings.count(), 2);
/// assert!(toppings.has(Topping::Egg));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Toppings {
    #[serde(deserialize_with = "null_as_default")]
    boiled_wonton: bool,
    #[serde(deserialize_with = "null_as_default")]
    fried_wonton: bool,
    #[serde(deserialize_with = "null_as_default")]
    meatball: bool,
    #[serde(deserialize_with = "null_as_default")]
    chicken_feet: bool,
    #[serde(deserialize_with = "null_as_default")]
    egg: bool,
    #[serde(deserialize_with = "null_as_default")]
    mushroom: bool,
    #[serde(deserialize_with = "null_as_default")]
    crackers: bool,
    #[serde(deserialize_with = "null_as_default")]
    extra_vegetables: bool,
}

impl Toppings {
    /// Every topping available.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            boiled_wonton: true,
            fried_wonton: true,
            meatball: true,
            chicken_feet: true,
            egg: true,
            mushroom: true,
            crackers: true,
            extra_vegetables: true,
        }
    }

    /// Report whether `topping` is available.
    #[must_use]
    pub const fn has(&self, topping: Topping) -> bool {
        match topping {
            Topping::BoiledWonton => self.boiled_wonton,
            Topping::FriedWonton => self.fried_wonton,
            Topping::Meatball => self.meatball,
            Topping::ChickenFeet => self.chicken_feet,
            Topping::Egg => self.egg,
            Topping::Mushroom => self.mushroom,
            Topping::Crackers => self.crackers,
            Topping::ExtraVegetables => self.extra_vegetables,
        }
    }

    /// Mark `topping` as available or unavailable.
    pub const fn set(&mut self, topping: Topping, available: bool) {
        let flag = match topping {
            Topping::BoiledWonton => &mut self.boiled_wonton,
            Topping::FriedWonton => &mut self.fried_wonton,
            Topping::Meatball => &mut self.meatball,
            Topping::ChickenFeet => &mut self.chicken_feet,
            Topping::Egg => &mut self.egg,
            Topping::Mushroom => &mut self.mushroom,
            Topping::Crackers => &mut self.crackers,
            Topping::ExtraVegetables => &mut self.extra_vegetables,
        };
        *flag = available;
    }

    /// Mark `topping` as available while returning `self` for chaining.
    #[must_use]
    pub const fn with(mut self, topping: Topping) -> Self {
        self.set(topping, true);
        self
    }

    /// Number of available toppings, `0..=8`.
    #[must_use]
    pub fn count(&self) -> u32 {
        let available = Topping::ALL
            .iter()
            .filter(|&&topping| self.has(topping))
            .count();
        u32::try_from(available).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_has_no_toppings() {
        assert_eq!(Toppings::default().count(), 0);
    }

    #[rstest]
    fn all_has_eight_toppings() {
        assert_eq!(Toppings::all().count(), 8);
    }

    #[rstest]
    fn set_can_withdraw_a_topping() {
        let mut toppings = Toppings::all();
        toppings.set(Topping::Crackers, false);
        assert!(!toppings.has(Topping::Crackers));
        assert_eq!(toppings.count(), 7);
    }

    #[rstest]
    fn null_flags_decode_as_false() {
        let toppings: Toppings =
            serde_json::from_str(r#"{"egg":null,"mushroom":true,"crackers":null}"#)
                .expect("decode");
        assert_eq!(toppings, Toppings::default().with(Topping::Mushroom));
    }

    #[rstest]
    fn missing_flags_decode_as_false() {
        let toppings: Toppings =
            serde_json::from_str(r#"{"egg":true,"chickenFeet":true}"#).expect("decode");
        assert_eq!(toppings.count(), 2);
        assert!(toppings.has(Topping::ChickenFeet));
        assert!(!toppings.has(Topping::Mushroom));
    }
}

//! Toppings

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::parse::ParseError;

/// A topping that can be placed on a pizza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topping {
    /// Basil
    Basil,

    /// Mushroom
    Mushroom,

    /// Olive
    Olive,

    /// Peppers
    Peppers,

    /// Pepperoni
    Pepperoni,

    /// Pineapple
    Pineapple,
}

impl Topping {
    /// Every topping, in display order.
    pub const ALL: [Topping; 6] = [
        Topping::Basil,
        Topping::Mushroom,
        Topping::Olive,
        Topping::Peppers,
        Topping::Pepperoni,
        Topping::Pineapple,
    ];

    /// Human readable topping name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Topping::Basil => "Basil",
            Topping::Mushroom => "Mushroom",
            Topping::Olive => "Olive",
            Topping::Peppers => "Peppers",
            Topping::Pepperoni => "Pepperoni",
            Topping::Pineapple => "Pineapple",
        }
    }

    /// Reference to the overlay image drawn over the crust in the preview.
    ///
    /// The reference is opaque here; only a renderer knows how to resolve it.
    #[must_use]
    pub fn overlay(self) -> &'static str {
        match self {
            Topping::Basil => "topping_basil",
            Topping::Mushroom => "topping_mushroom",
            Topping::Olive => "topping_olive",
            Topping::Peppers => "topping_peppers",
            Topping::Pepperoni => "topping_pepperoni",
            Topping::Pineapple => "topping_pineapple",
        }
    }
}

impl fmt::Display for Topping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Topping {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        Topping::ALL
            .into_iter()
            .find(|topping| topping.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseError::UnknownTopping(s.to_string()))
    }
}

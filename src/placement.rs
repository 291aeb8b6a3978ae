//! Topping Placement

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::parse::ParseError;

/// Where on the pizza a topping sits.
///
/// A topping that is not on the pizza has no placement at all; there is deliberately no
/// `None` variant. Call sites that need to express removal use `Option<ToppingPlacement>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToppingPlacement {
    /// Left half
    Left,

    /// Right half
    Right,

    /// The whole pizza
    All,
}

impl ToppingPlacement {
    /// Every placement, in the order offered to the user.
    pub const ALL: [ToppingPlacement; 3] = [
        ToppingPlacement::Left,
        ToppingPlacement::Right,
        ToppingPlacement::All,
    ];

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ToppingPlacement::Left => "Left half",
            ToppingPlacement::Right => "Right half",
            ToppingPlacement::All => "Whole pizza",
        }
    }

    /// Whether the topping covers only one half of the pizza.
    #[must_use]
    pub fn is_half(self) -> bool {
        matches!(self, ToppingPlacement::Left | ToppingPlacement::Right)
    }

    fn keyword(self) -> &'static str {
        match self {
            ToppingPlacement::Left => "left",
            ToppingPlacement::Right => "right",
            ToppingPlacement::All => "all",
        }
    }
}

impl fmt::Display for ToppingPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ToppingPlacement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        ToppingPlacement::ALL
            .into_iter()
            .find(|placement| {
                placement.keyword().eq_ignore_ascii_case(wanted)
                    || placement.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ParseError::UnknownPlacement(s.to_string()))
    }
}

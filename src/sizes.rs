//! Sizes

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::parse::ParseError;

/// Overall pizza size. Ordered from smallest to largest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    /// Small, the default size
    #[default]
    Small,

    /// Medium
    Medium,

    /// Large
    Large,
}

impl Size {
    /// Every size, smallest first.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    /// Display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }

    /// One-letter label shown on the size selector buttons.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Size::Small => "S",
            Size::Medium => "M",
            Size::Large => "L",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Size {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();

        Size::ALL
            .into_iter()
            .find(|size| {
                size.label().eq_ignore_ascii_case(wanted)
                    || size.short_label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ParseError::UnknownSize(s.to_string()))
    }
}

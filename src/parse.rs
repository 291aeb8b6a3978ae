//! Parsing
//!
//! Text forms of toppings, sizes and placements as typed on the command line.

use thiserror::Error;

use crate::{placement::ToppingPlacement, toppings::Topping};

/// Keyword that removes a topping instead of placing it.
pub const REMOVE_KEYWORD: &str = "none";

/// Errors produced while parsing identifiers from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The text does not name a topping.
    #[error("Unknown topping: {0}")]
    UnknownTopping(String),

    /// The text does not name a size.
    #[error("Unknown size: {0}")]
    UnknownSize(String),

    /// The text does not name a placement.
    #[error("Unknown placement: {0}")]
    UnknownPlacement(String),

    /// A topping edit was not in `TOPPING=PLACEMENT` form.
    #[error("Expected format 'TOPPING=PLACEMENT', got: {0}")]
    MalformedEdit(String),
}

/// Parse a topping edit such as `pepperoni=left` or `basil=none`.
///
/// A missing placement (`pepperoni`) means the whole pizza. The [`REMOVE_KEYWORD`] placement
/// yields `None`, which removes the topping.
///
/// # Errors
///
/// Returns a [`ParseError`] if the topping or placement is not recognised.
pub fn parse_topping_edit(s: &str) -> Result<(Topping, Option<ToppingPlacement>), ParseError> {
    let (name, placement) = match s.split_once('=') {
        Some((name, placement)) => (name, Some(placement.trim())),
        None => (s, None),
    };

    if name.trim().is_empty() {
        return Err(ParseError::MalformedEdit(s.to_string()));
    }

    let topping = name.parse::<Topping>()?;

    let placement = match placement {
        None => Some(ToppingPlacement::All),
        Some("") => return Err(ParseError::MalformedEdit(s.to_string())),
        Some(value) if value.eq_ignore_ascii_case(REMOVE_KEYWORD) => None,
        Some(value) => Some(value.parse::<ToppingPlacement>()?),
    };

    Ok((topping, placement))
}

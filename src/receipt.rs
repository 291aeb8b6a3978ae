//! Receipt
//!
//! An itemised order summary, rendered as a table.

use std::io;

use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    pizza::PizzaConfiguration,
    pricing::{PriceBreakdown, PriceLine},
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error writing to the output.
    #[error("Failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

/// Itemised summary of a pizza order.
#[derive(Debug, Clone)]
pub struct Receipt {
    breakdown: PriceBreakdown,
    currency: &'static Currency,
}

impl Receipt {
    /// Build a receipt for a configuration, priced in the given currency.
    #[must_use]
    pub fn for_pizza(pizza: &PizzaConfiguration, currency: &'static Currency) -> Self {
        Self {
            breakdown: PriceBreakdown::for_pizza(pizza),
            currency,
        }
    }

    /// Lines on the receipt, excluding the total.
    #[must_use]
    pub fn lines(&self) -> &[PriceLine] {
        self.breakdown.lines()
    }

    /// Total amount payable.
    #[must_use]
    pub fn total(&self) -> Money<'static, Currency> {
        self.breakdown.total_in(self.currency)
    }

    /// Currency used for all monetary values.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Render the receipt as a table.
    #[must_use]
    pub fn render(&self) -> String {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Detail", "Price"]);

        for line in self.lines() {
            builder.push_record([
                line.description(),
                line.detail().to_string(),
                format!("{}", line.amount_in(self.currency)),
            ]);
        }

        builder.push_record([String::from("Total"), String::new(), format!("{}", self.total())]);

        let total_row = self.lines().len() + 1;

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);
        theme.insert_horizontal_line(total_row, separator);

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Rows::new(total_row..=total_row), Color::BOLD);
        table.modify(Columns::new(2..3), Alignment::right());
        table.modify(Columns::new(1..2), color_dark_grey());

        table.to_string()
    }

    /// Write the receipt table to `out`.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        writeln!(out, "\n{}", self.render())?;

        Ok(())
    }
}

/// ANSI dark grey.
fn color_dark_grey() -> Color {
    Color::new("\x1b[90m", "\x1b[0m")
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use crate::{placement::ToppingPlacement, sizes::Size, toppings::Topping};

    use super::*;

    fn hero_pizza() -> PizzaConfiguration {
        PizzaConfiguration::new(
            [
                (Topping::Pineapple, ToppingPlacement::All),
                (Topping::Pepperoni, ToppingPlacement::Left),
                (Topping::Basil, ToppingPlacement::Right),
            ],
            Size::Medium,
        )
    }

    #[test]
    fn total_matches_price() {
        let receipt = Receipt::for_pizza(&hero_pizza(), GBP);

        // 9.99 + 1.00 + 0.50 + 0.50 + 3.00
        assert_eq!(receipt.total(), Money::from_minor(1499, GBP));
        assert_eq!(receipt.currency(), GBP);
    }

    #[test]
    fn lines_are_base_toppings_then_size() {
        let receipt = Receipt::for_pizza(&hero_pizza(), GBP);

        assert_eq!(receipt.lines().len(), 5);
        assert_eq!(receipt.lines().first(), Some(&PriceLine::Base));
        assert_eq!(receipt.lines().last(), Some(&PriceLine::Size(Size::Medium)));
    }

    #[test]
    fn writes_every_line() -> TestResult {
        let receipt = Receipt::for_pizza(&hero_pizza(), GBP);
        let mut out = Vec::new();

        receipt.write_to(&mut out)?;

        let text = String::from_utf8(out)?;

        for expected in ["Base", "Basil", "Pepperoni", "Pineapple", "Medium size", "Total"] {
            assert!(text.contains(expected), "missing {expected} in {text}");
        }

        Ok(())
    }
}

//! Pricing
//!
//! The price of a pizza is a base price, plus a surcharge per topping that depends on how much
//! of the pizza it covers, plus a surcharge for the size. All arithmetic is done in minor units
//! (pence/cents) so totals are exact.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;

use crate::{
    pizza::PizzaConfiguration, placement::ToppingPlacement, sizes::Size, toppings::Topping,
};

/// Price of a pizza with no toppings at the smallest size, in minor units.
pub const BASE_PRICE: i64 = 999;

/// Decimal places of a minor unit.
const MINOR_UNIT_SCALE: u32 = 2;

/// Surcharge for a single topping with the given placement, in minor units.
#[must_use]
pub fn topping_surcharge(placement: ToppingPlacement) -> i64 {
    match placement {
        ToppingPlacement::Left | ToppingPlacement::Right => 50,
        ToppingPlacement::All => 100,
    }
}

/// Surcharge for the given size, in minor units.
#[must_use]
pub fn size_surcharge(size: Size) -> i64 {
    match size {
        Size::Small => 0,
        Size::Medium => 300,
        Size::Large => 600,
    }
}

/// Total price of a configuration, in minor units.
#[must_use]
pub fn total_minor(pizza: &PizzaConfiguration) -> i64 {
    let toppings: i64 = pizza
        .toppings()
        .values()
        .map(|placement| topping_surcharge(*placement))
        .sum();

    BASE_PRICE + toppings + size_surcharge(pizza.size())
}

/// Price of a configuration as an exact two decimal place amount (e.g. `9.99`).
#[must_use]
pub fn price(pizza: &PizzaConfiguration) -> Decimal {
    minor_to_decimal(total_minor(pizza))
}

/// Price of a configuration in the given currency, for display.
#[must_use]
pub fn price_in(
    pizza: &PizzaConfiguration,
    currency: &'static Currency,
) -> Money<'static, Currency> {
    Money::from_minor(total_minor(pizza), currency)
}

fn minor_to_decimal(minor: i64) -> Decimal {
    Decimal::new(minor, MINOR_UNIT_SCALE)
}

/// A single line contributing to the price of a pizza.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceLine {
    /// The base price every pizza pays.
    Base,

    /// A topping surcharge.
    Topping(Topping, ToppingPlacement),

    /// The size surcharge.
    Size(Size),
}

impl PriceLine {
    /// Amount of this line, in minor units.
    #[must_use]
    pub fn amount_minor(self) -> i64 {
        match self {
            PriceLine::Base => BASE_PRICE,
            PriceLine::Topping(_, placement) => topping_surcharge(placement),
            PriceLine::Size(size) => size_surcharge(size),
        }
    }

    /// Amount of this line in the given currency.
    #[must_use]
    pub fn amount_in(self, currency: &'static Currency) -> Money<'static, Currency> {
        Money::from_minor(self.amount_minor(), currency)
    }

    /// Short description of what the line charges for.
    #[must_use]
    pub fn description(self) -> String {
        match self {
            PriceLine::Base => "Base".to_string(),
            PriceLine::Topping(topping, _) => topping.name().to_string(),
            PriceLine::Size(size) => format!("{size} size"),
        }
    }

    /// Secondary detail, such as the placement of a topping.
    #[must_use]
    pub fn detail(self) -> &'static str {
        match self {
            PriceLine::Topping(_, placement) => placement.label(),
            PriceLine::Size(size) => size.short_label(),
            PriceLine::Base => "",
        }
    }
}

/// Itemised price of a pizza.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceBreakdown {
    lines: SmallVec<[PriceLine; 8]>,
}

impl PriceBreakdown {
    /// Build the breakdown of a configuration: base, toppings in display order, then size.
    #[must_use]
    pub fn for_pizza(pizza: &PizzaConfiguration) -> Self {
        let mut lines: SmallVec<[PriceLine; 8]> = SmallVec::new();

        lines.push(PriceLine::Base);
        lines.extend(
            pizza
                .placed_toppings()
                .map(|(topping, placement)| PriceLine::Topping(topping, placement)),
        );
        lines.push(PriceLine::Size(pizza.size()));

        Self { lines }
    }

    /// Lines of the breakdown.
    #[must_use]
    pub fn lines(&self) -> &[PriceLine] {
        &self.lines
    }

    /// Sum of all lines, in minor units.
    #[must_use]
    pub fn total_minor(&self) -> i64 {
        self.lines.iter().map(|line| line.amount_minor()).sum()
    }

    /// Sum of all lines as a decimal amount.
    #[must_use]
    pub fn total(&self) -> Decimal {
        minor_to_decimal(self.total_minor())
    }

    /// Sum of all lines in the given currency.
    #[must_use]
    pub fn total_in(&self, currency: &'static Currency) -> Money<'static, Currency> {
        Money::from_minor(self.total_minor(), currency)
    }
}

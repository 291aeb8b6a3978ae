//! Pizza Configuration

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::{placement::ToppingPlacement, pricing, sizes::Size, toppings::Topping};

/// The complete description of one pizza: which toppings sit where, and its size.
///
/// A configuration is an immutable snapshot. Edits go through [`with_topping`] and
/// [`with_size`], which return a new configuration and leave `self` untouched.
///
/// [`with_topping`]: PizzaConfiguration::with_topping
/// [`with_size`]: PizzaConfiguration::with_size
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PizzaConfiguration {
    toppings: FxHashMap<Topping, ToppingPlacement>,
    size: Size,
}

impl PizzaConfiguration {
    /// Create a configuration from topping placements and a size.
    ///
    /// Later placements for the same topping replace earlier ones.
    pub fn new(
        toppings: impl IntoIterator<Item = (Topping, ToppingPlacement)>,
        size: Size,
    ) -> Self {
        Self {
            toppings: toppings.into_iter().collect(),
            size,
        }
    }

    /// Topping placements, keyed by topping.
    #[must_use]
    pub fn toppings(&self) -> &FxHashMap<Topping, ToppingPlacement> {
        &self.toppings
    }

    /// Placement of the given topping, or `None` when it is not on the pizza.
    #[must_use]
    pub fn placement(&self, topping: Topping) -> Option<ToppingPlacement> {
        self.toppings.get(&topping).copied()
    }

    /// Toppings on the pizza with their placements, in [`Topping::ALL`] order.
    pub fn placed_toppings(&self) -> impl Iterator<Item = (Topping, ToppingPlacement)> + '_ {
        Topping::ALL
            .into_iter()
            .filter_map(|topping| self.placement(topping).map(|placement| (topping, placement)))
    }

    /// Pizza size
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns a copy of this configuration with the topping placed, or removed when
    /// `placement` is `None`.
    ///
    /// Placing a topping that is already on the pizza overwrites its previous placement.
    /// Removing a topping that is not on the pizza returns an identical configuration.
    #[must_use]
    pub fn with_topping(&self, topping: Topping, placement: Option<ToppingPlacement>) -> Self {
        let mut toppings = self.toppings.clone();

        match placement {
            Some(placement) => {
                toppings.insert(topping, placement);
            }
            None => {
                toppings.remove(&topping);
            }
        }

        Self {
            toppings,
            size: self.size,
        }
    }

    /// Returns a copy of this configuration with a different size.
    #[must_use]
    pub fn with_size(&self, size: Size) -> Self {
        Self {
            toppings: self.toppings.clone(),
            size,
        }
    }

    /// Price of this configuration. See [`pricing::price`].
    #[must_use]
    pub fn price(&self) -> Decimal {
        pricing::price(self)
    }
}

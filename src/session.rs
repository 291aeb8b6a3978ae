//! Builder Session
//!
//! The state a pizza builder screen holds: the current configuration, which is replaced
//! wholesale on every edit, and the topping whose placement is being chosen, if any.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use tracing::{debug, info};

use crate::{
    pizza::PizzaConfiguration,
    placement::ToppingPlacement,
    pricing::{price, price_in},
    sizes::Size,
    toppings::Topping,
};

/// Message shown to the user once an order is placed.
pub const ORDER_PLACED_MESSAGE: &str = "Order placed!";

/// Label of the option that takes a topping off the pizza.
pub const REMOVE_OPTION_LABEL: &str = "None";

/// An edit requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Place a topping, or remove it with `None`.
    SetTopping(Topping, Option<ToppingPlacement>),

    /// Change the size.
    SetSize(Size),
}

/// One choice in the placement prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementOption {
    /// Placement applied when chosen, `None` removes the topping
    pub placement: Option<ToppingPlacement>,

    /// Label shown for the choice
    pub label: &'static str,
}

/// A topping as listed on the builder screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToppingRow {
    /// The topping
    pub topping: Topping,

    /// Current placement, `None` if the topping is not on the pizza
    pub placement: Option<ToppingPlacement>,
}

impl ToppingRow {
    /// Whether the topping is on the pizza.
    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.placement.is_some()
    }
}

/// Acknowledgment returned when an order is placed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderAcknowledgment {
    /// Snapshot of the ordered configuration
    pub pizza: PizzaConfiguration,

    /// Price charged
    pub price: Money<'static, Currency>,

    /// Message to show the user
    pub message: &'static str,
}

/// Interactive builder state for a single screen.
#[derive(Debug, Default)]
pub struct BuilderSession {
    pizza: PizzaConfiguration,
    topping_being_added: Option<Topping>,
}

impl BuilderSession {
    /// Start a session with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from an existing configuration.
    #[must_use]
    pub fn with_pizza(pizza: PizzaConfiguration) -> Self {
        Self {
            pizza,
            topping_being_added: None,
        }
    }

    /// The current configuration.
    #[must_use]
    pub fn pizza(&self) -> &PizzaConfiguration {
        &self.pizza
    }

    /// Price of the current configuration.
    #[must_use]
    pub fn price(&self) -> Decimal {
        price(&self.pizza)
    }

    /// Apply an edit, replacing the current configuration.
    pub fn apply(&mut self, intent: Intent) -> &PizzaConfiguration {
        let next = match intent {
            Intent::SetTopping(topping, placement) => self.pizza.with_topping(topping, placement),
            Intent::SetSize(size) => self.pizza.with_size(size),
        };

        debug!(?intent, price = %price(&next), "pizza edited");

        self.pizza = next;

        &self.pizza
    }

    /// Open the placement prompt for a topping, replacing any prompt already open.
    pub fn begin_placement(&mut self, topping: Topping) {
        self.topping_being_added = Some(topping);
    }

    /// The topping whose placement prompt is open.
    #[must_use]
    pub fn topping_being_added(&self) -> Option<Topping> {
        self.topping_being_added
    }

    /// Choose a placement in the open prompt and close it.
    ///
    /// Returns the updated configuration, or `None` if no prompt was open.
    pub fn choose_placement(
        &mut self,
        placement: Option<ToppingPlacement>,
    ) -> Option<&PizzaConfiguration> {
        let topping = self.topping_being_added.take()?;

        Some(self.apply(Intent::SetTopping(topping, placement)))
    }

    /// Close the placement prompt without changing the pizza.
    pub fn dismiss_prompt(&mut self) {
        self.topping_being_added = None;
    }

    /// Choices offered by the placement prompt: every placement, then removal.
    pub fn placement_options() -> impl Iterator<Item = PlacementOption> {
        ToppingPlacement::ALL
            .into_iter()
            .map(|placement| PlacementOption {
                placement: Some(placement),
                label: placement.label(),
            })
            .chain(std::iter::once(PlacementOption {
                placement: None,
                label: REMOVE_OPTION_LABEL,
            }))
    }

    /// Every topping with its current placement, in display order.
    pub fn topping_rows(&self) -> impl Iterator<Item = ToppingRow> + '_ {
        Topping::ALL.into_iter().map(|topping| ToppingRow {
            topping,
            placement: self.pizza.placement(topping),
        })
    }

    /// Text of the order button, including the formatted price.
    #[must_use]
    pub fn order_button_label(&self, currency: &'static Currency) -> String {
        format!("Place order - {}", price_in(&self.pizza, currency)).to_uppercase()
    }

    /// Place an order for the current configuration.
    ///
    /// Nothing is persisted and the configuration is kept, so the user can order again.
    pub fn place_order(&self, currency: &'static Currency) -> OrderAcknowledgment {
        let price = price_in(&self.pizza, currency);

        info!(
            size = %self.pizza.size(),
            toppings = self.pizza.toppings().len(),
            %price,
            "order placed"
        );

        OrderAcknowledgment {
            pizza: self.pizza.clone(),
            price,
            message: ORDER_PLACED_MESSAGE,
        }
    }
}

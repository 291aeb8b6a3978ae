//! Pizzago prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    fixtures::{Fixture, FixtureError},
    parse::{ParseError, parse_topping_edit},
    pizza::PizzaConfiguration,
    placement::ToppingPlacement,
    preview::{Alignment, Anchor, Footprint, OverlayGeometry, PreviewLayer, preview_layers},
    pricing::{PriceBreakdown, PriceLine, price, price_in},
    receipt::{Receipt, ReceiptError},
    session::{BuilderSession, Intent, OrderAcknowledgment, PlacementOption, ToppingRow},
    sizes::Size,
    toppings::Topping,
};

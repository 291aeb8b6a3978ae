//! Pizzago
//!
//! Pizzago is the domain model behind a pizza builder: a closed set of toppings, sizes and
//! placements, an immutable [`PizzaConfiguration`](pizza::PizzaConfiguration) that every edit
//! replaces wholesale, and the pricing rule that turns a configuration into money.

pub mod fixtures;
pub mod parse;
pub mod pizza;
pub mod placement;
pub mod prelude;
pub mod preview;
pub mod pricing;
pub mod receipt;
pub mod session;
pub mod sizes;
pub mod toppings;

//! Driving a builder session the way the screen does.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::USD};
use testresult::TestResult;

use pizzago::{prelude::*, session::ORDER_PLACED_MESSAGE};

#[test]
fn build_and_order_a_pizza() -> TestResult {
    let mut session = BuilderSession::new();

    session.apply(Intent::SetSize(Size::Large));

    session.begin_placement(Topping::Pepperoni);
    session.choose_placement(Some(ToppingPlacement::Left));

    session.begin_placement(Topping::Basil);
    session.choose_placement(Some(ToppingPlacement::Right));

    // Opened by mistake.
    session.begin_placement(Topping::Olive);
    session.dismiss_prompt();

    assert_eq!(session.price(), Decimal::new(1699, 2));

    let ack = session.place_order(USD);

    assert_eq!(ack.price, Money::from_minor(1699, USD));
    assert_eq!(ack.message, ORDER_PLACED_MESSAGE);
    assert_eq!(ack.pizza.placement(Topping::Olive), None);

    let mut out = Vec::new();
    Receipt::for_pizza(&ack.pizza, USD).write_to(&mut out)?;

    assert!(String::from_utf8(out)?.contains("Pepperoni"));

    Ok(())
}

#[test]
fn reassigning_a_topping_without_removing_it_first() {
    let mut session = BuilderSession::new();

    session.begin_placement(Topping::Mushroom);
    session.choose_placement(Some(ToppingPlacement::Left));
    session.begin_placement(Topping::Mushroom);
    session.choose_placement(Some(ToppingPlacement::All));

    let rows: Vec<ToppingRow> = session.topping_rows().filter(ToppingRow::is_checked).collect();

    assert_eq!(
        rows,
        vec![ToppingRow {
            topping: Topping::Mushroom,
            placement: Some(ToppingPlacement::All),
        }]
    );
}

#[test]
fn every_edit_replaces_the_previous_configuration() {
    let mut session = BuilderSession::new();
    let before = session.pizza().clone();

    let after = session
        .apply(Intent::SetTopping(Topping::Pineapple, Some(ToppingPlacement::All)))
        .clone();

    assert_eq!(before, PizzaConfiguration::default());
    assert_ne!(before, after);
    assert_eq!(session.pizza(), &after);
}

#[test]
fn preview_tracks_the_session() {
    let mut session = BuilderSession::new();

    session.apply(Intent::SetTopping(Topping::Peppers, Some(ToppingPlacement::Right)));

    let layers = preview_layers(session.pizza());

    assert_eq!(
        layers.last().map(|layer| layer.geometry),
        Some(OverlayGeometry::for_placement(ToppingPlacement::Right))
    );

    session.apply(Intent::SetTopping(Topping::Peppers, None));

    assert_eq!(preview_layers(session.pizza()).len(), 1);
}

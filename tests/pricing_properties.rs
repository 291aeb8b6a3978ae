//! Pricing and editing laws, checked over every configuration.
//!
//! There are six toppings, each absent or placed in one of three ways, and three sizes, so
//! 4^6 * 3 = 12,288 configurations in total. That is small enough to check exhaustively.

use rust_decimal::Decimal;

use pizzago::prelude::*;

const PLACEMENT_CHOICES: [Option<ToppingPlacement>; 4] = [
    None,
    Some(ToppingPlacement::Left),
    Some(ToppingPlacement::Right),
    Some(ToppingPlacement::All),
];

fn all_pizzas() -> Vec<PizzaConfiguration> {
    let mut pizzas: Vec<PizzaConfiguration> = Size::ALL
        .into_iter()
        .map(|size| PizzaConfiguration::default().with_size(size))
        .collect();

    for topping in Topping::ALL {
        pizzas = pizzas
            .iter()
            .flat_map(|pizza| {
                PLACEMENT_CHOICES
                    .into_iter()
                    .map(move |placement| pizza.with_topping(topping, placement))
            })
            .collect();
    }

    pizzas
}

fn others_unchanged(before: &PizzaConfiguration, after: &PizzaConfiguration, edited: Topping) {
    for topping in Topping::ALL.into_iter().filter(|topping| *topping != edited) {
        assert_eq!(
            before.placement(topping),
            after.placement(topping),
            "{topping} changed while editing {edited}"
        );
    }
}

#[test]
fn enumeration_covers_every_configuration() {
    assert_eq!(all_pizzas().len(), 12_288);
}

#[test]
fn placing_a_topping_sets_only_that_topping() {
    for pizza in all_pizzas() {
        for topping in Topping::ALL {
            for placement in ToppingPlacement::ALL {
                let edited = pizza.with_topping(topping, Some(placement));

                assert_eq!(edited.placement(topping), Some(placement));
                assert_eq!(edited.size(), pizza.size());
                others_unchanged(&pizza, &edited, topping);
            }
        }
    }
}

#[test]
fn removing_a_topping_is_idempotent() {
    for pizza in all_pizzas() {
        for topping in Topping::ALL {
            let removed = pizza.with_topping(topping, None);

            assert!(!removed.toppings().contains_key(&topping));
            assert_eq!(removed.size(), pizza.size());
            assert_eq!(removed.with_topping(topping, None), removed);
            others_unchanged(&pizza, &removed, topping);
        }
    }
}

#[test]
fn changing_size_keeps_toppings() {
    for pizza in all_pizzas() {
        for size in Size::ALL {
            let resized = pizza.with_size(size);

            assert_eq!(resized.toppings(), pizza.toppings());
            assert_eq!(resized.size(), size);
        }
    }
}

#[test]
fn adding_a_topping_never_lowers_the_price() {
    for pizza in all_pizzas() {
        for topping in Topping::ALL {
            if pizza.placement(topping).is_some() {
                continue;
            }

            for placement in ToppingPlacement::ALL {
                assert!(price(&pizza.with_topping(topping, Some(placement))) >= price(&pizza));
            }
        }
    }
}

#[test]
fn larger_sizes_never_cost_less() {
    for pizza in all_pizzas() {
        let prices: Vec<Decimal> = Size::ALL
            .into_iter()
            .map(|size| price(&pizza.with_size(size)))
            .collect();

        assert!(
            prices.windows(2).all(|pair| pair.first() <= pair.last()),
            "{prices:?}"
        );
    }
}

#[test]
fn price_is_non_negative_and_matches_breakdown() {
    for pizza in all_pizzas() {
        let total = price(&pizza);

        assert!(total >= Decimal::new(999, 2));
        assert_eq!(PriceBreakdown::for_pizza(&pizza).total(), total);
    }
}

#[test]
fn default_pizza_costs_base_price() {
    assert_eq!(price(&PizzaConfiguration::default()), Decimal::new(999, 2));
}

#[test]
fn scenario_empty_small() {
    let pizza = PizzaConfiguration::default().with_size(Size::Small);

    assert_eq!(price(&pizza), Decimal::new(999, 2));
}

#[test]
fn scenario_whole_topping_medium() {
    let pizza = PizzaConfiguration::default()
        .with_topping(Topping::Mushroom, Some(ToppingPlacement::All))
        .with_size(Size::Medium);

    assert_eq!(price(&pizza), Decimal::new(1399, 2));
}

#[test]
fn scenario_two_halves_large() {
    let pizza = PizzaConfiguration::default()
        .with_topping(Topping::Pepperoni, Some(ToppingPlacement::Left))
        .with_topping(Topping::Peppers, Some(ToppingPlacement::Right))
        .with_size(Size::Large);

    assert_eq!(price(&pizza), Decimal::new(1699, 2));
}

#[test]
fn scenario_add_then_remove_restores_toppings() {
    for pizza in all_pizzas() {
        for topping in Topping::ALL {
            if pizza.placement(topping).is_some() {
                continue;
            }

            let round_trip = pizza
                .with_topping(topping, Some(ToppingPlacement::All))
                .with_topping(topping, None);

            assert_eq!(round_trip.toppings(), pizza.toppings());
        }
    }
}

#[test]
fn scenario_replacing_a_placement_overwrites() {
    let pizza = PizzaConfiguration::default()
        .with_topping(Topping::Olive, Some(ToppingPlacement::Left))
        .with_topping(Topping::Olive, Some(ToppingPlacement::All));

    assert_eq!(pizza.placement(Topping::Olive), Some(ToppingPlacement::All));
    assert_eq!(pizza.toppings().len(), 1);
    assert_eq!(price(&pizza), Decimal::new(1099, 2));
}

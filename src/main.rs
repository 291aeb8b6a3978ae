//! Pizzago command line
//!
//! Stands in for the builder screen: edits are replayed through a [`BuilderSession`], the
//! preview layers and receipt are printed, and the order is placed.

use std::io::{self, Write};

use anyhow::Result;
use rusty_money::{Money, iso::Currency};
use tabled::{builder::Builder, settings::Style};
use tracing::info;

use pizzago::{
    fixtures::Fixture,
    placement::ToppingPlacement,
    preview::preview_layers,
    pricing::{BASE_PRICE, size_surcharge, topping_surcharge},
    receipt::Receipt,
    session::{BuilderSession, Intent},
    sizes::Size,
    toppings::Topping,
};

use crate::config::{AppConfig, BuildArgs, Command};

mod config;
mod observability;

fn main() -> Result<()> {
    let config = AppConfig::load().unwrap_or_else(|err| err.exit());

    observability::init_subscriber(&config.logging)?;

    let currency = config.currency.currency();
    let fixture = Fixture::with_base_path(&config.fixtures_dir);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match config.command {
        Command::Menu => write_menu(&mut out, currency)?,
        Command::Build(args) => {
            let session = build_session(&args);

            write_order(&mut out, &session, currency)?;
        }
        Command::Fixture { name } => {
            let pizza = fixture.load_pizza(&name)?;

            info!(fixture = %name, "loaded pizza fixture");

            write_order(&mut out, &BuilderSession::with_pizza(pizza), currency)?;
        }
        Command::Fixtures => {
            for name in fixture.pizza_names()? {
                writeln!(out, "{name}")?;
            }
        }
    }

    Ok(())
}

/// Replay edits the way the builder screen issues them: size first, then one placement prompt
/// per topping edit.
fn build_session(args: &BuildArgs) -> BuilderSession {
    let mut session = BuilderSession::new();

    session.apply(Intent::SetSize(args.size));

    for &(topping, placement) in &args.toppings {
        session.begin_placement(topping);
        session.choose_placement(placement);
    }

    session
}

fn write_menu(out: &mut impl Write, currency: &'static Currency) -> Result<()> {
    let money = |minor| Money::from_minor(minor, currency).to_string();

    let mut toppings = Builder::default();
    toppings.push_record(["Topping", "Half", "Whole"]);

    for topping in Topping::ALL {
        toppings.push_record([
            topping.name().to_string(),
            money(topping_surcharge(ToppingPlacement::Left)),
            money(topping_surcharge(ToppingPlacement::All)),
        ]);
    }

    let mut sizes = Builder::default();
    sizes.push_record(["Size", "", "Surcharge"]);

    for size in Size::ALL {
        sizes.push_record([
            size.label().to_string(),
            size.short_label().to_string(),
            money(size_surcharge(size)),
        ]);
    }

    let mut placements = Builder::default();
    placements.push_record(["Placement"]);

    for option in BuilderSession::placement_options() {
        placements.push_record([option.label]);
    }

    writeln!(out, "Base price: {}", money(BASE_PRICE))?;

    for builder in [toppings, sizes, placements] {
        let mut table = builder.build();
        table.with(Style::modern_rounded());

        writeln!(out, "\n{table}")?;
    }

    Ok(())
}

fn write_order(
    out: &mut impl Write,
    session: &BuilderSession,
    currency: &'static Currency,
) -> Result<()> {
    let mut layers = Builder::default();
    layers.push_record(["Layer", "Anchor", "Alignment", "Aspect"]);

    for layer in preview_layers(session.pizza()) {
        layers.push_record([
            layer.overlay.to_string(),
            format!("{:?}", layer.geometry.anchor),
            format!("{:?}", layer.geometry.alignment),
            format!("{}", layer.geometry.footprint.aspect_ratio()),
        ]);
    }

    let mut table = layers.build();
    table.with(Style::modern_rounded());

    writeln!(out, "\n{table}")?;

    Receipt::for_pizza(session.pizza(), currency).write_to(&mut *out)?;

    writeln!(out, "[ {} ]", session.order_button_label(currency))?;

    let ack = session.place_order(currency);

    writeln!(out, "\n{}", ack.message)?;

    Ok(())
}

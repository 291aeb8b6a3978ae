//! Fixtures
//!
//! Named pizza configurations stored as YAML, e.g. `fixtures/pizzas/hawaiian.yml`:
//!
//! ```yaml
//! size: medium
//! toppings:
//!   pineapple: all
//!   pepperoni: left
//! ```

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    pizza::PizzaConfiguration, placement::ToppingPlacement, sizes::Size, toppings::Topping,
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}

/// Pizza as written in a fixture file
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PizzaFixture {
    /// Pizza size, small when omitted
    #[serde(default)]
    pub size: Size,

    /// Topping placements, none when omitted
    #[serde(default)]
    pub toppings: FxHashMap<Topping, ToppingPlacement>,
}

impl From<PizzaFixture> for PizzaConfiguration {
    fn from(fixture: PizzaFixture) -> Self {
        PizzaConfiguration::new(fixture.toppings, fixture.size)
    }
}

/// Parse a pizza configuration from YAML text.
///
/// # Errors
///
/// Returns [`FixtureError::Yaml`] if the text is not a valid pizza fixture.
pub fn parse_pizza(contents: &str) -> Result<PizzaConfiguration, FixtureError> {
    let fixture: PizzaFixture = serde_norway::from_str(contents)?;

    Ok(fixture.into())
}

/// Fixture loader
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Create a fixture loader with the default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a fixture loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn pizzas_dir(&self) -> PathBuf {
        self.base_path.join("pizzas")
    }

    /// Load a pizza configuration by name
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_pizza(&self, name: &str) -> Result<PizzaConfiguration, FixtureError> {
        let file_path = self.pizzas_dir().join(format!("{name}.yml"));

        debug!(path = %file_path.display(), "loading pizza fixture");

        let contents = fs::read_to_string(&file_path)?;

        parse_pizza(&contents)
    }

    /// Names of the pizza fixtures available, sorted.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture directory cannot be read.
    pub fn pizza_names(&self) -> Result<Vec<String>, FixtureError> {
        let mut names = Vec::new();

        for entry in fs::read_dir(self.pizzas_dir())? {
            let path = entry?.path();

            if path.extension().is_some_and(|ext| ext == "yml")
                && let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
            {
                names.push(stem.to_string());
            }
        }

        names.sort();

        Ok(names)
    }
}

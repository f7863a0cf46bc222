use std::path::Path;

use rpl_store::seed::DEFAULT_PANTRY;
use rpl_types::{Ingredient, Recipe};
use serde::{Deserialize, Serialize};

use crate::error::{SdkError, SdkResult};

/// Seed data for a new session.
///
/// Loaded from TOML. Only the starting contents are configured; nothing is
/// written back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Pantry entries present when the session starts.
    pub seed_ingredients: Vec<Ingredient>,
    /// Recipes present when the session starts.
    pub seed_recipes: Vec<Recipe>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed_ingredients: DEFAULT_PANTRY.into_iter().map(Ingredient::new).collect(),
            seed_recipes: Vec::new(),
        }
    }
}

impl SessionConfig {
    /// A configuration with nothing seeded.
    pub fn empty() -> Self {
        Self {
            seed_ingredients: Vec::new(),
            seed_recipes: Vec::new(),
        }
    }

    pub fn from_toml_str(s: &str) -> SdkResult<Self> {
        toml::from_str(s).map_err(|e| SdkError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            ingredients = config.seed_ingredients.len(),
            recipes = config.seed_recipes.len(),
            "loaded session config"
        );
        Ok(config)
    }
}

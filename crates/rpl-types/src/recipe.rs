use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::named::Named;
use crate::parse::parse_count;

/// One line of a recipe: an ingredient name and how many units it needs.
///
/// `ingredient` is a weak reference by name into the pantry. Nothing checks
/// that the pantry actually holds an entry with that name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub ingredient: String,
    pub count: u32,
}

impl RecipeIngredient {
    pub fn new(ingredient: impl Into<String>, count: u32) -> Self {
        Self {
            ingredient: ingredient.into(),
            count,
        }
    }
}

impl fmt::Display for RecipeIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ingredient, self.count)
    }
}

/// Parses `name:count`, or a bare `name` meaning a count of one.
impl FromStr for RecipeIngredient {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, count) = match s.rsplit_once(':') {
            Some((name, count)) => {
                let count = parse_count(count).map_err(|e| TypeError::InvalidRecipeIngredient {
                    input: s.to_string(),
                    reason: e.to_string(),
                })?;
                (name.trim(), count)
            }
            None => (s.trim(), 1),
        };
        if name.is_empty() {
            return Err(TypeError::InvalidRecipeIngredient {
                input: s.to_string(),
                reason: "missing ingredient name".into(),
            });
        }
        Ok(Self::new(name, count))
    }
}

/// A named recipe.
///
/// The name is fixed at construction. The ingredient list is replaced as a
/// whole on edit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipe {
    name: String,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

impl Recipe {
    /// Create a recipe with no ingredients.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_ingredients(name, Vec::new())
    }

    pub fn with_ingredients(name: impl Into<String>, ingredients: Vec<RecipeIngredient>) -> Self {
        Self {
            name: name.into(),
            ingredients,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Recipe {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Recipe {{ name: {}, ingredients: [", self.name)?;
        for (i, line) in self.ingredients.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{line}")?;
        }
        write!(f, "] }}")
    }
}

use rpl_ctx::CtxBinding;
use rpl_store::{IngredientStore, RecipeStore, Store};
use rpl_types::{Ingredient, NaiveDate, Recipe, RecipeIngredient};

use crate::config::SessionConfig;
use crate::error::{EntityKind, SdkError, SdkResult};

/// Result of an add action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// An entry with the same name already exists; nothing changed.
    Duplicate,
}

impl AddOutcome {
    pub fn is_added(self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

impl From<bool> for AddOutcome {
    fn from(added: bool) -> Self {
        if added {
            AddOutcome::Added
        } else {
            AddOutcome::Duplicate
        }
    }
}

/// One user's working state: the pantry and the recipe book.
pub struct Session {
    ingredients: CtxBinding<IngredientStore>,
    recipes: CtxBinding<RecipeStore>,
}

impl Session {
    /// Start a session seeded from `config`.
    pub fn new(config: SessionConfig) -> Self {
        let ingredients = Store::from_items(config.seed_ingredients);
        let recipes = Store::from_items(config.seed_recipes);
        tracing::info!(
            ingredients = ingredients.len(),
            recipes = recipes.len(),
            "session started"
        );
        Self {
            ingredients: CtxBinding::mount(ingredients),
            recipes: CtxBinding::mount(recipes),
        }
    }

    pub fn ingredients(&self) -> &CtxBinding<IngredientStore> {
        &self.ingredients
    }

    pub fn recipes(&self) -> &CtxBinding<RecipeStore> {
        &self.recipes
    }

    // ---- Pantry ----

    pub fn list_ingredients(&self) -> Vec<Ingredient> {
        self.ingredients.access(|store| store.all().cloned().collect())
    }

    pub fn ingredient(&self, name: &str) -> Option<Ingredient> {
        self.ingredients.access(|store| store.get_by_name(name).cloned())
    }

    pub fn add_ingredient(&self, ingredient: Ingredient) -> SdkResult<AddOutcome> {
        tracing::info!(name = ingredient.name(), "adding ingredient");
        let outcome = self.ingredients.update(|draft| draft.add(ingredient))?;
        Ok(outcome.into())
    }

    /// Replace the count and expiry of an existing ingredient.
    pub fn edit_ingredient(
        &self,
        name: &str,
        count: u32,
        expires: Option<NaiveDate>,
    ) -> SdkResult<()> {
        let found = self.ingredients.update(|draft| match draft.get_by_name_mut(name) {
            Some(existing) => {
                existing.count = count;
                existing.expires = expires;
                true
            }
            None => false,
        })?;
        if !found {
            return Err(not_found(EntityKind::Ingredient, name));
        }
        tracing::info!(name, count, "edited ingredient");
        Ok(())
    }

    /// Returns `false` if no ingredient had that name.
    pub fn remove_ingredient(&self, name: &str) -> SdkResult<bool> {
        let removed = self.ingredients.update(|draft| draft.remove_by_name(name))?;
        Ok(removed)
    }

    // ---- Recipes ----

    pub fn list_recipes(&self) -> Vec<Recipe> {
        self.recipes.access(|store| store.all().cloned().collect())
    }

    pub fn recipe(&self, name: &str) -> Option<Recipe> {
        self.recipes.access(|store| store.get_by_name(name).cloned())
    }

    pub fn add_recipe(&self, recipe: Recipe) -> SdkResult<AddOutcome> {
        tracing::info!(name = recipe.name(), "adding recipe");
        let outcome = self.recipes.update(|draft| draft.add(recipe))?;
        Ok(outcome.into())
    }

    /// Replace the ingredient list of an existing recipe.
    pub fn edit_recipe(&self, name: &str, ingredients: Vec<RecipeIngredient>) -> SdkResult<()> {
        let found = self.recipes.update(|draft| match draft.get_by_name_mut(name) {
            Some(existing) => {
                existing.ingredients = ingredients;
                true
            }
            None => false,
        })?;
        if !found {
            return Err(not_found(EntityKind::Recipe, name));
        }
        tracing::info!(name, "edited recipe");
        Ok(())
    }

    /// Returns `false` if no recipe had that name.
    pub fn remove_recipe(&self, name: &str) -> SdkResult<bool> {
        let removed = self.recipes.update(|draft| draft.remove_by_name(name))?;
        Ok(removed)
    }

    /// Lines of `recipe_name` whose ingredient has no pantry entry.
    pub fn missing_ingredients(&self, recipe_name: &str) -> SdkResult<Vec<RecipeIngredient>> {
        let recipe = self
            .recipe(recipe_name)
            .ok_or_else(|| not_found(EntityKind::Recipe, recipe_name))?;
        let pantry = self.ingredients.current().snapshot();
        Ok(recipe
            .ingredients
            .into_iter()
            .filter(|line| !pantry.contains(&line.ingredient))
            .collect())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

fn not_found(kind: EntityKind, name: &str) -> SdkError {
    SdkError::NotFound {
        kind,
        name: name.to_string(),
    }
}

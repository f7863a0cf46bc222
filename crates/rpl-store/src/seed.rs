use rpl_types::{Ingredient, Recipe};

use crate::store::Store;

/// The pantry.
pub type IngredientStore = Store<Ingredient>;

/// The recipe book.
pub type RecipeStore = Store<Recipe>;

/// Names of the ingredients every new pantry starts with.
pub const DEFAULT_PANTRY: [&str; 3] = ["Tomato", "Potato", "Chicken"];

impl Store<Ingredient> {
    /// A pantry holding the default ingredients, each with count 0 and no
    /// expiry.
    pub fn seeded() -> Self {
        DEFAULT_PANTRY.into_iter().map(Ingredient::new).collect()
    }
}

impl Store<Recipe> {
    /// An empty recipe book.
    pub fn seeded() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpl_types::RecipeIngredient;

    #[test]
    fn pantry_seed() {
        let pantry = IngredientStore::seeded();
        let all: Vec<&Ingredient> = pantry.all().collect();
        assert_eq!(
            all,
            vec![
                &Ingredient::new("Tomato"),
                &Ingredient::new("Potato"),
                &Ingredient::new("Chicken"),
            ]
        );
    }

    #[test]
    fn pantry_scenario() {
        let mut pantry = IngredientStore::seeded();

        let potato = pantry.get_by_name("Potato").expect("seeded");
        assert_eq!(potato.count, 0);

        let before = pantry.clone();
        assert!(!pantry.add(Ingredient::new("Tomato").with_count(5)));
        assert_eq!(pantry, before);

        assert!(pantry.add(Ingredient::new("Rice").with_count(2)));
        let names: Vec<&str> = pantry.all().map(Ingredient::name).collect();
        assert_eq!(names, vec!["Tomato", "Potato", "Chicken", "Rice"]);
    }

    #[test]
    fn recipe_scenario() {
        let mut book = RecipeStore::seeded();
        assert!(book.is_empty());

        assert!(book.add(Recipe::with_ingredients(
            "Soup",
            vec![RecipeIngredient::new("Tomato", 2)],
        )));
        assert_eq!(book.get_by_name("Soup").unwrap().ingredients.len(), 1);

        assert!(book.remove(&Recipe::new("Soup")));
        assert!(book.get_by_name("Soup").is_none());
    }
}

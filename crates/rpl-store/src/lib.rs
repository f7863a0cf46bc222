//! Name-keyed ordered stores for Reciplanner.
//!
//! A [`Store`] holds items in insertion order (which is also display order)
//! and guarantees that no two items share a name. The same generic store
//! backs both the pantry and the recipe book:
//!
//! - [`IngredientStore`] -- seeded with Tomato, Potato and Chicken
//! - [`RecipeStore`] -- seeded empty
//!
//! # Design Rules
//!
//! 1. `add` never overwrites: a duplicate name is rejected with `false`.
//! 2. `remove` and `get_by_name` never fail; a missing name yields `false`
//!    or `None`.
//! 3. Items are shared behind `Arc`, so cloning a store is cheap and an edit
//!    through [`Store::get_by_name_mut`] copies only the edited item.
//! 4. Names are immutable once an item is stored.

pub mod seed;
pub mod store;

pub use seed::{IngredientStore, RecipeStore};
pub use store::Store;

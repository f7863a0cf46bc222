//! Entity types for Reciplanner.
//!
//! Every other Reciplanner crate depends on `rpl-types`. The entities are
//! plain values: stores and contexts own them, and edits happen on a draft
//! copy rather than in place.
//!
//! # Key Types
//!
//! - [`Ingredient`] -- Pantry entry keyed by name, with a count and optional expiry
//! - [`Recipe`] -- Named, ordered list of [`RecipeIngredient`] lines
//! - [`RecipeIngredient`] -- Weak name reference into the pantry plus a count
//! - [`Named`] -- The uniqueness key shared by everything a store holds
//!
//! The [`parse`] module turns user-entered text into entity fields.

pub mod error;
pub mod ingredient;
pub mod named;
pub mod parse;
pub mod recipe;

pub use error::TypeError;
pub use ingredient::Ingredient;
pub use named::Named;
pub use parse::{parse_count, parse_expiry, parse_recipe_ingredients};
pub use recipe::{Recipe, RecipeIngredient};

/// Calendar date used for ingredient expiry.
pub use chrono::NaiveDate;

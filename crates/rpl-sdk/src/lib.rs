//! Session API for Reciplanner.
//!
//! A [`Session`] owns the pantry and the recipe book, each behind a
//! copy-on-write context, and exposes the actions a front end performs on
//! them: add, edit, remove and look up. Front ends hold a session explicitly;
//! there is no process-wide default instance.

pub mod config;
pub mod error;
pub mod session;

pub use config::SessionConfig;
pub use error::{EntityKind, SdkError, SdkResult};
pub use session::{AddOutcome, Session};

// Re-export key types
pub use rpl_ctx::{CtxBinding, CtxError, ImmerCtx};
pub use rpl_store::{IngredientStore, RecipeStore, Store};
pub use rpl_types::{Ingredient, NaiveDate, Named, Recipe, RecipeIngredient};

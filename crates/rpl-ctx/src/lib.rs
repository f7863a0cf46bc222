//! Copy-on-write state contexts for Reciplanner.
//!
//! An [`ImmerCtx`] wraps one immutable snapshot of a value. Reads go through
//! [`ImmerCtx::access`]. Writes go through [`ImmerCtx::update`], which runs a
//! mutator against a draft copy and hands a brand-new context wrapping the
//! result to the publish hook. The old snapshot is never touched, so anything
//! still holding it keeps seeing the pre-update value.
//!
//! [`CtxBinding`] is the host side of that contract: it owns the
//! authoritative context, installs the publish hook, and notifies
//! subscribers whenever a new snapshot is published.
//!
//! Contexts are single-threaded (`Rc`-based hooks). Snapshots themselves are
//! `Arc`s and can be handed to other threads when `T: Send + Sync`.

pub mod binding;
pub mod ctx;
pub mod error;

pub use binding::CtxBinding;
pub use ctx::{ImmerCtx, Updater};
pub use error::{CtxError, CtxResult};

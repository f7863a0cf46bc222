use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::{CtxError, CtxResult};

/// Publish hook. Receives the context wrapping each newly computed snapshot.
pub type Updater<T> = Rc<dyn Fn(ImmerCtx<T>)>;

/// One immutable snapshot of `T` plus the hook that publishes its successors.
///
/// Cloning a context is cheap: both clones point at the same snapshot and the
/// same hook.
pub struct ImmerCtx<T> {
    inner: Arc<T>,
    updater: Option<Updater<T>>,
}

impl<T> ImmerCtx<T> {
    /// Wrap `inner` as the first snapshot. No publish hook is assigned yet.
    pub fn new(inner: T) -> Self {
        Self {
            inner: Arc::new(inner),
            updater: None,
        }
    }

    /// Apply a read-only function to the current snapshot.
    pub fn access<U>(&self, read: impl FnOnce(&T) -> U) -> U {
        read(&self.inner)
    }

    /// Shared handle to the current snapshot.
    pub fn snapshot(&self) -> Arc<T> {
        Arc::clone(&self.inner)
    }

    /// Assign the publish hook, replacing any previous one.
    ///
    /// Must happen before the first call to [`update`](Self::update).
    pub fn set_updater(&mut self, updater: impl Fn(ImmerCtx<T>) + 'static) {
        self.updater = Some(Rc::new(updater));
    }

    pub fn has_updater(&self) -> bool {
        self.updater.is_some()
    }

    /// Returns `true` if both contexts wrap the very same snapshot.
    #[doc(hidden)]
    pub fn is_same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone> ImmerCtx<T> {
    /// Compute the next snapshot and publish it.
    ///
    /// `mutate` runs against a draft cloned from the current snapshot. The
    /// draft becomes the next snapshot, wrapped in a new context that keeps
    /// this context's hook, and that context is passed to the hook. This
    /// context and every snapshot handle taken from it stay unchanged.
    ///
    /// Returns whatever `mutate` returns. Fails with
    /// [`CtxError::UpdaterUnset`] before running `mutate` if no hook is set.
    pub fn update<R>(&self, mutate: impl FnOnce(&mut T) -> R) -> CtxResult<R> {
        let updater = self.updater.as_ref().ok_or(CtxError::UpdaterUnset)?;

        let mut draft = T::clone(&self.inner);
        let result = mutate(&mut draft);

        let next = ImmerCtx {
            inner: Arc::new(draft),
            updater: Some(Rc::clone(updater)),
        };
        updater(next);
        Ok(result)
    }
}

impl<T> Clone for ImmerCtx<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            updater: self.updater.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ImmerCtx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImmerCtx")
            .field("inner", &self.inner)
            .field("has_updater", &self.has_updater())
            .finish()
    }
}

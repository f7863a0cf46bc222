//! Host side of the publish contract.
//!
//! A [`CtxBinding`] owns the authoritative [`ImmerCtx`] for one value. On
//! mount it assigns the context's publish hook; every published context then
//! replaces the authoritative one, bumps the revision, and is passed to each
//! subscriber. Readers that cloned the previous context keep their snapshot.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::ctx::ImmerCtx;
use crate::error::CtxResult;

type Subscriber<T> = Rc<dyn Fn(&ImmerCtx<T>)>;

struct Slot<T> {
    current: RefCell<ImmerCtx<T>>,
    revision: Cell<u64>,
    subscribers: RefCell<Vec<Subscriber<T>>>,
}

/// Owner of the authoritative context for one value.
///
/// Cloning a binding yields another handle to the same slot.
pub struct CtxBinding<T> {
    slot: Rc<Slot<T>>,
}

impl<T: 'static> CtxBinding<T> {
    /// Wrap `init` in a context and bind its publish hook to this binding.
    pub fn mount(init: T) -> Self {
        let slot = Rc::new(Slot {
            current: RefCell::new(ImmerCtx::new(init)),
            revision: Cell::new(0),
            subscribers: RefCell::new(Vec::new()),
        });

        // The hook lives inside the slot it writes to, so it holds a weak ref.
        let weak: Weak<Slot<T>> = Rc::downgrade(&slot);
        slot.current.borrow_mut().set_updater(move |next| {
            if let Some(slot) = weak.upgrade() {
                slot.publish(next);
            }
        });

        Self { slot }
    }
}

impl<T> CtxBinding<T> {
    /// The authoritative context, as a render would see it.
    pub fn current(&self) -> ImmerCtx<T> {
        self.slot.current.borrow().clone()
    }

    /// Read from the authoritative snapshot.
    pub fn access<U>(&self, read: impl FnOnce(&T) -> U) -> U {
        self.current().access(read)
    }

    /// Number of snapshots published since mount.
    pub fn revision(&self) -> u64 {
        self.slot.revision.get()
    }

    /// Call `listener` with every context published from now on.
    ///
    /// Listeners may read, update and subscribe through the binding while
    /// being notified. A listener subscribed during a notification is first
    /// called for the next publish.
    pub fn subscribe(&self, listener: impl Fn(&ImmerCtx<T>) + 'static) {
        self.slot.subscribers.borrow_mut().push(Rc::new(listener));
    }
}

impl<T: Clone> CtxBinding<T> {
    /// Update the authoritative context. See [`ImmerCtx::update`].
    pub fn update<R>(&self, mutate: impl FnOnce(&mut T) -> R) -> CtxResult<R> {
        self.current().update(mutate)
    }
}

impl<T> Slot<T> {
    fn publish(&self, next: ImmerCtx<T>) {
        *self.current.borrow_mut() = next.clone();
        let revision = self.revision.get() + 1;
        self.revision.set(revision);
        tracing::trace!(revision, "published snapshot");

        // Listeners may subscribe or publish while being notified, so iterate
        // over a copy. A nested publish notifies everyone with the newer
        // context; the rest of this round is then stale and skipped.
        let listeners: Vec<Subscriber<T>> = self.subscribers.borrow().clone();
        for listener in listeners {
            if self.revision.get() != revision {
                break;
            }
            listener(&next);
        }
    }
}

impl<T> Clone for CtxBinding<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Rc::clone(&self.slot),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CtxBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CtxBinding")
            .field("current", &*self.slot.current.borrow())
            .field("revision", &self.revision())
            .finish()
    }
}

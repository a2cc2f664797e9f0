//! Registry of cleanup actions guaranteed to run exactly once.
//!
//! Every exit path of a delegated navigation (response, timeout, forced
//! close) funnels through one [`DisposerRegistry::run`] call, so a
//! lexically-scoped resource such as an armed timer is always released.

use std::panic::{AssertUnwindSafe, catch_unwind};

use parking_lot::Mutex;

type Disposer = Box<dyn FnOnce() + Send>;

/// An ordered set of idempotent cleanup callbacks.
///
/// Actions are executed at most once: [`run`](Self::run) drains the registry
/// and a second call finds it empty. A panicking action is caught and logged
/// so the remaining actions still execute; cleanup must never mask the
/// settlement that triggered it.
#[derive(Default)]
pub struct DisposerRegistry {
    actions: Mutex<Vec<Disposer>>,
}

impl DisposerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a cleanup action.
    ///
    /// Duplicates are tolerated; each registered entry runs once.
    pub fn add(&self, action: impl FnOnce() + Send + 'static) {
        self.actions.lock().push(Box::new(action));
    }

    /// Returns the number of pending actions.
    pub fn len(&self) -> usize {
        self.actions.lock().len()
    }

    /// Returns `true` when no actions are pending.
    pub fn is_empty(&self) -> bool {
        self.actions.lock().is_empty()
    }

    /// Executes and drains every registered action.
    ///
    /// Calling again without intervening [`add`](Self::add)s is a no-op.
    pub fn run(&self) {
        let actions = std::mem::take(&mut *self.actions.lock());
        for action in actions {
            if catch_unwind(AssertUnwindSafe(action)).is_err() {
                tracing::warn!("disposer panicked, continuing with remaining disposers");
            }
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Ordered registry of zero-argument state change callbacks.

use std::sync::Arc;

use parking_lot::RwLock;

/// Type alias for state change callbacks.
type StateCallback = Arc<dyn Fn() + Send + Sync>;

/// Ordered list of callbacks notified on every state change.
///
/// Callbacks are kept for the lifetime of the registry; there is no removal.
/// [`call`](Self::call) invokes them synchronously, in registration order.
///
/// # Reentrancy
///
/// The internal lock is released before any callback runs, so a callback may
/// read the owning state or register further callbacks. A callback added
/// during a dispatch round is first invoked on the following round.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use fan_core::CallbackRegistry;
///
/// let registry = CallbackRegistry::new();
/// let calls = Arc::new(AtomicU32::new(0));
/// let calls_clone = calls.clone();
/// registry.add(move || {
///     calls_clone.fetch_add(1, Ordering::SeqCst);
/// });
///
/// registry.call();
/// registry.call();
/// assert_eq!(calls.load(Ordering::SeqCst), 2);
/// ```
pub struct CallbackRegistry {
    callbacks: RwLock<Vec<StateCallback>>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            callbacks: RwLock::new(Vec::new()),
        }
    }

    /// Appends a callback to the end of the list.
    pub fn add<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.callbacks.write().push(Arc::new(callback));
    }

    /// Invokes every registered callback, in registration order.
    pub fn call(&self) {
        // Snapshot so no lock is held while user code runs.
        let callbacks = self.callbacks.read().clone();
        for callback in &callbacks {
            callback();
        }
    }

    /// Returns the number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.read().len()
    }

    /// Returns `true` if there are no registered callbacks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.read().is_empty()
    }
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callback_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn registry_new_is_empty() {
        let registry = CallbackRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn call_without_callbacks_is_noop() {
        CallbackRegistry::new().call();
    }

    #[test]
    fn every_call_invokes_each_callback_once() {
        let registry = CallbackRegistry::new();
        let counter1 = Arc::new(AtomicU32::new(0));
        let counter2 = Arc::new(AtomicU32::new(0));
        let c1 = counter1.clone();
        let c2 = counter2.clone();

        registry.add(move || {
            c1.fetch_add(1, Ordering::SeqCst);
        });
        registry.add(move || {
            c2.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(registry.len(), 2);

        registry.call();
        registry.call();
        registry.call();

        assert_eq!(counter1.load(Ordering::SeqCst), 3);
        assert_eq!(counter2.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn callbacks_run_in_registration_order() {
        let registry = CallbackRegistry::new();
        let order = Arc::new(RwLock::new(Vec::new()));

        for tag in ["frontend", "backend", "logger"] {
            let order = order.clone();
            registry.add(move || order.write().push(tag));
        }

        registry.call();
        assert_eq!(*order.read(), vec!["frontend", "backend", "logger"]);
    }

    #[test]
    fn callback_registered_during_dispatch_runs_next_round() {
        let registry = Arc::new(CallbackRegistry::new());
        let late_calls = Arc::new(AtomicU32::new(0));

        let registry_clone = registry.clone();
        let late_clone = late_calls.clone();
        let armed = Arc::new(AtomicU32::new(0));
        registry.add(move || {
            if armed.fetch_add(1, Ordering::SeqCst) == 0 {
                let late = late_clone.clone();
                registry_clone.add(move || {
                    late.fetch_add(1, Ordering::SeqCst);
                });
            }
        });

        registry.call();
        assert_eq!(late_calls.load(Ordering::SeqCst), 0);
        assert_eq!(registry.len(), 2);

        registry.call();
        assert_eq!(late_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn registry_debug() {
        let registry = CallbackRegistry::new();
        registry.add(|| {});

        let debug = format!("{registry:?}");
        assert!(debug.contains("CallbackRegistry"));
        assert!(debug.contains("callback_count: 1"));
    }
}

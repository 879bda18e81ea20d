//! Tracked status-change subscriptions
//!
//! The gateway is the sole owner and mutator of its registry, so there is
//! no lock here: `&mut` access is the synchronization.

use std::collections::HashMap;

use ipc_transport::CallbackId;

use crate::status::StatusCallback;

/// Outcome of tearing every subscription down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeardownReport {
    pub attempted: usize,
    pub failed: usize,
}

/// Set of callbacks successfully registered with the remote side, keyed by
/// identity
#[derive(Debug, Default)]
pub struct SubscriptionRegistry {
    tracked: HashMap<CallbackId, StatusCallback>,
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `callback`; returns false if its identity was already tracked
    pub fn insert(&mut self, callback: &StatusCallback) -> bool {
        if self.tracked.contains_key(&callback.id()) {
            return false;
        }
        self.tracked.insert(callback.id(), callback.clone());
        true
    }

    /// Stop tracking `id`; returns whether it was tracked
    pub fn remove(&mut self, id: CallbackId) -> bool {
        self.tracked.remove(&id).is_some()
    }

    pub fn contains(&self, id: CallbackId) -> bool {
        self.tracked.contains_key(&id)
    }

    pub fn get(&self, id: CallbackId) -> Option<&StatusCallback> {
        self.tracked.get(&id)
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    /// Offer every tracked callback to `unsubscribe` once, then clear
    ///
    /// `unsubscribe` reports success; a failure is counted and the sweep
    /// moves on. The set is empty afterwards whatever the outcomes were.
    pub fn teardown_all<F>(&mut self, mut unsubscribe: F) -> TeardownReport
    where
        F: FnMut(&StatusCallback) -> bool,
    {
        let mut report = TeardownReport::default();

        for callback in self.tracked.values() {
            report.attempted += 1;
            if !unsubscribe(callback) {
                report.failed += 1;
                tracing::warn!(callback = %callback.id(), "status callback teardown failed");
            }
        }

        self.tracked.clear();
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut registry = SubscriptionRegistry::new();
        let cb = StatusCallback::new(|_| {});

        assert!(registry.insert(&cb));
        assert!(!registry.insert(&cb));
        assert!(!registry.insert(&cb.clone()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut registry = SubscriptionRegistry::new();
        let cb = StatusCallback::new(|_| {});
        registry.insert(&cb);

        assert!(registry.remove(cb.id()));
        assert!(!registry.remove(cb.id()));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_teardown_continues_past_failures() {
        let mut registry = SubscriptionRegistry::new();
        let callbacks: Vec<_> = (0..4).map(|_| StatusCallback::new(|_| {})).collect();
        for cb in &callbacks {
            registry.insert(cb);
        }

        let mut seen = Vec::new();
        let mut first = true;
        let report = registry.teardown_all(|cb| {
            seen.push(cb.id());
            // fail only the first attempt
            !std::mem::replace(&mut first, false)
        });

        assert_eq!(report, TeardownReport { attempted: 4, failed: 1 });
        assert_eq!(seen.len(), 4);
        for cb in &callbacks {
            assert!(seen.contains(&cb.id()));
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn test_teardown_of_empty_registry() {
        let mut registry = SubscriptionRegistry::new();
        let report = registry.teardown_all(|_| panic!("nothing to tear down"));
        assert_eq!(report, TeardownReport::default());
    }
}

//! Generation-counted view-model snapshots.
//!
//! Every view-model in this crate is a wholesale snapshot of server state:
//! a load or mutation fetches the full latest value and substitutes it,
//! never merging. Because loads are asynchronous, a response can land
//! after a newer load for the same resource has already been issued (the
//! user navigated again, or a mutation raced a reload). A plain
//! last-write-wins store would let that stale response clobber the newer
//! value.
//!
//! [`Snapshot`] closes that hole with a generation counter: callers call
//! [`Snapshot::begin`] before the fetch to obtain a [`LoadToken`], and
//! [`Snapshot::commit`] with the token after it. A commit only applies
//! while its token is still the latest one issued; anything older is
//! discarded. [`Snapshot::clear`] also bumps the generation, so a logout
//! or checkout invalidates every load still in flight.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use bramble_core::UserId;

use crate::api::types::Cart;

/// Token identifying one load attempt against a [`Snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken(u64);

struct SnapshotInner<T> {
    generation: u64,
    value: Option<T>,
}

/// A shared, replace-wholesale view-model slot.
///
/// Cloneable handle; all clones observe the same value and generation.
pub struct Snapshot<T> {
    inner: Arc<RwLock<SnapshotInner<T>>>,
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Snapshot<T> {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(SnapshotInner {
                generation: 0,
                value: None,
            })),
        }
    }

    /// Start a load: bump the generation and return the token a later
    /// [`commit`](Self::commit) must present.
    ///
    /// Beginning a newer load invalidates every outstanding token.
    pub fn begin(&self) -> LoadToken {
        let mut inner = self.write();
        inner.generation += 1;
        LoadToken(inner.generation)
    }

    /// Apply a load result if `token` is still the latest issued.
    ///
    /// Returns `true` when the value was applied, `false` when the result
    /// was stale and discarded.
    pub fn commit(&self, token: LoadToken, value: T) -> bool {
        let mut inner = self.write();
        if inner.generation != token.0 {
            return false;
        }
        inner.value = Some(value);
        true
    }

    /// Drop the held value and invalidate in-flight loads.
    pub fn clear(&self) {
        let mut inner = self.write();
        inner.generation += 1;
        inner.value = None;
    }

    /// Whether a value is currently held.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.read().value.is_some()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, SnapshotInner<T>> {
        // Snapshot values are plain owned data; a poisoned lock carries
        // no torn state worth dying over.
        self.inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, SnapshotInner<T>> {
        self.inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<T: Clone> Snapshot<T> {
    /// The current value, if any.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        self.read().value.clone()
    }
}

// =============================================================================
// CartRegistry
// =============================================================================

/// Per-user cart snapshots.
///
/// The cart view-model exists only while a session does; [`clear`]
/// (called on logout and after checkout) empties the user's slot and
/// invalidates any cart load still in flight for them.
///
/// [`clear`]: CartRegistry::clear
#[derive(Default)]
pub struct CartRegistry {
    inner: RwLock<HashMap<UserId, Snapshot<Cart>>>,
}

impl CartRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The snapshot slot for a user, created on first use.
    pub fn for_user(&self, user_id: UserId) -> Snapshot<Cart> {
        let mut map = self
            .inner
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        map.entry(user_id).or_default().clone()
    }

    /// Clear the user's cart snapshot.
    pub fn clear(&self, user_id: UserId) {
        let map = self
            .inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(snapshot) = map.get(&user_id) {
            snapshot.clear();
        }
    }

    /// Cart badge count for a user, `0` when nothing is loaded.
    #[must_use]
    pub fn count(&self, user_id: UserId) -> u32 {
        let map = self
            .inner
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        map.get(&user_id)
            .and_then(Snapshot::get)
            .map_or(0, |cart| cart.item_count)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_applies_latest_load() {
        let snapshot = Snapshot::new();
        let token = snapshot.begin();
        assert!(snapshot.commit(token, vec![1, 2, 3]));
        assert_eq!(snapshot.get(), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_stale_commit_is_discarded() {
        let snapshot = Snapshot::new();

        // First load starts, then a second load starts before it lands.
        let stale = snapshot.begin();
        let current = snapshot.begin();

        assert!(snapshot.commit(current, vec!["fresh"]));
        assert!(!snapshot.commit(stale, vec!["stale"]));
        assert_eq!(snapshot.get(), Some(vec!["fresh"]));
    }

    #[test]
    fn test_stale_commit_cannot_resurrect_cleared_value() {
        let snapshot = Snapshot::new();
        let token = snapshot.begin();

        // Cleared (logout) while the load is still in flight.
        snapshot.clear();

        assert!(!snapshot.commit(token, 42));
        assert_eq!(snapshot.get(), None);
        assert!(!snapshot.is_loaded());
    }

    #[test]
    fn test_clones_share_state() {
        let snapshot = Snapshot::new();
        let other = snapshot.clone();

        let token = snapshot.begin();
        assert!(other.commit(token, "shared"));
        assert_eq!(snapshot.get(), Some("shared"));
    }

    #[test]
    fn test_registry_isolates_users() {
        let registry = CartRegistry::new();
        let alice = UserId::new(1);
        let bob = UserId::new(2);

        let slot = registry.for_user(alice);
        let token = slot.begin();
        slot.commit(
            token,
            Cart {
                items: vec![],
                item_count: 3,
                total: bramble_core::Price::zero(),
            },
        );

        assert_eq!(registry.count(alice), 3);
        assert_eq!(registry.count(bob), 0);

        registry.clear(alice);
        assert_eq!(registry.count(alice), 0);
    }

    #[test]
    fn test_registry_clear_invalidates_in_flight_load() {
        let registry = CartRegistry::new();
        let user = UserId::new(7);

        let slot = registry.for_user(user);
        let token = slot.begin();

        registry.clear(user);

        let late = Cart {
            items: vec![],
            item_count: 9,
            total: bramble_core::Price::zero(),
        };
        assert!(!slot.commit(token, late));
        assert_eq!(registry.count(user), 0);
    }
}

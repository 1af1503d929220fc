//! Views
//!
//! Guards against applying a fetch result to a view that has since been
//! navigated away from. Every navigation hands out a [`ViewTicket`]; a result
//! is only accepted while its ticket still matches the displayed view.

use std::{
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Identifier and generation of one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewTicket<K> {
    key: K,
    generation: u64,
}

impl<K> ViewTicket<K> {
    /// The view identifier the fetch was started for.
    pub fn key(&self) -> &K {
        &self.key
    }
}

#[derive(Debug)]
struct GuardState<K> {
    current: Option<K>,
    generation: u64,
}

/// Shared handle tracking which view is currently displayed.
///
/// Clones share the same state, so a view and its pending fetches can each
/// hold one.
pub struct ViewGuard<K> {
    state: Arc<Mutex<GuardState<K>>>,
}

impl<K> ViewGuard<K> {
    /// Create a guard with no view displayed.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(GuardState {
                current: None,
                generation: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GuardState<K>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<K: Clone + PartialEq> ViewGuard<K> {
    /// Display `key`, invalidating every ticket handed out before.
    pub fn navigate(&self, key: K) -> ViewTicket<K> {
        let mut state = self.lock();

        state.generation = state.generation.wrapping_add(1);
        state.current = Some(key.clone());

        ViewTicket {
            key,
            generation: state.generation,
        }
    }

    /// Returns `true` while `ticket` belongs to the displayed view.
    pub fn is_current(&self, ticket: &ViewTicket<K>) -> bool {
        let state = self.lock();

        state.generation == ticket.generation && state.current.as_ref() == Some(&ticket.key)
    }

    /// Pass `value` through if `ticket` is still current, drop it otherwise.
    pub fn accept<T>(&self, ticket: &ViewTicket<K>, value: T) -> Option<T> {
        self.is_current(ticket).then_some(value)
    }

    /// The displayed view identifier, if any.
    pub fn current(&self) -> Option<K> {
        self.lock().current.clone()
    }
}

impl<K> Default for ViewGuard<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for ViewGuard<K> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for ViewGuard<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();

        f.debug_struct("ViewGuard")
            .field("current", &state.current)
            .field("generation", &state.generation)
            .finish()
    }
}

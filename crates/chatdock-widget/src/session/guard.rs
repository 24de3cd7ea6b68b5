//! Busy flag guard.

use std::sync::{Mutex, PoisonError};

use crate::state::SessionState;

/// Clears `is_busy` on drop, so the flag is released on every exit path,
/// including a send future dropped mid-flight.
///
/// Must not be dropped while the state lock is held by the same thread.
pub(crate) struct BusyGuard<'a> {
    state: &'a Mutex<SessionState>,
}

impl<'a> BusyGuard<'a> {
    /// Set `is_busy` if it was clear and run `on_acquire` under the same
    /// lock. Returns `None` if a send is already in flight.
    pub(crate) fn acquire<T>(
        state: &'a Mutex<SessionState>,
        on_acquire: impl FnOnce(&mut SessionState) -> T,
    ) -> Option<(Self, T)> {
        let mut guard = state.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.is_busy {
            return None;
        }
        guard.is_busy = true;
        let value = on_acquire(&mut *guard);
        Some((Self { state }, value))
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_acquire_fails_until_drop() {
        let state = Mutex::new(SessionState::default());
        let (guard, ()) = BusyGuard::acquire(&state, |_| ()).unwrap();
        assert!(state.lock().unwrap().is_busy);
        assert!(BusyGuard::acquire(&state, |_| ()).is_none());

        drop(guard);
        assert!(!state.lock().unwrap().is_busy);
        assert!(BusyGuard::acquire(&state, |_| ()).is_some());
    }

    #[test]
    fn on_acquire_runs_only_when_acquired() {
        let state = Mutex::new(SessionState::default());
        let (_guard, n) = BusyGuard::acquire(&state, |s| {
            s.draft_input.push_str("x");
            1
        })
        .unwrap();
        assert_eq!(n, 1);

        let mut ran = false;
        assert!(BusyGuard::acquire(&state, |_| ran = true).is_none());
        assert!(!ran);
    }
}

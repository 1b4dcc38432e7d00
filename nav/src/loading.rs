//! One-shot loading gate.
//!
//! The host starts a single timer of [`LoadingGate::delay`] at mount and calls
//! [`LoadingGate::fire`] when it elapses. Teardown calls
//! [`LoadingGate::cancel`]; a fire arriving afterwards is ignored.

use std::time::Duration;

use crate::consts::LOADING_DELAY_MS;

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

/// Whether the page has been revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingState {
    #[default]
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingGate {
    state: LoadingState,
    cancelled: bool,
}

impl LoadingGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed reveal delay.
    #[must_use]
    pub fn delay() -> Duration {
        Duration::from_millis(u64::from(LOADING_DELAY_MS))
    }

    #[must_use]
    pub fn state(&self) -> LoadingState {
        self.state
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state == LoadingState::Ready
    }

    /// Timer elapsed. Returns `true` only on the `Loading -> Ready` transition.
    pub fn fire(&mut self) -> bool {
        if self.cancelled || self.is_ready() {
            return false;
        }
        self.state = LoadingState::Ready;
        true
    }

    /// Gate torn down before or after firing.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

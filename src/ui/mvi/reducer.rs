//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the current state and an intent, return the next state.
    ///
    /// Implementations must be pure: no I/O, no logging, no globals.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Transforms state in response to intents.
///
/// The reducer is the only place state transitions happen, and it must
/// stay a pure function: effects live in the flow's controller.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

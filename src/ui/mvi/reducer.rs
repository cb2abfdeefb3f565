use super::intent::Intent;
use super::state::UiState;

/// Transforms state based on intents.
///
/// The only place state transitions happen. Side effects (network, terminal
/// I/O) stay with the caller.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

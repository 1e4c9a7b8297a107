//! Primitives for unidirectional state updates.
//!
//! Screens keep their data in plain state values, describe user actions as
//! intents, and move between states only through pure reducers. Rendering
//! reads state and never mutates it.

/// State held by a screen.
///
/// Cloneable so new values can be derived from old ones, comparable so
/// changes can be detected, and takeable via `Default` when a reducer
/// consumes the previous value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// A user action or system event fed into a reducer.
pub trait Intent: Send + 'static {}

/// Pure transition function: (previous state, intent) -> next state.
///
/// Reducers are the only place state transitions happen, and they may be a
/// partial function over intent kinds: an intent with no reduction rule
/// returns the previous state unchanged.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

//! Model-View-Intent (MVI) primitives for unidirectional data flow.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! The reducer is the only place where state transitions happen; side
//! effects (timers, snapshot writes, binding re-acquisition) are planned
//! from state diffs after the fact, never performed inside a reduce.

/// Marker trait for intent objects: user actions (key presses, button
/// activations) and system events (timer expiry).
pub trait Intent: Send + 'static {}

/// Marker trait for state objects. States are cloned to produce new
/// states and compared to detect which reactions must run.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Pure transition function: `(State, Intent) -> State`.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

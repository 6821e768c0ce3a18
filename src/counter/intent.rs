use crate::ui::mvi::Intent;

/// User actions and system events that mutate the counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterIntent {
    /// Increment button: `count + step`.
    Increment,
    /// Decrement button: `count - step`.
    Decrement,
    /// Arrow-key binding: applies the delta captured when the binding
    /// table was installed, against the latest count.
    AdjustBy(i64),
    /// Reset button: count to 0, history emptied (not re-seeded).
    Reset,
    /// Raw step field contents changed.
    StepInput(String),
    /// The debounced save for the current count completed.
    SaveCompleted,
}

impl Intent for CounterIntent {}

use crate::ui::mvi::UiState;
use std::fmt;

/// Persistence indicator shown next to the counter.
///
/// `Idle` only exists before the first count change; once a save cycle
/// has been armed there is no transition back to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
}

impl fmt::Display for SaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveStatus::Idle => Ok(()),
            SaveStatus::Saving => write!(f, "Saving..."),
            SaveStatus::Saved => write!(f, "Changes saved."),
        }
    }
}

/// Full widget state.
///
/// `history` starts empty; the history recorder appends the initial
/// count on mount, so a freshly mounted widget shows `[0]`. Reset
/// clears it back to empty without re-seeding.
///
/// `step` is the coerced form of `step_input`: `None` when the raw
/// text does not parse as an integer (empty text coerces to 0).
#[derive(Debug, Clone, PartialEq)]
pub struct CounterState {
    pub count: i64,
    pub history: Vec<i64>,
    pub step: Option<i64>,
    pub step_input: String,
    pub status: SaveStatus,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            count: 0,
            history: Vec::new(),
            step: Some(1),
            step_input: "1".to_string(),
            status: SaveStatus::Idle,
        }
    }
}

impl UiState for CounterState {}

impl CounterState {
    pub fn with_step(step: i64) -> Self {
        Self {
            step: Some(step),
            step_input: step.to_string(),
            ..Self::default()
        }
    }
}

use crate::counter::intent::CounterIntent;
use crate::counter::state::{CounterState, SaveStatus};
use crate::ui::mvi::Reducer;

/// Numeric coercion for the step field.
///
/// Empty text coerces to 0; anything that fails to parse as an integer
/// yields `None`, the integer stand-in for a NaN step. Increment and
/// decrement with a `None` step leave the count untouched.
pub fn coerce_step(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0);
    }
    trimmed.parse::<i64>().ok()
}

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increment => match state.step {
                Some(step) => CounterState {
                    count: state.count.wrapping_add(step),
                    ..state
                },
                None => state,
            },
            CounterIntent::Decrement => match state.step {
                Some(step) => CounterState {
                    count: state.count.wrapping_sub(step),
                    ..state
                },
                None => state,
            },
            CounterIntent::AdjustBy(delta) => CounterState {
                count: state.count.wrapping_add(delta),
                ..state
            },
            CounterIntent::Reset => CounterState {
                count: 0,
                history: Vec::new(),
                ..state
            },
            CounterIntent::StepInput(raw) => CounterState {
                step: coerce_step(&raw),
                step_input: raw,
                ..state
            },
            CounterIntent::SaveCompleted => CounterState {
                status: SaveStatus::Saved,
                ..state
            },
        }
    }
}

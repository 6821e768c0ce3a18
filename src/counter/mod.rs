//! Counter domain: state, intents, reducer, and reaction planning.
//!
//! The widget follows the MVI pattern used throughout the UI layer:
//! intents are reduced into a new [`CounterState`], then the app runs
//! the reactions whose watched fields changed, in a fixed order
//! (history recorder, persistence simulator, key re-binding).

mod intent;
mod reactions;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reactions::{plan_reactions, ReactionPlan};
pub use reducer::{coerce_step, CounterReducer};
pub use state::{CounterState, SaveStatus};

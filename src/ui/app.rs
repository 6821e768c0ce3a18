use crossterm::event::KeyCode;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

use crate::config::Config;
use crate::counter::{plan_reactions, CounterIntent, CounterReducer, CounterState, SaveStatus};
use crate::persist::SnapshotStore;
use crate::ui::bindings::{ArrowAction, KeyBindings};
use crate::ui::mvi::Reducer;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Counter,
    StepField,
}

/// Widget driver: owns the counter state, the binding table, and the
/// persistence side of the debounce cycle.
///
/// Intents flow through [`App::dispatch`]: the reducer applies the
/// whole mutation as one batch, then the reactions whose watched
/// fields changed run in fixed order (history recorder, persistence
/// simulator, key re-binding). Timer threads are not spawned here; the
/// runtime drains [`App::drain_armed_saves`] so tests can drive the
/// debounce cycle synchronously.
pub struct App {
    state: CounterState,
    focus: Focus,
    should_quit: bool,
    bindings: KeyBindings,
    store: SnapshotStore,
    save_delay: Duration,
    save_generation: u64,
    armed_saves: Vec<u64>,
}

impl App {
    pub fn new(config: &Config, store: SnapshotStore) -> Self {
        Self {
            state: CounterState::with_step(config.initial_step),
            focus: Focus::Counter,
            should_quit: false,
            bindings: KeyBindings::new(),
            store,
            save_delay: Duration::from_millis(config.save_delay_ms),
            save_generation: 0,
            armed_saves: Vec::new(),
        }
    }

    /// Run the mount lifecycle: the initial count counts as a change,
    /// so the history recorder appends it (yielding `[0]`) and the
    /// first save cycle is armed. The binding table is acquired last,
    /// matching the fixed reaction order.
    pub fn mount(&mut self) {
        self.state.history.push(self.state.count);
        self.arm_save();
        self.bindings.acquire(self.state.step);
    }

    /// Release the binding table and forget any armed-but-undrained
    /// save. A timer already in flight dies with the event channel.
    pub fn unmount(&mut self) {
        self.bindings.release();
        self.armed_saves.clear();
    }

    pub fn state(&self) -> &CounterState {
        &self.state
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_step_field(&mut self) {
        self.focus = Focus::StepField;
    }

    pub fn focus_counter(&mut self) {
        self.focus = Focus::Counter;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn save_delay(&self) -> Duration {
        self.save_delay
    }

    /// Generation of the most recently armed save cycle.
    pub fn save_generation(&self) -> u64 {
        self.save_generation
    }

    /// Whether a binding table is currently installed.
    pub fn bindings_active(&self) -> bool {
        self.bindings.is_active()
    }

    /// How many times the binding table has been (re)acquired.
    pub fn binding_generation(&self) -> u64 {
        self.bindings.generation()
    }

    /// Apply an intent and run the reactions its state diff calls for.
    pub fn dispatch(&mut self, intent: CounterIntent) {
        let prev = self.state.clone();
        self.state = CounterReducer::reduce(prev.clone(), intent.clone());

        if matches!(intent, CounterIntent::Reset) {
            // Reset removes the snapshot key outright. The count change
            // below still re-arms a save cycle that will rewrite the
            // key with 0 after the delay; that race is inherited
            // behavior and deliberately not patched here.
            if let Err(err) = self.store.remove_count() {
                warn!(error = %err, "failed to remove snapshot key on reset");
            }
        }

        let plan = plan_reactions(&prev, &self.state, &intent);
        if plan.record_history {
            self.state.history.push(self.state.count);
        }
        if plan.arm_save {
            self.arm_save();
        }
        if plan.rebind_keys {
            self.bindings.acquire(self.state.step);
        }
    }

    /// Route an arrow key through the binding table. Returns false if
    /// the key resolved to nothing (wrong key, no table, inert step).
    pub fn on_arrow(&mut self, code: KeyCode) -> bool {
        let Some(action) = self.bindings.resolve(code) else {
            return false;
        };
        match action {
            ArrowAction::Raise(step) => self.dispatch(CounterIntent::AdjustBy(step)),
            ArrowAction::Lower(step) => self.dispatch(CounterIntent::AdjustBy(step.wrapping_neg())),
        }
        true
    }

    /// A debounce timer came back. Stale generations lost their race
    /// to a newer count change and are dropped without a trace in
    /// state; only the newest timer may complete the save.
    pub fn on_save_elapsed(&mut self, generation: u64) {
        if generation != self.save_generation {
            trace!(
                generation,
                current = self.save_generation,
                "stale save timer ignored"
            );
            return;
        }
        if self.state.status != SaveStatus::Saving {
            return;
        }

        if let Err(err) = self.store.write_count(self.state.count) {
            // The simulated save has no failure path; file trouble is
            // logged and the status still advances.
            warn!(error = %err, "failed to write snapshot");
        }
        info!(value = self.state.count, "snapshot saved");
        self.dispatch(CounterIntent::SaveCompleted);
    }

    /// Save generations armed since the last drain. The runtime turns
    /// each into a timer thread; tests feed them straight back into
    /// [`App::on_save_elapsed`].
    pub fn drain_armed_saves(&mut self) -> Vec<u64> {
        std::mem::take(&mut self.armed_saves)
    }

    pub fn step_field_push(&mut self, c: char) {
        let mut raw = self.state.step_input.clone();
        raw.push(c);
        self.dispatch(CounterIntent::StepInput(raw));
    }

    pub fn step_field_backspace(&mut self) {
        let mut raw = self.state.step_input.clone();
        raw.pop();
        self.dispatch(CounterIntent::StepInput(raw));
    }

    fn arm_save(&mut self) {
        self.state.status = SaveStatus::Saving;
        self.save_generation += 1;
        self.armed_saves.push(self.save_generation);
        debug!(generation = self.save_generation, "save cycle armed");
    }
}

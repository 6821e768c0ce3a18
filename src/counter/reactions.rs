use crate::counter::intent::CounterIntent;
use crate::counter::state::CounterState;

/// Which reactions must run after a reduce, in their fixed order:
/// history recorder, then persistence simulator, then key re-binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReactionPlan {
    /// Append the new count to the history log.
    pub record_history: bool,
    /// Set status to Saving and arm a fresh debounce generation.
    pub arm_save: bool,
    /// Release the active binding table and acquire one for the new step.
    pub rebind_keys: bool,
}

/// Compare the state before and after a reduce and plan reactions.
///
/// Reactions fire on value changes, not on intent dispatch: an
/// increment with step 0 changes nothing and triggers nothing. Reset
/// is the one asymmetry: its count change re-arms the save cycle but
/// must not re-seed the history it just emptied.
pub fn plan_reactions(
    prev: &CounterState,
    next: &CounterState,
    intent: &CounterIntent,
) -> ReactionPlan {
    let count_changed = prev.count != next.count;
    let is_reset = matches!(intent, CounterIntent::Reset);
    ReactionPlan {
        record_history: count_changed && !is_reset,
        arm_save: count_changed,
        rebind_keys: prev.step != next.step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::state::CounterState;

    #[test]
    fn count_change_records_and_arms() {
        let prev = CounterState::default();
        let next = CounterState {
            count: 3,
            ..prev.clone()
        };
        let plan = plan_reactions(&prev, &next, &CounterIntent::Increment);
        assert!(plan.record_history);
        assert!(plan.arm_save);
        assert!(!plan.rebind_keys);
    }

    #[test]
    fn unchanged_count_is_inert() {
        let prev = CounterState::default();
        let plan = plan_reactions(&prev, &prev.clone(), &CounterIntent::Increment);
        assert_eq!(plan, ReactionPlan::default());
    }

    #[test]
    fn reset_arms_save_but_skips_history() {
        let prev = CounterState {
            count: 5,
            history: vec![0, 5],
            ..CounterState::default()
        };
        let next = CounterState {
            count: 0,
            history: Vec::new(),
            ..prev.clone()
        };
        let plan = plan_reactions(&prev, &next, &CounterIntent::Reset);
        assert!(!plan.record_history);
        assert!(plan.arm_save);
    }

    #[test]
    fn reset_at_zero_triggers_no_save_cycle() {
        let prev = CounterState {
            history: vec![0],
            ..CounterState::default()
        };
        let next = CounterState {
            history: Vec::new(),
            ..prev.clone()
        };
        let plan = plan_reactions(&prev, &next, &CounterIntent::Reset);
        assert_eq!(plan, ReactionPlan::default());
    }

    #[test]
    fn step_change_rebinds_keys() {
        let prev = CounterState::default();
        let next = CounterState {
            step: Some(5),
            step_input: "5".to_string(),
            ..prev.clone()
        };
        let plan = plan_reactions(&prev, &next, &CounterIntent::StepInput("5".to_string()));
        assert!(plan.rebind_keys);
        assert!(!plan.record_history);
        assert!(!plan.arm_save);
    }
}

//! Arrow-key binding table, managed as a scoped resource.
//!
//! Mirrors a document-level key listener: acquired on mount, released
//! and re-acquired whenever the step changes, released on unmount. The
//! table captures the step in force at acquisition time; because every
//! step change re-acquires, the captured value is never stale. The
//! count, by contrast, is read at event time by the reducer, so rapid
//! presses each apply against the latest value.

use crossterm::event::KeyCode;
use tracing::debug;

/// Delta resolved from an arrow key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowAction {
    Raise(i64),
    Lower(i64),
}

#[derive(Debug)]
struct BindingTable {
    /// Step captured at acquisition. `None` means the step field held
    /// unparseable text when the table was installed; arrows are inert.
    step: Option<i64>,
    generation: u64,
}

/// Owner of the single active binding table.
///
/// There is no execution path that leaves two tables installed:
/// [`KeyBindings::acquire`] releases the previous table first.
#[derive(Debug, Default)]
pub struct KeyBindings {
    active: Option<BindingTable>,
    generation: u64,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a binding table capturing `step`, releasing any table
    /// installed before it.
    pub fn acquire(&mut self, step: Option<i64>) {
        self.release();
        self.generation += 1;
        debug!(
            generation = self.generation,
            ?step,
            "key bindings acquired"
        );
        self.active = Some(BindingTable {
            step,
            generation: self.generation,
        });
    }

    /// Remove the active table. Idempotent; also called on unmount.
    pub fn release(&mut self) {
        if let Some(table) = self.active.take() {
            debug!(generation = table.generation, "key bindings released");
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Number of acquisitions so far. One table per generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Resolve a key press against the active table.
    ///
    /// Returns `None` when no table is installed, the key is not an
    /// arrow, or the captured step is unparseable.
    pub fn resolve(&self, code: KeyCode) -> Option<ArrowAction> {
        let table = self.active.as_ref()?;
        let step = table.step?;
        match code {
            KeyCode::Up => Some(ArrowAction::Raise(step)),
            KeyCode::Down => Some(ArrowAction::Lower(step)),
            _ => None,
        }
    }
}

impl Drop for KeyBindings {
    fn drop(&mut self) {
        self.release();
    }
}

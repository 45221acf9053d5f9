//! Optimistic toggle laws for engagement counters.
//!
//! # Design
//! - A toggle shows its new state immediately and reconciles once the
//!   network call resolves.
//! - Rollback restores the captured snapshot verbatim; it never inverts
//!   the speculative formula.
//! - Every remote failure kind reconciles the same way.

/// Displayed flag plus aggregate counter for one toggle surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ToggleState {
    /// Whether the viewer currently has the toggle engaged.
    pub active: bool,
    /// Aggregate count across all viewers; floored at zero.
    pub count: u64,
}

/// Pre-action capture used exclusively for rollback.
///
/// The inner value is private: a snapshot can only be taken from a live
/// state and read back whole, never edited or rebuilt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleSnapshot(ToggleState);

impl ToggleSnapshot {
    /// Capture the displayed state ahead of a speculative write.
    #[must_use]
    pub const fn capture(state: ToggleState) -> Self {
        Self(state)
    }

    /// The exact state at capture time.
    #[must_use]
    pub const fn captured(self) -> ToggleState {
        self.0
    }
}

/// Progress of the toggle flow for one subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TogglePhase {
    /// No toggle call outstanding.
    #[default]
    Idle,
    /// A toggle call was dispatched and has not resolved yet.
    InFlight,
}

/// Next displayed state, written before the server confirms.
///
/// Engaging increments the counter, disengaging decrements it. The
/// counter saturates at zero even for inconsistent pre-states
/// (`active` with a zero count).
#[must_use]
pub const fn speculate(current: ToggleState) -> ToggleState {
    ToggleState {
        active: !current.active,
        count: if current.active {
            current.count.saturating_sub(1)
        } else {
            current.count.saturating_add(1)
        },
    }
}

/// Reconcile a resolved toggle call.
///
/// Success keeps the speculative value as final; any failure restores
/// the snapshot exactly as captured.
#[must_use]
pub const fn resolve<E>(
    snapshot: ToggleSnapshot,
    speculative: ToggleState,
    result: &Result<(), E>,
) -> ToggleState {
    match result {
        Ok(()) => speculative,
        Err(_) => snapshot.captured(),
    }
}

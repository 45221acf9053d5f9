//! Shared UI primitives with no DOM dependency.

/// Modal surfaces that can be requested from anywhere in the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    /// The viewer must sign in before the action can proceed.
    LoginRequired,
}

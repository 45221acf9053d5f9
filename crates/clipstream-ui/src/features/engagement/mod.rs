//! Optimistic engagement toggles (video likes, channel subscriptions).
//!
//! # Design
//! - One flow for every user-toggleable boolean+counter backed by the
//!   server: snapshot, speculate, dispatch, then commit or roll back.
//! - The slice transitions live in [`state`], the reconciliation laws in
//!   [`logic`]; both are DOM-free so the flow is unit-tested natively.
//! - The wire calls are deliberately thin: the server flips per-viewer
//!   state and adjusts the aggregate atomically, and the client only
//!   learns success or failure.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
pub mod state;

#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Clipstream web client.
//!
//! Yew front-end for the video platform: playback pages, engagement
//! toggles (likes/subscriptions) with optimistic reconciliation, support
//! inquiries, and account/session handling. DOM-free state and logic
//! compile for every target so the interaction flows are testable off
//! the browser; rendering and transport are wasm-only.

pub mod core;
pub mod features;
pub mod models;
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

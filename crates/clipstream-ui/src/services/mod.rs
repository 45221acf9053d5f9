//! HTTP transport: the shared client and the error taxonomy it reports.
#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod error;

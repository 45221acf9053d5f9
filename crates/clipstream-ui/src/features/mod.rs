//! Feature slices for the Clipstream UI.
pub mod account;
pub mod engagement;
pub mod inquiries;
pub mod videos;

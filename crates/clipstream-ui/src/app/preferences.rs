//! Persistence and environment helpers for the app shell.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use web_sys::Url;

pub(crate) const TOKEN_KEY: &str = "clipstream.token";

pub(crate) fn load_token() -> Option<String> {
    let value = LocalStorage::get::<String>(TOKEN_KEY).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    Some(value)
}

pub(crate) fn persist_token(token: &str) {
    if let Err(err) = LocalStorage::set(TOKEN_KEY, token) {
        console::error!("storage operation failed", "set", TOKEN_KEY, err.to_string());
    }
}

pub(crate) fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}

pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:3000".to_string());

    if let Ok(url) = Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();
        // The trunk dev server proxies nothing; talk to the API port directly.
        let mapped_port = match port.as_str() {
            "" => None,
            "8080" => Some("3000"),
            other => Some(other),
        };

        let mut base = format!("{protocol}//{host}");
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(port);
        }
        return base;
    }

    "http://localhost:3000".to_string()
}

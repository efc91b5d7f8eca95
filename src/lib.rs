//! # ServiCiudad inquiry client
//!
//! `serviciudad` is a client for the ServiCiudad utility-bill service. It gates
//! access behind a session established against the backend health endpoint and
//! queries the consolidated water/energy debt of a client.
//!
//! ## Session gate
//!
//! A session lives in volatile per-tab storage (`isAuthenticated`, `username`,
//! `loginTime`). Every page load resolves a [`serviciudad::route::Page`] and asks
//! the gate whether it may be shown; unauthenticated visits to the main page are
//! redirected to login. Thirty minutes without interaction force a logout.
//!
//! ## Debt inquiry
//!
//! Client identifiers are exactly ten digits and are validated before any request
//! is made. Requests use HTTP Basic auth and a cancellation-token timeout, and each
//! HTTP outcome maps to one terminal, user-facing error. Nothing is retried.

pub mod cli;
pub mod serviciudad;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

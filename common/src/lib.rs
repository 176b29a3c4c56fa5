//! Shared domain logic for the TalentX admin dashboard.
//!
//! Everything here is plain Rust with no browser bindings so it can be used by
//! the Yew frontend and exercised by native tests.
//!
//! - `model`: talent records and their activity entries as sent by the listing endpoint.
//! - `requests` / `responses`: wire payloads for the auth and listing endpoints.
//! - `session`: bearer token lifecycle over a pluggable `TokenStore`.
//! - `transport`: the raw response shape handed over by whatever performs I/O.
//! - `auth`, `fetcher`: request preparation and response classification.
//! - `filter`, `listing`: filter criteria and the list view state machine.
//! - `comments`: per-talent comment threads and the side panel state.
//! - `export`: spreadsheet export of the visible rows.

pub mod auth;
pub mod comments;
pub mod export;
pub mod fetcher;
pub mod filter;
pub mod listing;
pub mod model;
pub mod requests;
pub mod responses;
pub mod session;
pub mod transport;

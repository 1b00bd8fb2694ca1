//! # selah-web
//!
//! Leptos + WASM frontend for Selah: scripture study plans, a private
//! journal, and community discussion. Accounts come from a cookie-based
//! identity API; this crate gates the signed-in areas on the client, nags
//! unverified users to confirm their email, and walks freshly verified users
//! into profile completion.
//!
//! Route gating here is a UX affordance only. The API enforces the same
//! policy against direct data access; nothing in this crate is a security
//! boundary.

pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod components;
pub mod features;
pub mod routes;

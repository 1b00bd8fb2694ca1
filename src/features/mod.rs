//! Feature modules: API clients, types, and domain logic grouped by area.

pub mod auth;
pub mod profile;

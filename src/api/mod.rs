//! Client for the external user API.
//!
//! The API serves a JSON list of users; each one becomes an [`Employee`]
//! that can be merged into the registry.
//!
//! [`Employee`]: crate::models::Employee

mod client;
mod response;

pub use client::ApiClient;
pub use response::{ApiCompany, ApiUser};

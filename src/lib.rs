//! Employee registry
//!
//! This crate keeps an in-memory registry of employees, imports them from
//! CSV files and an external user API, and applies the company's promotion,
//! salary, rating, team and tenure rules.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

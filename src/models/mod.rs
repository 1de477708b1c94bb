//! Core data models for the employee registry.
//!
//! This module contains all the domain models used throughout the crate.

mod company_statistics;
mod employee;
mod import_summary;
mod position;
mod project_team;

pub use company_statistics::{CompanyStatistics, NO_EARNER};
pub use employee::{Employee, MAX_RATING, MIN_RATING};
pub use import_summary::{ImportError, ImportErrorKind, ImportSummary};
pub use position::{Position, PositionBand, UnknownPosition};
pub use project_team::{MAX_TEAM_SIZE, ProjectTeam};

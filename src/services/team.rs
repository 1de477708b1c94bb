//! Team membership rules.
//!
//! The employee side of the relation (`Employee::current_team`) and the
//! team side (`ProjectTeam::members`) are only ever changed together,
//! through [`TeamService`].

use std::collections::BTreeMap;

use tracing::{info, warn};

use crate::error::{RegistryError, RegistryResult};
use crate::models::{Employee, Position, ProjectTeam};

use super::EmployeeRegistry;

/// Keeps the project teams and enforces membership rules.
///
/// # Example
///
/// ```
/// use employee_registry::models::{Employee, Position};
/// use employee_registry::services::TeamService;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut jan = Employee::new("Jan", "jan@tech.pl", "TechCorp", Position::Programmer,
///     Decimal::new(9000, 0), NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()).unwrap();
///
/// let mut teams = TeamService::new();
/// teams.create_team("Phoenix").unwrap();
/// teams.create_team("Gorilla").unwrap();
///
/// teams.assign_to_team(&mut jan, "Phoenix").unwrap();
/// assert!(teams.assign_to_team(&mut jan, "Gorilla").is_err());
///
/// teams.transfer_employee(&mut jan, "Gorilla").unwrap();
/// assert_eq!(jan.current_team(), Some("Gorilla"));
/// assert!(teams.team("Phoenix").unwrap().members().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct TeamService {
    teams: BTreeMap<String, ProjectTeam>,
}

impl TeamService {
    /// Creates a service with no teams.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new, empty team.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateTeam` if the name is taken.
    pub fn create_team(&mut self, name: &str) -> RegistryResult<&ProjectTeam> {
        if self.teams.contains_key(name) {
            return Err(RegistryError::DuplicateTeam {
                name: name.to_string(),
            });
        }
        info!(team = %name, "Team created");
        Ok(self
            .teams
            .entry(name.to_string())
            .or_insert_with(|| ProjectTeam::new(name)))
    }

    /// Looks up a team by name.
    pub fn team(&self, name: &str) -> Option<&ProjectTeam> {
        self.teams.get(name)
    }

    /// All teams, ordered by name.
    pub fn teams(&self) -> impl Iterator<Item = &ProjectTeam> {
        self.teams.values()
    }

    /// Puts an employee who has no team into `team_name`.
    ///
    /// Assigning an employee to a team they are already listed in is a no-op
    /// on the team's member list.
    ///
    /// # Errors
    ///
    /// - `AlreadyInTeam` if the employee belongs to a team; use
    ///   [`transfer_employee`](Self::transfer_employee) instead.
    /// - `TeamFull` if the team has reached its capacity.
    /// - `TeamNotFound` if no such team exists.
    pub fn assign_to_team(&mut self, employee: &mut Employee, team_name: &str) -> RegistryResult<()> {
        if let Some(current) = employee.current_team() {
            warn!(email = %employee.email(), team = %current, "Employee already has a team");
            return Err(RegistryError::AlreadyInTeam {
                team: current.to_string(),
            });
        }

        let team = self.team_mut(team_name)?;
        ensure_seat(team)?;

        employee.join_team(team.name());
        team.add_member(employee.email());
        info!(email = %employee.email(), team = %team_name, "Employee assigned to team");
        Ok(())
    }

    /// Moves an employee to `new_team`, leaving their current team if any.
    ///
    /// Capacity is checked before anything changes, so a failed transfer
    /// leaves both teams and the employee as they were.
    ///
    /// # Errors
    ///
    /// - `TeamFull` if the new team has reached its capacity.
    /// - `TeamNotFound` if no such team exists.
    pub fn transfer_employee(&mut self, employee: &mut Employee, new_team: &str) -> RegistryResult<()> {
        ensure_seat(self.team_mut(new_team)?)?;

        let previous = employee.current_team().map(str::to_string);
        if let Some(old_name) = &previous {
            if let Some(old_team) = self.teams.get_mut(old_name) {
                old_team.remove_member(employee.email());
            }
            employee.leave_team();
        }

        let team = self.team_mut(new_team)?;
        employee.join_team(team.name());
        team.add_member(employee.email());
        info!(
            email = %employee.email(),
            from = previous.as_deref().unwrap_or("-"),
            to = %new_team,
            "Employee transferred"
        );
        Ok(())
    }

    /// Takes an employee out of their current team, if any.
    pub fn remove_from_team(&mut self, employee: &mut Employee) {
        if let Some(name) = employee.current_team() {
            if let Some(team) = self.teams.get_mut(name) {
                team.remove_member(employee.email());
            }
            employee.leave_team();
        }
    }

    /// Returns true if at least one member of the team is a manager.
    ///
    /// Member positions are read from `registry`; members missing from the
    /// registry are ignored.
    ///
    /// # Errors
    ///
    /// Returns `TeamNotFound` if no such team exists.
    pub fn is_team_compliant(&self, team_name: &str, registry: &EmployeeRegistry) -> RegistryResult<bool> {
        let team = self
            .team(team_name)
            .ok_or_else(|| RegistryError::TeamNotFound {
                name: team_name.to_string(),
            })?;

        Ok(team
            .members()
            .iter()
            .filter_map(|email| registry.get(email))
            .any(|member| member.position() == Position::Manager))
    }

    fn team_mut(&mut self, name: &str) -> RegistryResult<&mut ProjectTeam> {
        self.teams
            .get_mut(name)
            .ok_or_else(|| RegistryError::TeamNotFound {
                name: name.to_string(),
            })
    }
}

fn ensure_seat(team: &ProjectTeam) -> RegistryResult<()> {
    if team.is_full() {
        warn!(team = %team.name(), capacity = team.capacity(), "Team is full");
        return Err(RegistryError::TeamFull {
            team: team.name().to_string(),
            capacity: team.capacity(),
        });
    }
    Ok(())
}

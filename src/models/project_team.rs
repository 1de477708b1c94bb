//! Project team model.
//!
//! A team holds the emails of its members, never the employee records
//! themselves; the registry stays the only owner of employees.

use serde::Serialize;

/// Maximum number of members a team can hold.
pub const MAX_TEAM_SIZE: usize = 5;

/// A named project team with a fixed capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectTeam {
    name: String,
    members: Vec<String>,
}

impl ProjectTeam {
    /// Creates an empty team.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Team name, which is also its identity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Emails of the members in joining order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Maximum number of members.
    pub fn capacity(&self) -> usize {
        MAX_TEAM_SIZE
    }

    /// Returns true when no more members can join.
    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_TEAM_SIZE
    }

    /// Returns true if the given email is a member.
    pub fn contains(&self, email: &str) -> bool {
        self.members.iter().any(|m| m == email)
    }

    /// Adds a member; adding someone who is already a member does nothing.
    pub(crate) fn add_member(&mut self, email: &str) {
        if !self.contains(email) {
            self.members.push(email.to_string());
        }
    }

    pub(crate) fn remove_member(&mut self, email: &str) {
        self.members.retain(|m| m != email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_team_is_empty() {
        let team = ProjectTeam::new("Phoenix");
        assert_eq!(team.name(), "Phoenix");
        assert!(team.members().is_empty());
        assert_eq!(team.capacity(), 5);
        assert!(!team.is_full());
    }

    #[test]
    fn test_add_member_deduplicates() {
        let mut team = ProjectTeam::new("Phoenix");
        team.add_member("jan@tech.pl");
        team.add_member("jan@tech.pl");
        assert_eq!(team.members(), &["jan@tech.pl".to_string()]);
    }

    #[test]
    fn test_remove_member() {
        let mut team = ProjectTeam::new("Phoenix");
        team.add_member("jan@tech.pl");
        team.add_member("anna@tech.pl");
        team.remove_member("jan@tech.pl");
        assert!(!team.contains("jan@tech.pl"));
        assert!(team.contains("anna@tech.pl"));
    }

    #[test]
    fn test_is_full_at_capacity() {
        let mut team = ProjectTeam::new("Phoenix");
        for i in 0..MAX_TEAM_SIZE {
            team.add_member(&format!("member{}@tech.pl", i));
        }
        assert!(team.is_full());
    }
}

//! Skill-based task assignment.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::models::Employee;

/// Task identifier.
pub type TaskId = u64;

/// Knows who is free to work on a task.
pub trait CalendarService {
    /// Employees available for `task_id`, in order of preference.
    fn available_employees(&self, task_id: TaskId) -> Vec<Employee>;
}

/// Stores employee skills, keyed by email.
pub trait SkillsRepository {
    /// Skills held by the employee. Unknown employees have none.
    fn skills(&self, email: &str) -> HashSet<String>;

    /// Records a skill for the employee.
    fn add_skill(&mut self, email: &str, skill: &str);
}

/// Persists task assignments.
pub trait TaskRepository {
    /// Records that `email` now works on `task_id`.
    fn save_assignment(&mut self, task_id: TaskId, email: &str);
}

/// [`SkillsRepository`] kept in memory.
#[derive(Debug, Default)]
pub struct InMemorySkillsRepository {
    skills: HashMap<String, HashSet<String>>,
}

impl InMemorySkillsRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SkillsRepository for InMemorySkillsRepository {
    fn skills(&self, email: &str) -> HashSet<String> {
        self.skills.get(email).cloned().unwrap_or_default()
    }

    fn add_skill(&mut self, email: &str, skill: &str) {
        self.skills
            .entry(email.to_string())
            .or_default()
            .insert(skill.to_string());
    }
}

/// Picks an available, qualified employee for a task.
pub struct TaskAssignmentService<C, S, T> {
    calendar: C,
    skills: S,
    tasks: T,
}

impl<C, S, T> TaskAssignmentService<C, S, T>
where
    C: CalendarService,
    S: SkillsRepository,
    T: TaskRepository,
{
    /// Creates a service from its collaborators.
    pub fn new(calendar: C, skills: S, tasks: T) -> Self {
        Self {
            calendar,
            skills,
            tasks,
        }
    }

    /// Assigns the task to the first available employee with `required_skill`.
    ///
    /// Returns the assignee's email, or `None` when nobody qualifies, in
    /// which case nothing is saved.
    pub fn assign_task(&mut self, task_id: TaskId, required_skill: &str) -> Option<String> {
        let candidates = self.calendar.available_employees(task_id);
        debug!(task_id, candidates = candidates.len(), skill = %required_skill, "Looking for assignee");

        let assignee = candidates
            .iter()
            .find(|employee| self.skills.skills(employee.email()).contains(required_skill))?
            .email()
            .to_string();

        self.tasks.save_assignment(task_id, &assignee);
        info!(task_id, email = %assignee, "Task assigned");
        Some(assignee)
    }

    /// The skills repository, e.g. to register new skills.
    pub fn skills_mut(&mut self) -> &mut S {
        &mut self.skills
    }

    /// The task repository.
    pub fn tasks(&self) -> &T {
        &self.tasks
    }
}

//! Business rules operating on the employee registry.
//!
//! Each module covers one concern:
//! - Registry storage and analytics
//! - CSV import
//! - Promotions and raises
//! - Ratings
//! - Team membership
//! - Tenure
//! - Export, task assignment and training reminders

pub mod export;
pub mod import;
pub mod promotion;
pub mod rating;
pub mod registry;
pub mod task_assignment;
pub mod team;
pub mod tenure;
pub mod training_reminder;

pub use export::{CsvFormatter, ERROR_LOG, ExportService, FileSystem, LocalFileSystem};
pub use import::{EXPECTED_COLUMNS, ImportService, parse_record};
pub use promotion::{PromotionService, give_raise, promote};
pub use rating::{RatingService, add_rating, average_rating};
pub use registry::EmployeeRegistry;
pub use task_assignment::{
    CalendarService, InMemorySkillsRepository, SkillsRepository, TaskAssignmentService, TaskId,
    TaskRepository,
};
pub use team::TeamService;
pub use tenure::{full_years_between, tenure_in_years};
pub use training_reminder::{
    CertificateRepository, Email, NotificationService, REMINDER_SUBJECT, REMINDER_WINDOW_DAYS,
    TrainingReminderService,
};

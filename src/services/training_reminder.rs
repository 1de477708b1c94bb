//! Reminders about expiring training certificates.

use serde::Serialize;
use tracing::info;

use crate::models::Employee;

/// Days ahead checked for expiring certificates.
pub const REMINDER_WINDOW_DAYS: u32 = 30;

/// Subject line of every reminder.
pub const REMINDER_SUBJECT: &str = "Training reminder";

/// An outgoing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    /// Recipient address.
    pub recipient: String,
    /// Subject line.
    pub subject: String,
    /// Message text.
    pub body: String,
}

/// Looks up certificate expiry data.
pub trait CertificateRepository {
    /// Employees with a certificate expiring within `days` days.
    fn employees_with_expiring_certificates(&self, days: u32) -> Vec<Employee>;
}

/// Delivers emails.
pub trait NotificationService {
    /// Sends one email.
    fn send(&mut self, email: Email);
}

/// Emails employees whose certificates are about to expire.
pub struct TrainingReminderService<C, N> {
    certificates: C,
    notifications: N,
}

impl<C, N> TrainingReminderService<C, N>
where
    C: CertificateRepository,
    N: NotificationService,
{
    /// Creates a service from its collaborators.
    pub fn new(certificates: C, notifications: N) -> Self {
        Self {
            certificates,
            notifications,
        }
    }

    /// Sends one reminder per employee due within the reminder window.
    ///
    /// Returns the number of emails sent.
    pub fn send_reminders(&mut self) -> usize {
        let due = self
            .certificates
            .employees_with_expiring_certificates(REMINDER_WINDOW_DAYS);

        for employee in &due {
            self.notifications.send(reminder_for(employee));
        }
        info!(sent = due.len(), window_days = REMINDER_WINDOW_DAYS, "Training reminders sent");
        due.len()
    }

    /// The notification service.
    pub fn notifications(&self) -> &N {
        &self.notifications
    }
}

fn reminder_for(employee: &Employee) -> Email {
    Email {
        recipient: employee.email().to_string(),
        subject: REMINDER_SUBJECT.to_string(),
        body: format!(
            "Hello {}, your training certificates expire soon.",
            employee.name()
        ),
    }
}

//! HTTP client for the external user API.

use std::time::Duration;

use chrono::Utc;
use reqwest::StatusCode;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::ApiConfig;
use crate::error::{RegistryError, RegistryResult};
use crate::models::{Employee, Position};

use super::response::ApiUser;

/// Fetches employees from the user API.
///
/// # Example
///
/// ```no_run
/// use employee_registry::api::ApiClient;
/// use employee_registry::config::ApiConfig;
///
/// # async fn run() -> employee_registry::error::RegistryResult<()> {
/// let client = ApiClient::new(&ApiConfig::default())?;
/// let employees = client.fetch_employees().await?;
/// println!("Fetched {} employees", employees.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    users_url: String,
    default_position: Position,
}

impl ApiClient {
    /// Creates a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns `Api` if the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> RegistryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| api_error(format!("API connection error: {}", e)))?;
        Ok(Self {
            client,
            users_url: config.users_url(),
            default_position: config.default_position,
        })
    }

    /// Downloads the user listing and converts every user to an employee.
    ///
    /// Fetched employees hold the configured default position at its base
    /// salary, with today's date as hire date.
    ///
    /// # Errors
    ///
    /// Returns `Api` if:
    /// - The server cannot be reached or times out
    /// - The response status is not 200
    /// - The body is not a JSON list of users, or a user is invalid
    pub async fn fetch_employees(&self) -> RegistryResult<Vec<Employee>> {
        let request_id = Uuid::new_v4();
        info!(request_id = %request_id, url = %self.users_url, "Fetching employees from API");

        let response = self
            .client
            .get(&self.users_url)
            .send()
            .await
            .map_err(|e| api_error(format!("API connection error: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(request_id = %request_id, status = status.as_u16(), "API request failed");
            return Err(api_error(format!(
                "API request failed with status {}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| api_error(format!("API connection error: {}", e)))?;
        let users: Vec<ApiUser> = serde_json::from_str(&body)
            .map_err(|e| api_error(format!("failed to parse API response: {}", e)))?;

        let hire_date = Utc::now().date_naive();
        let employees = users
            .into_iter()
            .map(|user| {
                user.into_employee(self.default_position, hire_date)
                    .map_err(|e| api_error(format!("failed to parse API response: {}", e)))
            })
            .collect::<RegistryResult<Vec<_>>>()?;

        info!(request_id = %request_id, count = employees.len(), "Employees fetched from API");
        Ok(employees)
    }
}

fn api_error(message: String) -> RegistryError {
    RegistryError::Api { message }
}

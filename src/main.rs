//! Demo run of the employee registry.
//!
//! Usage: `employee-registry [CONFIG]` (defaults to `config/registry.yaml`).

use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use employee_registry::api::ApiClient;
use employee_registry::config::{AppConfig, ConfigLoader};
use employee_registry::services::{EmployeeRegistry, ExportService, ImportService, LocalFileSystem};

const DEFAULT_CONFIG_PATH: &str = "config/registry.yaml";

#[tokio::main]
async fn main() -> ExitCode {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = match ConfigLoader::load_or_default(&config_path) {
        Ok(loader) => loader.into_config(),
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config);
    info!(config = %config_path, "Employee registry starting");

    run(&config).await;
    ExitCode::SUCCESS
}

fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(config: &AppConfig) {
    let mut registry = EmployeeRegistry::new();

    let summary = ImportService::new(&mut registry).import_from_path(&config.import.csv_path);
    println!("{}", summary);
    for err in &summary.errors {
        println!("  {}", err);
    }
    print_registry("After CSV import", &registry);

    match ApiClient::new(&config.api) {
        Ok(client) => match client.fetch_employees().await {
            Ok(employees) => {
                let added = registry.merge(employees);
                println!("Merged {} employees from the API", added);
            }
            Err(e) => {
                warn!(error = %e, "Skipping API import");
                println!("API import skipped: {}", e);
            }
        },
        Err(e) => error!(error = %e, "Could not create API client"),
    }
    print_registry("After API import", &registry);

    let underpaid = registry.validate_salary_consistency();
    if underpaid.is_empty() {
        println!("\nAll salaries are at or above their position's base salary");
    } else {
        println!("\nSalaries below position base:");
        for employee in underpaid {
            println!(
                "  {} ({}): {} < {}",
                employee.name(),
                employee.position(),
                employee.salary(),
                employee.position().base_salary()
            );
        }
    }

    println!("\nCompany statistics:");
    for (company, stats) in registry.company_statistics() {
        println!("  {}: {}", company, stats);
    }

    let exporter = ExportService::new(LocalFileSystem::new("."), &config.export.directory);
    for result in [
        exporter.export_registry("employees.csv", &registry),
        exporter.export_statistics("statistics.json", &registry),
    ] {
        if let Err(e) = result {
            println!("Export failed: {}", e);
        }
    }
    info!(employees = registry.len(), "Employee registry finished");
}

fn print_registry(title: &str, registry: &EmployeeRegistry) {
    println!("\n{} ({} employees):", title, registry.len());
    for employee in registry.sort_by_name() {
        println!("  {}", employee);
    }
}

use std::env;

use crate::error::InfraError;

/// Database profile enum for different environments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
    /// Private in-memory SQLite database, migrated on connect
    InMemory,
}

/// Builds a database URL from environment variables based on profile
pub fn db_url(profile: DbProfile) -> Result<String, InfraError> {
    if profile == DbProfile::InMemory {
        return Ok("sqlite::memory:".to_string());
    }

    let host = host();
    let port = port();
    let db_name = db_name(profile)?;
    let username = must_var("BLOG_DB_USER")?;
    let password = must_var("BLOG_DB_PASSWORD")?;

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

/// Get database host from environment (defaults to localhost)
fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

/// Get database port from environment (defaults to 5432)
fn port() -> String {
    env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string())
}

fn db_name(profile: DbProfile) -> Result<String, InfraError> {
    match profile {
        DbProfile::Prod => must_var("BLOG_DB"),
        DbProfile::Test => {
            let db_name = must_var("BLOG_TEST_DB")?;
            // Enforce safety: test DB must end with "_test"
            if !db_name.ends_with("_test") {
                return Err(InfraError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
        DbProfile::InMemory => Ok(String::new()),
    }
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, InfraError> {
    env::var(name).map_err(|_| {
        InfraError::config(format!("Required environment variable '{name}' is not set"))
    })
}

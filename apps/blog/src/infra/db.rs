use std::time::Duration;

use migration::migrate;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbProfile};
use crate::error::InfraError;

/// Open a connection pool for `profile`.
///
/// In-memory SQLite lives inside a single connection, so the pool is capped at
/// one connection and the schema is migrated right away.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, InfraError> {
    let url = db_url(profile)?;

    let mut opt = ConnectOptions::new(&url);
    opt.acquire_timeout(Duration::from_secs(2))
        .sqlx_logging(false);
    if profile == DbProfile::InMemory {
        opt.min_connections(1).max_connections(1);
    } else {
        opt.max_connections(10);
    }

    let conn = Database::connect(opt).await?;
    info!(?profile, url = %sanitize_db_url(&url), "Connected to database");

    if profile == DbProfile::InMemory {
        migrate(&conn).await?;
    }

    Ok(conn)
}

/// Mask the password in a connection string for logging.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth_part, host_part)) = url.split_once('@') else {
        return url.to_string();
    };

    match auth_part.rfind(':') {
        Some(colon_pos) if auth_part[..colon_pos].contains("://") => {
            format!("{}:***@{}", &auth_part[..colon_pos], host_part)
        }
        _ => url.to_string(),
    }
}

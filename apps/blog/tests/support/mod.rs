#![allow(dead_code)]

//! Fixtures shared by the integration test binaries.

use blog::client::{DataClient, SeaClient};
use blog::config::db::DbProfile;
use blog::models::{Post, User, UserCreate};
use blog::{connect_db, ClientError};
use blog_test_support::unique_helpers::unique_email;
use sea_orm::DatabaseConnection;

/// A published post authored by user 1, as the mocked client would return it.
pub fn sample_post() -> Post {
    Post {
        id: 1,
        title: "title".to_string(),
        content: Some("content".to_string()),
        published: true,
        author_id: 1,
    }
}

pub fn sample_user() -> User {
    User {
        id: 1,
        email: "adams@prisma.io".to_string(),
        name: Some("Sabin Adams".to_string()),
    }
}

/// Fresh, migrated in-memory database.
pub async fn memory_db() -> DatabaseConnection {
    connect_db(DbProfile::InMemory)
        .await
        .expect("connect to in-memory sqlite")
}

/// Insert a user with a unique email.
pub async fn seed_user(conn: &DatabaseConnection, name: &str) -> Result<User, ClientError> {
    SeaClient::new(conn)
        .create_user(UserCreate::new(unique_email(name)).with_name(name))
        .await
}

//! Data-access client surface.
//!
//! The facade in `crate::services` is written against these traits only.
//! `SeaClient` runs them against a database; `MockClient` is the test double.

pub mod mock;
pub mod sea;

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::error::ClientError;
use crate::models::{Post, PostCreate, PostFilter, User, UserCreate, UserUpdate};

pub use mock::{MockClient, MockMethod, TxnStub};
pub use sea::SeaClient;

/// Future returned by a transaction callback, borrowing the transaction context.
pub type TxnFuture<'c, R> = BoxFuture<'c, Result<R, ClientError>>;

/// Record-level operations shared by the outer client and a transaction context.
#[async_trait]
pub trait DataClient: Send + Sync {
    async fn create_user(&self, data: UserCreate) -> Result<User, ClientError>;

    async fn update_user(&self, id: i32, data: UserUpdate) -> Result<User, ClientError>;

    async fn find_posts(&self, filter: PostFilter) -> Result<Vec<Post>, ClientError>;

    /// Fetch one post; a missing post is an error, never `None`.
    async fn find_post(&self, id: i32) -> Result<Post, ClientError>;

    async fn create_post(&self, data: PostCreate) -> Result<Post, ClientError>;

    async fn count_posts(&self) -> Result<u64, ClientError>;

    /// Delete every post matching `filter`, returning the number of rows removed.
    async fn delete_posts(&self, filter: PostFilter) -> Result<u64, ClientError>;
}

/// A client that can scope several operations in one transaction.
///
/// The callback receives a context exposing the same operations as the outer
/// client. Whatever the callback returns is returned from `transaction`.
#[async_trait]
pub trait TransactionClient: DataClient {
    async fn transaction<R, F>(&self, f: F) -> Result<R, ClientError>
    where
        R: Send,
        F: for<'c> FnOnce(&'c dyn DataClient) -> TxnFuture<'c, R> + Send;
}

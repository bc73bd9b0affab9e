//! In-memory test double for the client surface.
//!
//! Every client method is backed by its own [`MockMethod`], grouped the way
//! callers think about them: `client.user.create`, `client.post.find_many`,
//! and so on. Configure the answers, run the code under test, then inspect
//! the recorded arguments.
//!
//! Methods answering a list or a count (`post.find_many`, `post.count`,
//! `post.delete_many`) answer an empty list or zero when left unconfigured.
//! The rest fail with `ClientError::Unconfigured`.
//!
//! ```
//! use blog::client::{DataClient, MockClient};
//! use blog::models::{User, UserCreate};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let client = MockClient::new();
//! client.user.create.mock_resolved_value(User {
//!     id: 1,
//!     email: "user@prisma.io".into(),
//!     name: Some("Prisma Fan".into()),
//! });
//!
//! let input = UserCreate::new("user@prisma.io").with_name("Prisma Fan");
//! let user = client.create_user(input.clone()).await.unwrap();
//! assert_eq!(user.id, 1);
//! assert!(client.user.create.was_called_with(&input));
//! # });
//! ```

mod method;

use async_trait::async_trait;

pub use method::MockMethod;

use super::{DataClient, TransactionClient, TxnFuture};
use crate::error::ClientError;
use crate::models::{Post, PostCreate, PostFilter, User, UserCreate, UserUpdate};

/// How the mocked transaction wrapper treats its callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnStub {
    /// Run the callback with the mock client itself as the transaction context.
    PassClient,
}

#[derive(Debug)]
pub struct MockUserMethods {
    pub create: MockMethod<UserCreate, User>,
    pub update: MockMethod<(i32, UserUpdate), User>,
}

#[derive(Debug)]
pub struct MockPostMethods {
    pub find_many: MockMethod<PostFilter, Vec<Post>>,
    pub find_unique: MockMethod<i32, Post>,
    pub create: MockMethod<PostCreate, Post>,
    pub count: MockMethod<(), u64>,
    pub delete_many: MockMethod<PostFilter, u64>,
}

#[derive(Debug)]
pub struct MockClient {
    pub user: MockUserMethods,
    pub post: MockPostMethods,
    pub transaction: MockMethod<(), TxnStub>,
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClient {
    pub fn new() -> Self {
        Self {
            user: MockUserMethods {
                create: MockMethod::new("user.create"),
                update: MockMethod::new("user.update"),
            },
            post: MockPostMethods {
                find_many: MockMethod::with_default("post.find_many"),
                find_unique: MockMethod::new("post.find_unique"),
                create: MockMethod::new("post.create"),
                count: MockMethod::with_default("post.count"),
                delete_many: MockMethod::with_default("post.delete_many"),
            },
            transaction: MockMethod::new("transaction"),
        }
    }

    /// Make every transaction run its callback against this mock.
    pub fn mock_transaction_with_self(&self) -> &Self {
        self.transaction.mock_resolved_value(TxnStub::PassClient);
        self
    }

    /// Reset every mocked method.
    pub fn reset(&self) {
        self.user.create.reset();
        self.user.update.reset();
        self.post.find_many.reset();
        self.post.find_unique.reset();
        self.post.create.reset();
        self.post.count.reset();
        self.post.delete_many.reset();
        self.transaction.reset();
    }
}

#[async_trait]
impl DataClient for MockClient {
    async fn create_user(&self, data: UserCreate) -> Result<User, ClientError> {
        self.user.create.invoke(data).await
    }

    async fn update_user(&self, id: i32, data: UserUpdate) -> Result<User, ClientError> {
        self.user.update.invoke((id, data)).await
    }

    async fn find_posts(&self, filter: PostFilter) -> Result<Vec<Post>, ClientError> {
        self.post.find_many.invoke(filter).await
    }

    async fn find_post(&self, id: i32) -> Result<Post, ClientError> {
        self.post.find_unique.invoke(id).await
    }

    async fn create_post(&self, data: PostCreate) -> Result<Post, ClientError> {
        self.post.create.invoke(data).await
    }

    async fn count_posts(&self) -> Result<u64, ClientError> {
        self.post.count.invoke(()).await
    }

    async fn delete_posts(&self, filter: PostFilter) -> Result<u64, ClientError> {
        self.post.delete_many.invoke(filter).await
    }
}

#[async_trait]
impl TransactionClient for MockClient {
    async fn transaction<R, F>(&self, f: F) -> Result<R, ClientError>
    where
        R: Send,
        F: for<'c> FnOnce(&'c dyn DataClient) -> TxnFuture<'c, R> + Send,
    {
        match self.transaction.invoke(()).await? {
            TxnStub::PassClient => f(self as &dyn DataClient).await,
        }
    }
}

//! SeaORM implementation of the client surface.

use async_trait::async_trait;
use sea_orm::ActiveValue::Unchanged;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, warn};

use super::{DataClient, TransactionClient, TxnFuture};
use crate::db::txn_policy::{self, TxnPolicy};
use crate::entities::{posts, users};
use crate::error::ClientError;
use crate::models::{Post, PostCreate, PostFilter, User, UserCreate, UserUpdate};

/// Client bound to a SeaORM connection or transaction.
#[derive(Debug)]
pub struct SeaClient<'a, C> {
    conn: &'a C,
}

impl<'a, C> SeaClient<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

fn post_condition(filter: &PostFilter) -> Condition {
    let mut condition = Condition::all();
    if let Some(published) = filter.published {
        condition = condition.add(posts::Column::Published.eq(published));
    }
    if let Some(author_id) = filter.author_id {
        condition = condition.add(posts::Column::AuthorId.eq(author_id));
    }
    condition
}

#[async_trait]
impl<'a, C> DataClient for SeaClient<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn create_user(&self, data: UserCreate) -> Result<User, ClientError> {
        let user_active = users::ActiveModel {
            id: NotSet,
            email: Set(data.email),
            name: Set(data.name),
        };

        let user = user_active.insert(self.conn).await?;
        Ok(User::from(user))
    }

    async fn update_user(&self, id: i32, data: UserUpdate) -> Result<User, ClientError> {
        if data.is_empty() {
            // Nothing to write; report the row as it stands.
            let user = users::Entity::find_by_id(id)
                .one(self.conn)
                .await?
                .ok_or_else(|| ClientError::not_found(format!("No User found with id {id}")))?;
            return Ok(User::from(user));
        }

        let user_active = users::ActiveModel {
            id: Unchanged(id),
            email: data.email.map_or(NotSet, Set),
            name: data.name.map_or(NotSet, |name| Set(Some(name))),
        };

        let user = user_active.update(self.conn).await?;
        Ok(User::from(user))
    }

    async fn find_posts(&self, filter: PostFilter) -> Result<Vec<Post>, ClientError> {
        let rows = posts::Entity::find()
            .filter(post_condition(&filter))
            .order_by_asc(posts::Column::Id)
            .all(self.conn)
            .await?;
        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn find_post(&self, id: i32) -> Result<Post, ClientError> {
        let post = posts::Entity::find_by_id(id)
            .one(self.conn)
            .await?
            .ok_or_else(|| ClientError::not_found(format!("No Post found with id {id}")))?;
        Ok(Post::from(post))
    }

    async fn create_post(&self, data: PostCreate) -> Result<Post, ClientError> {
        let post_active = posts::ActiveModel {
            id: NotSet,
            title: Set(data.title),
            content: Set(data.content),
            published: Set(data.published.unwrap_or(true)),
            author_id: Set(data.author_id),
        };

        let post = post_active.insert(self.conn).await?;
        Ok(Post::from(post))
    }

    async fn count_posts(&self) -> Result<u64, ClientError> {
        Ok(posts::Entity::find().count(self.conn).await?)
    }

    async fn delete_posts(&self, filter: PostFilter) -> Result<u64, ClientError> {
        let result = posts::Entity::delete_many()
            .filter(post_condition(&filter))
            .exec(self.conn)
            .await?;
        Ok(result.rows_affected)
    }
}

#[async_trait]
impl<'a, C> TransactionClient for SeaClient<'a, C>
where
    C: ConnectionTrait + TransactionTrait + Send + Sync,
{
    /// Begin a transaction, run `f` against it, then apply the commit policy
    /// on `Ok` or roll back on `Err`.
    async fn transaction<R, F>(&self, f: F) -> Result<R, ClientError>
    where
        R: Send,
        F: for<'c> FnOnce(&'c dyn DataClient) -> TxnFuture<'c, R> + Send,
    {
        let txn = self.conn.begin().await?;
        let scoped = SeaClient::new(&txn);
        let out = f(&scoped as &dyn DataClient).await;

        match out {
            Ok(val) => {
                let policy = txn_policy::current();
                match policy {
                    TxnPolicy::CommitOnOk => txn.commit().await?,
                    TxnPolicy::RollbackOnOk => txn.rollback().await?,
                }
                debug!(%policy, "Transaction finished");
                Ok(val)
            }
            Err(err) => {
                // Best-effort rollback; preserve original error
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(error = %rollback_err, "rollback after failed transaction also failed");
                }
                Err(err)
            }
        }
    }
}

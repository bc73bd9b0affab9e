use tracing::debug;

use crate::client::DataClient;
use crate::error::ClientError;
use crate::models::{PostFilter, User, UserCreate, UserUpdate};

/// Create a user and return the row exactly as the client produced it.
pub async fn create_user<C>(client: &C, input: UserCreate) -> Result<User, ClientError>
where
    C: DataClient + ?Sized,
{
    let user = client.create_user(input).await?;
    debug!(user_id = user.id, "User created");
    Ok(user)
}

/// Apply `patch` to user `id`. With `clear_posts`, every post authored by the
/// user is deleted afterwards.
pub async fn update_user<C>(
    client: &C,
    id: i32,
    patch: UserUpdate,
    clear_posts: bool,
) -> Result<User, ClientError>
where
    C: DataClient + ?Sized,
{
    let user = client.update_user(id, patch).await?;

    if clear_posts {
        let removed = client.delete_posts(PostFilter::by_author(id)).await?;
        debug!(user_id = id, removed, "Cleared posts for user");
    }

    Ok(user)
}

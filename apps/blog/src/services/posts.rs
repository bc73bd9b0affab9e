use tracing::debug;

use crate::client::{DataClient, TransactionClient};
use crate::error::ClientError;
use crate::models::{NewPostWithCount, Post, PostCreate, PostFilter, PostsByState};

/// Fetch published and unpublished posts with two queries, published first.
pub async fn get_posts<C>(client: &C) -> Result<PostsByState, ClientError>
where
    C: DataClient + ?Sized,
{
    let published = client.find_posts(PostFilter::published(true)).await?;
    let unpublished = client.find_posts(PostFilter::published(false)).await?;

    debug!(
        published = published.len(),
        unpublished = unpublished.len(),
        "Loaded posts by state"
    );

    Ok(PostsByState {
        published,
        unpublished,
    })
}

/// Fetch a single post. A missing post is returned as the client's error.
pub async fn get_post_by_id<C>(client: &C, id: i32) -> Result<Post, ClientError>
where
    C: DataClient + ?Sized,
{
    client.find_post(id).await
}

/// Create a published post and count all posts inside one transaction.
pub async fn add_post<C>(client: &C, input: PostCreate) -> Result<NewPostWithCount, ClientError>
where
    C: TransactionClient,
{
    let data = PostCreate {
        published: Some(true),
        ..input
    };

    let result = client
        .transaction(move |tx| {
            Box::pin(async move {
                let new_post = tx.create_post(data).await?;
                let count = tx.count_posts().await?;
                Ok::<_, ClientError>(NewPostWithCount { new_post, count })
            })
        })
        .await?;

    debug!(post_id = result.new_post.id, count = result.count, "Post added");
    Ok(result)
}

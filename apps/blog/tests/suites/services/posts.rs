use blog::client::MockClient;
use blog::models::{NewPostWithCount, Post, PostCreate, PostFilter, PostsByState};
use blog::services::posts::{add_post, get_post_by_id, get_posts};
use blog::ClientError;

use crate::support::sample_post;

#[tokio::test]
async fn test_get_posts_separates_published_and_unpublished() -> Result<(), ClientError> {
    let client = MockClient::new();
    let published = sample_post();
    let unpublished = Post {
        published: false,
        ..sample_post()
    };
    client
        .post
        .find_many
        .mock_resolved_value_once(vec![published.clone()])
        .mock_resolved_value_once(vec![unpublished.clone()]);

    let posts = get_posts(&client).await?;

    assert_eq!(
        posts,
        PostsByState {
            published: vec![published],
            unpublished: vec![unpublished],
        }
    );
    assert_eq!(
        client.post.find_many.calls(),
        vec![PostFilter::published(true), PostFilter::published(false)]
    );
    Ok(())
}

#[tokio::test]
async fn test_get_posts_does_not_filter_client_results() -> Result<(), ClientError> {
    let client = MockClient::new();
    // Whatever the client answers is returned as-is, even if mislabeled.
    let odd = vec![
        Post {
            id: 3,
            published: false,
            ..sample_post()
        },
        Post {
            id: 2,
            ..sample_post()
        },
    ];
    client.post.find_many.mock_resolved_value(odd.clone());

    let posts = get_posts(&client).await?;

    assert_eq!(posts.published, odd);
    assert_eq!(posts.unpublished, odd);
    Ok(())
}

#[tokio::test]
async fn test_get_posts_serializes_with_state_keys() -> Result<(), ClientError> {
    let client = MockClient::new();
    client
        .post
        .find_many
        .mock_resolved_value_once(vec![sample_post()])
        .mock_resolved_value_once(vec![]);

    let posts = get_posts(&client).await?;
    let json = serde_json::to_value(&posts).expect("serialize posts");

    assert_eq!(json["published"][0]["authorId"], 1);
    assert_eq!(json["unpublished"], serde_json::json!([]));
    Ok(())
}

#[tokio::test]
async fn test_get_posts_stops_on_first_failure() {
    let client = MockClient::new();
    client
        .post
        .find_many
        .mock_rejected_value_once(ClientError::connection("connection refused"));

    let err = get_posts(&client).await.unwrap_err();

    assert_eq!(err.to_string(), "connection refused");
    assert_eq!(client.post.find_many.call_count(), 1);
}

#[tokio::test]
async fn test_get_post_by_id_should_throw_an_error() {
    let client = MockClient::new();
    client
        .post
        .find_unique
        .mock_implementation(|_| Err(ClientError::query("There was an error.")));

    let result = get_post_by_id(&client, 1).await;
    assert!(result.is_err());

    let err = get_post_by_id(&client, 1).await.unwrap_err();
    assert_eq!(err.to_string(), "There was an error.");
    assert_eq!(client.post.find_unique.call_count(), 2);
}

#[tokio::test]
async fn test_get_post_by_id_not_found_is_an_error() {
    let client = MockClient::new();
    client
        .post
        .find_unique
        .mock_rejected_value(ClientError::not_found("No Post found"));

    let err = get_post_by_id(&client, 200).await.unwrap_err();

    assert!(err.is_not_found());
    assert!(client.post.find_unique.was_called_with(&200));
}

#[tokio::test]
async fn test_get_post_by_id_returns_the_post() -> Result<(), ClientError> {
    let client = MockClient::new();
    client.post.find_unique.mock_resolved_value(sample_post());

    let post = get_post_by_id(&client, 1).await?;

    assert_eq!(post, sample_post());
    Ok(())
}

#[tokio::test]
async fn test_add_post_returns_new_post_and_total_count() -> Result<(), ClientError> {
    let client = MockClient::new();
    let mock_post = PostCreate::new(1, "title").with_content("content");
    let expected = NewPostWithCount {
        new_post: sample_post(),
        count: 100,
    };
    client.post.create.mock_resolved_value(expected.new_post.clone());
    client.post.count.mock_resolved_value(expected.count);
    client.mock_transaction_with_self();

    let data = add_post(&client, mock_post).await?;

    assert!(data.new_post.published);
    assert_eq!(data, expected);
    assert_eq!(client.transaction.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_add_post_forces_published_on_the_created_post() -> Result<(), ClientError> {
    let client = MockClient::new();
    client.mock_transaction_with_self();
    // Echo the input back so the stored flag is what the facade sent.
    client.post.create.mock_implementation(|data: PostCreate| {
        Ok(Post {
            id: 7,
            title: data.title,
            content: data.content,
            published: data.published.unwrap_or(false),
            author_id: data.author_id,
        })
    });
    client.post.count.mock_resolved_value(1);

    let draft = PostCreate::new(3, "draft").with_published(false);
    let data = add_post(&client, draft).await?;

    assert!(data.new_post.published);
    let sent = client.post.create.last_call().expect("create was called");
    assert_eq!(sent.published, Some(true));
    assert_eq!(sent.author_id, 3);
    Ok(())
}

#[tokio::test]
async fn test_add_post_serializes_camel_case() -> Result<(), ClientError> {
    let client = MockClient::new();
    client.mock_transaction_with_self();
    client.post.create.mock_resolved_value(sample_post());
    client.post.count.mock_resolved_value(100);

    let data = add_post(&client, PostCreate::new(1, "title")).await?;
    let json = serde_json::to_value(&data).expect("serialize result");

    assert_eq!(json["newPost"]["published"], true);
    assert_eq!(json["count"], 100);
    Ok(())
}

#[tokio::test]
async fn test_add_post_create_failure_skips_count() {
    let client = MockClient::new();
    client.mock_transaction_with_self();
    client
        .post
        .create
        .mock_rejected_value(ClientError::query("Foreign key constraint failed"));
    client.post.count.mock_resolved_value(1);

    let err = add_post(&client, PostCreate::new(99, "orphan"))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Foreign key constraint failed");
    assert!(!client.post.count.was_called());
}

#[tokio::test]
async fn test_add_post_with_async_count() -> Result<(), ClientError> {
    let client = MockClient::new();
    client.mock_transaction_with_self();
    client.post.create.mock_resolved_value(sample_post());
    client.post.count.mock_async_implementation(|()| async {
        tokio::task::yield_now().await;
        Ok(12)
    });

    let data = add_post(&client, PostCreate::new(1, "title")).await?;

    assert_eq!(data.count, 12);
    Ok(())
}

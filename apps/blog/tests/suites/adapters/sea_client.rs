use blog::client::{DataClient, SeaClient, TransactionClient};
use blog::models::{PostCreate, PostFilter, UserCreate, UserUpdate};
use blog::ClientError;
use blog_test_support::unique_helpers::unique_email;

use crate::support::{memory_db, seed_user};

#[tokio::test]
async fn test_create_user_and_update_roundtrip() -> Result<(), ClientError> {
    let db = memory_db().await;
    let client = SeaClient::new(&db);

    let email = unique_email("fan");
    let created = client
        .create_user(UserCreate::new(&email).with_name("Prisma Fan"))
        .await?;
    assert!(created.id > 0, "User ID should be positive");
    assert_eq!(created.email, email);
    assert_eq!(created.name.as_deref(), Some("Prisma Fan"));

    let renamed = client
        .update_user(created.id, UserUpdate::new().with_name("Renamed"))
        .await?;
    assert_eq!(renamed.id, created.id);
    assert_eq!(renamed.email, email);
    assert_eq!(renamed.name.as_deref(), Some("Renamed"));

    // An empty patch reads the row back unchanged
    let same = client.update_user(created.id, UserUpdate::new()).await?;
    assert_eq!(same, renamed);
    Ok(())
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() -> Result<(), ClientError> {
    let db = memory_db().await;
    let client = SeaClient::new(&db);
    let email = unique_email("duplicate-test");

    client.create_user(UserCreate::new(&email)).await?;
    let err = client.create_user(UserCreate::new(&email)).await.unwrap_err();

    assert!(
        matches!(err, ClientError::Conflict(_)),
        "expected conflict, got {err:?}"
    );
    Ok(())
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let db = memory_db().await;
    let client = SeaClient::new(&db);

    let err = client
        .update_user(999_999, UserUpdate::new().with_name("ghost"))
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "expected not found, got {err:?}");

    let err = client
        .update_user(999_999, UserUpdate::new())
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "expected not found, got {err:?}");
}

#[tokio::test]
async fn test_posts_filter_count_and_delete() -> Result<(), ClientError> {
    let db = memory_db().await;
    let client = SeaClient::new(&db);
    let alice = seed_user(&db, "alice").await?;
    let bob = seed_user(&db, "bob").await?;

    let first = client
        .create_post(PostCreate::new(alice.id, "first").with_content("hello"))
        .await?;
    assert!(first.published, "published defaults to true");
    client
        .create_post(PostCreate::new(alice.id, "draft").with_published(false))
        .await?;
    client.create_post(PostCreate::new(bob.id, "bob's")).await?;

    assert_eq!(client.count_posts().await?, 3);

    let published = client.find_posts(PostFilter::published(true)).await?;
    assert_eq!(published.len(), 2);
    assert!(published.iter().all(|p| p.published));

    let alice_drafts = client
        .find_posts(PostFilter {
            published: Some(false),
            author_id: Some(alice.id),
        })
        .await?;
    assert_eq!(alice_drafts.len(), 1);
    assert_eq!(alice_drafts[0].title, "draft");

    let removed = client.delete_posts(PostFilter::by_author(alice.id)).await?;
    assert_eq!(removed, 2);
    assert_eq!(client.count_posts().await?, 1);
    assert_eq!(client.find_posts(PostFilter::all()).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_find_post_by_id() -> Result<(), ClientError> {
    let db = memory_db().await;
    let client = SeaClient::new(&db);
    let author = seed_user(&db, "author").await?;
    let created = client
        .create_post(PostCreate::new(author.id, "title"))
        .await?;

    let found = client.find_post(created.id).await?;
    assert_eq!(found, created);

    let err = client.find_post(created.id + 100).await.unwrap_err();
    assert!(err.is_not_found());
    Ok(())
}

#[tokio::test]
async fn test_post_for_missing_author_is_rejected() {
    let db = memory_db().await;
    let client = SeaClient::new(&db);

    let result = client.create_post(PostCreate::new(12_345, "orphan")).await;
    assert!(result.is_err(), "foreign key should reject orphan post");
}

#[tokio::test]
async fn test_transaction_commits_on_ok() -> Result<(), ClientError> {
    let db = memory_db().await;
    let client = SeaClient::new(&db);
    let author = seed_user(&db, "author").await?;
    let author_id = author.id;

    let count = client
        .transaction(move |tx| {
            Box::pin(async move {
                tx.create_post(PostCreate::new(author_id, "in txn")).await?;
                tx.count_posts().await
            })
        })
        .await?;

    assert_eq!(count, 1);
    assert_eq!(client.count_posts().await?, 1);
    Ok(())
}

#[tokio::test]
async fn test_transaction_rolls_back_on_err() -> Result<(), ClientError> {
    let db = memory_db().await;
    let client = SeaClient::new(&db);
    let author = seed_user(&db, "author").await?;
    let author_id = author.id;

    let err = client
        .transaction(move |tx| {
            Box::pin(async move {
                tx.create_post(PostCreate::new(author_id, "doomed")).await?;
                Err::<(), _>(ClientError::query("abort"))
            })
        })
        .await
        .unwrap_err();

    assert_eq!(err, ClientError::query("abort"));
    assert_eq!(client.count_posts().await?, 0);
    Ok(())
}

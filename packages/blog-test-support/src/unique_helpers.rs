//! Unique fixture data.
//!
//! `users.email` carries a unique index, so fixtures that create users in a
//! shared database derive their email from the author's display name plus a
//! ULID.

use ulid::Ulid;

/// Lowercase `name`, collapsing every run of non-alphanumerics into one `-`.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.is_empty() && !out.ends_with('-') {
            out.push('-');
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        "user".to_string()
    } else {
        trimmed.to_string()
    }
}

/// A unique email for an author named `name`: `{slug}-{ulid}@example.test`.
///
/// ```
/// use blog_test_support::unique_helpers::unique_email;
///
/// let email = unique_email("Sabin Adams");
/// assert!(email.starts_with("sabin-adams-"));
/// assert!(email.ends_with("@example.test"));
/// assert_ne!(email, unique_email("Sabin Adams"));
/// ```
pub fn unique_email(name: &str) -> String {
    format!("{}-{}@example.test", slug(name), Ulid::new().to_string().to_lowercase())
}

/// A unique post title, readable in failure output.
pub fn unique_title(topic: &str) -> String {
    format!("{} #{}", topic.trim(), Ulid::new())
}

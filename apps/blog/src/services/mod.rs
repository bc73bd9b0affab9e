//! Data-access facade: thin CRUD operations over an injected client.
//!
//! Every operation returns the client's `ClientError` unchanged.

pub mod posts;
pub mod users;

pub use posts::{add_post, get_post_by_id, get_posts};
pub use users::{create_user, update_user};

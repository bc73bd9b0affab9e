//! Domain models and input DTOs shared by every client implementation.

pub mod posts;
pub mod users;

pub use posts::{NewPostWithCount, Post, PostCreate, PostFilter, PostsByState};
pub use users::{User, UserCreate, UserUpdate};

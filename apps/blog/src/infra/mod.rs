//! Infrastructure layer - database connection bootstrap.

pub mod db;

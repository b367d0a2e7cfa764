//! Core domain types and models

pub mod article;
pub mod errors;

pub use article::{Article, ARTICLE_AUTHOR, MIN_CONTENT_LEN};
pub use errors::{MigrateError, Result};

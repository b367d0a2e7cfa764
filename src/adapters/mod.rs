//! External integrations

pub mod kb;

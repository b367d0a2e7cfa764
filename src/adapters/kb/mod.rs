//! Knowledge base adapter

pub mod client;

pub use client::{KbClient, PublishOutcome};

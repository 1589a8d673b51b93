//! HTTP handlers

pub mod health;
pub mod insight;
pub mod root;

//! Fetch LeetCode problems over GraphQL and REST, then print them or
//! generate a markdown description plus starter code on disk.

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod style;

pub use error::{Error, Result};

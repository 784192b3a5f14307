//! Common types and utilities shared across shelfsim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The [`ItemId`] identifier

pub mod config;
pub mod error;
mod item_id;

pub use error::{Error, Result};
pub use item_id::ItemId;

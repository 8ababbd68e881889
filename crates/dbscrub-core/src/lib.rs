//! Core types for dbscrub
//!
//! This crate contains:
//! - The shared error type
//! - `FileContent`, the text of the target file at a point in time
//! - Lossy UTF-8 decoding

pub mod content;
pub mod error;

pub use content::{FileContent, decode_lossy};
pub use error::{Error, Result};

//! Lectern Core — shared types, traits, and errors.
//!
//! This crate provides the foundational types used across all Lectern crates.
//! It has no internal Lectern dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`traits`]: Provider traits for configuration and slide content

#![doc = include_str!("../README.md")]

pub mod error;
pub mod traits;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use traits::{ConfigProvider, DeckProvider, TopicInfo};

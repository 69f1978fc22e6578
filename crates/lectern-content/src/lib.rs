//! Slide content tables for presentation frontends.
//!
//! This crate owns the data a slide renderer consumes: topic keys mapped
//! to ordered sequences of [`Slide`] records.
//!
//! # Features
//!
//! - Immutable [`ContentTable`] with validated invariants
//! - The built-in Practical Frontend table ([`builtin::practical_frontend`])
//! - Loading and exporting tables as JSON or TOML ([`loader`])
//! - Inline markup inspection ([`markup`])

#![doc = include_str!("../README.md")]

pub mod builtin;
pub mod loader;
pub mod markup;
pub mod slide;
pub mod table;

pub use builtin::practical_frontend;
pub use slide::Slide;
pub use table::{ContentTable, ContentTableBuilder};

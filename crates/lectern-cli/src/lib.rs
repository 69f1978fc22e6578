//! Command-line front end for Lectern content tables.
//!
//! # Key Abstractions
//!
//! - [`LecternCli<C>`](app::LecternCli): CLI application parameterized over a
//!   [`ConfigProvider`](lectern_core::ConfigProvider)
//! - [`LecternConfig`](config::LecternConfig): TOML + env configuration

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod deck_handlers;

#[cfg(test)]
pub(crate) mod testing;

pub use app::LecternCli;
pub use cli::CliArgs;
pub use config::LecternConfig;

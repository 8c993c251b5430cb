//! Command-line front end for Folio.
//!
//! # Key Abstractions
//!
//! - [`FolioCli`]: loads configuration and dispatches commands
//! - [`FolioConfig`]: TOML + environment configuration via `confyg`
//! - [`CliArgs`]: clap argument tree

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod handlers;

pub use app::FolioCli;
pub use cli::CliArgs;
pub use config::FolioConfig;

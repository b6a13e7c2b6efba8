//! Shared types, error model, and configuration for similarscan.
//!
//! This crate is the foundation depended on by the scanner and CLI crates.
//! It provides:
//! - [`ScanError`] — the unified error type
//! - Domain types ([`AppId`], [`GameItem`])
//! - Configuration ([`AppConfig`], [`ScanConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, ScanConfig, TraversalMode, config_dir, config_file_path,
    load_config, load_config_from,
};
pub use error::{Result, ScanError};
pub use types::{AppId, GameItem};

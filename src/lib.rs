//! satchel-cli - Terminal-based personal data manager
//!
//! This library provides the core functionality for satchel-cli, a
//! single-user manager for four independent record collections (notes,
//! tasks, contacts and finance entries) backed by flat JSON files.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The four record types and the record contract
//! - `storage`: JSON file storage layer with atomic rewrites
//! - `csvio`: CSV export/import round trip
//! - `services`: Per-domain operations (CRUD, search, filtering)
//! - `reports`: Finance report generation
//! - `display`: Terminal output formatting
//! - `cli`: Subcommand definitions and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use satchel::config::paths::SatchelPaths;
//! use satchel::storage::Storage;
//!
//! let paths = SatchelPaths::new()?;
//! let mut storage = Storage::new(paths)?;
//! let warnings = storage.load_all();
//! ```

pub mod cli;
pub mod config;
pub mod csvio;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::SatchelError;

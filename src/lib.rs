//! # Basket - seasonal produce browser and projects hub
//!
//! Basket answers "what's good at the market right now?" for a handful of
//! farmers markets, and keeps a small gallery of side projects alongside it.
//! Preferences are stored as JSON snapshots in a `.basket/` directory.
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a new basket project
//! basket init
//!
//! # Pick a market and see what's fresh
//! basket market pike
//! basket produce
//!
//! # Only what is in season, as of November
//! basket produce --persona focus --month nov
//!
//! # Projects hub
//! basket hub list
//! basket hub set p2 --pin
//! ```
//!
//! ## Modules
//!
//! - [`season`]: peak windows, freshness scoring and band charts
//! - [`catalog`]: built-in markets, produce and projects
//! - [`hub`]: project card ordering, personas and dashboard edits
//! - [`search`]: field-aware and regex search
//! - [`storage`]: preference snapshots
//! - [`config`]: `.basket.toml` loading

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.basket.toml` files and project discovery.
pub mod config;

/// Built-in datasets.
pub mod catalog;

/// Error types and result aliases.
///
/// Defines `BasketError` enum and `Result<T>` type alias.
pub mod error;

/// Projects hub logic.
pub mod hub;

pub mod logging;

/// Data models: months, peak windows, catalog records and preference enums.
pub mod model;

pub mod search;

/// Seasonality engine.
pub mod season;

/// Preference snapshot storage.
///
/// Reads and writes whole-object JSON snapshots with per-field fallback.
pub mod storage;

/// Input validation utilities.
pub mod validation;

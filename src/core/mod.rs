//! Core invoice data model, configuration, and formatting.
//!
//! This module provides the typed business records consumed by the
//! document composition engine, the layout configuration with its
//! validation, the pattern-driven formatters, and invoice identity
//! derivation.

mod builder;
mod config;
mod error;
pub mod format;
mod identity;
mod types;

pub use builder::*;
pub use config::*;
pub use error::*;
pub use format::{DatePattern, DecimalPattern, DecimalSymbols, PatternError};
pub use identity::*;
pub use types::*;

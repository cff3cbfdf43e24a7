//! flashback-cli library
//!
//! This module exports the CLI building blocks for use in integration
//! tests and as a library.

pub mod config;
pub mod store;
pub mod terminal;

// WiPose 📡 AGPL-3.0 License - https://github.com/wipose/wipose

//! CLI module for generating mock predictions.
//!
//! This module contains the command-line interface logic, including argument
//! parsing and the `mock` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Logging macros and verbosity state.
pub mod logging;

/// Mock generation logic.
pub mod mock;

//! Gomii package deployment library
//!
//! Provides the download-and-store routine behind the `gomii-deploy` CLI.

pub mod commands;
pub mod core;
pub mod error;
pub mod logging;

//! Tool Crab
//!
//! A small HTTP front-end for a handful of command-line utilities: `dig`, `mkpasswd`, `pwgen`
//! and `uuidgen`. Each [API endpoint][crate::api] decodes a JSON payload, builds the utility's
//! argument vector, runs it and returns what it printed.
//!
#![warn(clippy::pedantic)]

pub mod api;
#[doc(hidden)]
pub mod banner;
pub mod config;
pub mod error;
pub mod runner;
pub mod tools;

pub use config::{Config, SharedConfig, ToolPaths};
pub use runner::{DynRunner, Execution, ProcessRunner, Runner};
pub use tools::ToolResult;

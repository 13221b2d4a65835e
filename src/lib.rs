//! Groundwork - Build-Phase Provisioning Runner
//!
//! Prepares a deployment environment by running a fixed sequence of
//! external-tool invocations, fail-fast, propagating the first non-zero
//! exit code verbatim.

pub mod cli;
pub mod config;
pub mod error;
pub mod provision;
pub mod ui;

pub use error::{GroundworkError, GroundworkResult};

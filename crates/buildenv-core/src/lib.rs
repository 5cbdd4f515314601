//! Core types for buildenv.
//!
//! This crate provides the error type, tooling configuration, logging setup
//! and the raw-input validation primitives that every configuration
//! aggregate in the workspace is built on.

pub mod config;
pub mod error;
pub mod input;
pub mod logging;

pub use crate::config::{BuildenvConfig, UnknownEnumPolicy, ValidationPolicy};
pub use crate::error::{ModelError, ModelResult};
pub use crate::input::{normalize, Aggregate, Input, RawMapping};
pub use crate::logging::{init_logging, LogLevel};

//! Validated build environment configuration.
//!
//! This crate bundles the build environment aggregates with the tooling
//! around them: documents on disk, strict validation and the `buildenv`
//! command-line tool.

pub use buildenv_core::{init_logging, BuildenvConfig, LogLevel, UnknownEnumPolicy};

pub use buildenv_model::{
    load_environment, Aggregate, Input, ModelError, ModelResult, ProjectEnvironment, RawMapping,
    Validate, ValidationPolicy, WireShape,
};

/// Version of the buildenv system
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// src/config/mod.rs

//! Configuration loading and validation for schedviz.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk, falling back to defaults (`loader.rs`).
//! - Validate layout and operation-style settings (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, load_or_default};
pub use model::{
    ConfigFile, InputSection, LayoutSection, OperationStyle, RawConfigFile, RawOperationStyle,
};

//! Configuration file parsing and validation

pub mod bumpver_toml;

pub use bumpver_toml::{BumpverMeta, CONFIG_FILE, Config};

//! Test utilities for bumpver integration tests

use std::fs;
use tempfile::TempDir;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}

/// Creates a scratch project with a manifest and, optionally, a lockfile
#[allow(dead_code)]
pub fn project(manifest: &str, lockfile: Option<&str>) -> TestResult<TempDir> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("Cargo.toml"), manifest)?;
    if let Some(lockfile) = lockfile {
        fs::write(dir.path().join("Cargo.lock"), lockfile)?;
    }
    Ok(dir)
}

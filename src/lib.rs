pub mod cli;
pub mod commands;
pub mod comparator;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod review;
pub mod tools;

pub use error::{CpdGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_WARNINGS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

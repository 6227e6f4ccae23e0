//! Shared library for `CourseAdvisor`
//! Contains the advising and enrollment rule engine used by the CLI.

pub mod core;
pub mod logger;

pub use core::config;
pub use core::get_version;

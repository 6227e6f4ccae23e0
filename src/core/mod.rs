//! Core module: catalog, student records, advising and catalog loading

pub mod advising;
pub mod config;
pub mod loader;
pub mod models;

/// Returns the current version of the `CourseAdvisor` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! rubric-core
//!
//! Core library for static rubric grading of zipped student web projects.
//!
//! This crate defines the statistics model, archive indexing, the per-file-type
//! content scanners, rubric evaluation, and the batch driver plus CSV report.
//!
//! All substantive logic lives here so it is fully testable and reusable from
//! multiple frontends; the `web-rubric` CLI is a thin wrapper.

pub mod archive;
pub mod model;
pub mod report;
pub mod rubric;
pub mod scan;
pub mod services;

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

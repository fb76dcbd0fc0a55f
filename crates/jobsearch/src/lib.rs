//! Searchable, paginated read access to batch job instances.
//!
//! Instance rows are written by an external batch framework; this crate only
//! counts and pages through them.

pub mod config;
pub mod db;
pub mod error;
pub mod jobs;

pub use error::JobSearchError;
pub use jobs::{JobInstance, JobInstanceRepo, JobInstanceStore, SearchableJobInstances};

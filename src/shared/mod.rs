//! Utilities built on top of the index: glob lookup, duplicate names and sampling.

pub mod duplicates;
pub mod glob;
pub mod sample;

pub use duplicates::{DuplicateNames, find_duplicate_names};
pub use glob::{find_files, is_glob_pattern};
pub use sample::{PlannedCopy, SampleReport, SampleRequest, sample_and_copy};

//! Batch operations over exam directories.

pub mod convert;
pub mod explanations;
pub mod files;
pub mod manifest;
pub mod validate;

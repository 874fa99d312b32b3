//! Turning a search tree into summary tables and consolidated artifacts.

pub mod consolidate;
pub mod stats;

pub use consolidate::compile_metadata;
pub use stats::compile_statistics;

//! CLI command implementations.
//!
//! The binary currently exposes a single operation: summarizing a results
//! directory into a statistics workbook and consolidated metadata
//! artifacts. The command owns orchestration and fatal-error phrasing;
//! the library modules it calls stay silent about process concerns.

pub mod summarize;

pub use summarize::{run, SummarizeOptions};

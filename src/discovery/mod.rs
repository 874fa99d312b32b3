//! Locating per-geography result directories and the artifacts inside them.

pub mod resolver;
pub mod tree;

pub use resolver::resolve_geographies;
pub use tree::build_search_tree;

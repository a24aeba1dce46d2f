pub mod editing;
pub mod parsing;
pub mod select;

// Re-export key types for easier usage
pub use editing::Document;
pub use parsing::{ParsedDoc, parse_document};
pub use select::{ExpandState, LineOffsets, SelectionExpander};

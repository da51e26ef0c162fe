//! Integer range utilities
//!
//! - `codec`: compress a set of episode numbers into singletons and
//!   half-open spans, and expand them back
//! - `format`: render a sorted list of episode numbers as `"2-4, 7"`

pub mod codec;
pub mod format;

// Re-export main range functions
pub use codec::{compress, decompress, CompressedRange};
pub use format::format_ranges;

//! Receipt-code parsing and range compression

pub mod code;
pub mod ranges;

pub use code::*;
pub use ranges::*;

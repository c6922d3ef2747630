//! Command implementations
//!
//! - `html`: Save the comparison as an HTML page
//! - `show`: Print the comparison as two colored columns

pub mod html;
pub mod show;

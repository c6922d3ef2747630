//! Diff data structures, algorithms and presentation
//!
//! - `core`: Shared utilities (pager output)
//! - `diff`: Line alignment, classification and row assembly
//! - `render`: HTML and terminal renderers

pub mod core;
pub mod diff;
pub mod render;

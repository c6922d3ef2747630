//! Presentation of assembled rows
//!
//! - `html`: a standalone HTML page with one table row per diff row
//! - `terminal`: two colored columns for the console
//!
//! Both renderers only map markers to styling; the rows come from
//! `diff::rows`.

pub mod html;
pub mod terminal;

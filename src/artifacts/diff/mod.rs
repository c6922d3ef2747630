//! Line diff engine
//!
//! This module turns two sequences of lines into a classified, side-by-side
//! diff:
//!
//! - `lcs`: longest common subsequence tables (lines or characters)
//! - `diff_algorithm`: the `DiffAlgorithm` trait and the LCS-driven line diff
//! - `classifier`: resolves non-anchor lines into changed, deleted or inserted
//! - `rows`: interleaves both classified sides into rows for rendering
//! - `line_diff`: the marker, line entry and alignment types
//! - `error`: engine errors
//!
//! ## Debug Logging
//!
//! Build with `--features debug_diff` to trace the backtracker, classifier
//! and row assembly on stderr.

/// Macro for debug logging that is enabled with the debug_diff feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("classify: old[{}] deleted", index);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_diff")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod classifier;
pub mod diff_algorithm;
pub mod error;
pub mod lcs;
pub mod line_diff;
pub mod rows;

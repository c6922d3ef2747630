//! Side-by-side line diff of two texts.
//!
//! ```rust,ignore
//! let alignment = diff_lines(&old_lines, &new_lines)?;
//! let rows = assemble_rows(&alignment)?;
//! let page = render_page(&rows);
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;

//! Inputs and the objects that drive a comparison
//!
//! - `workspace`: Reading and normalizing text files
//! - `comparator`: Owns the two inputs, caches the diff and feeds the renderers

pub mod comparator;
pub mod workspace;

//! Fragment loading and merging
//!
//! Fragments are read in caller order and overlaid top-level key by key,
//! later fragments taking precedence.

pub mod loader;
pub mod merge;

pub use loader::load_fragment;
pub use merge::{merge, merge_fragments, overlay};

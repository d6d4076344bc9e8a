//! toml-assembler: build one Alacritty config from ordered TOML fragments
//!
//! Fragments are merged shallowly: each top-level key takes the value from the
//! last fragment that defines it, with no recursion into nested tables.

pub mod config;
pub mod domain;
pub mod error;
pub mod render;

pub use config::{load_fragment, merge, merge_fragments, overlay};
pub use domain::{ConfigFragment, MergedConfig, DEFAULT_INPUTS, DEFAULT_OUTPUT};
pub use error::AssembleError;
pub use render::{render, save};

//! Output rendering for the assembled config

pub mod config_file;

pub use config_file::{render, save};

//! Core types shared by the loader, the merger and the writer

/// One parsed input document.
pub type ConfigFragment = toml::Table;

/// Accumulated result of overlaying fragments in order.
///
/// Tables are insertion-ordered, so a key stays where it was first seen even
/// when a later fragment replaces its value.
pub type MergedConfig = toml::Table;

/// Fragments merged when no inputs are given, lowest precedence first.
pub const DEFAULT_INPUTS: [&str; 3] =
    ["./configs/basic.toml", "./configs/keybindings.toml", "./themes/catppuccin-macchiato.toml"];

/// Where the assembled config is written when no output is given.
pub const DEFAULT_OUTPUT: &str = "./alacritty.toml";

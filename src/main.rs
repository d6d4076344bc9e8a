//! toml-assembler: merge TOML fragments into a single Alacritty config
//!
//! Reads the base settings, keybindings and color theme fragments in order and
//! writes the shallow-merged result to `alacritty.toml`.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}

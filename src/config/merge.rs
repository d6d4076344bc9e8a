//! Fragment merging
//!
//! Overlay semantics are shallow: a top-level key present in a later fragment
//! replaces the earlier value wholesale, tables included.

use super::loader::load_fragment;
use crate::domain::{ConfigFragment, MergedConfig};
use crate::error::Result;
use std::path::Path;

/// Load every path in order and merge the fragments, last one winning.
///
/// Any load failure aborts the whole merge; nothing is written anywhere.
pub fn merge<P: AsRef<Path>>(paths: &[P]) -> Result<MergedConfig> {
    let fragments =
        paths.iter().map(|p| load_fragment(p.as_ref())).collect::<Result<Vec<_>>>()?;
    Ok(merge_fragments(fragments))
}

/// Fold already-parsed fragments into one config.
pub fn merge_fragments<I>(fragments: I) -> MergedConfig
where
    I: IntoIterator<Item = ConfigFragment>,
{
    let mut merged = MergedConfig::new();
    for fragment in fragments {
        overlay(&mut merged, fragment);
    }
    merged
}

/// Overlay one fragment's top-level pairs onto the accumulator.
pub fn overlay(acc: &mut MergedConfig, fragment: ConfigFragment) {
    for (key, value) in fragment {
        if acc.insert(key.clone(), value).is_some() {
            tracing::debug!("Key '{}' overridden by later fragment", key);
        }
    }
}

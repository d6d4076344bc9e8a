//! Error type for loading, merging and saving fragments

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    #[error("Failed reading config fragment: {}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid TOML syntax: {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed writing assembled config: {}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The serializer rejected a value, e.g. a datetime with no components.
    #[error("Failed serializing assembled config")]
    Serialize(#[from] toml::ser::Error),
}

impl AssembleError {
    /// A source fragment was missing, unreadable or not valid TOML.
    pub fn is_load(&self) -> bool {
        matches!(self, Self::Load { .. } | Self::Parse { .. })
    }

    /// The assembled config could not be rendered or written out.
    pub fn is_save(&self) -> bool {
        matches!(self, Self::Save { .. } | Self::Serialize(_))
    }
}

pub type Result<T> = std::result::Result<T, AssembleError>;

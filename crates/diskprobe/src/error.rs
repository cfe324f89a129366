use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type ProbeResult<T> = std::result::Result<T, ProbeError>;

/// Failures observed while reading the block device tree, the udev database
/// or the mount table.
///
/// None of these abort a scan. They are logged where they happen and the
/// affected field falls back to zero or the `"unknown"` sentinel.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("cannot access {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse {} ({content:?}): {reason}", path.display())]
    Parse {
        path: PathBuf,
        content: String,
        reason: String,
    },
}

impl ProbeError {
    pub(crate) fn access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ProbeError::Access {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(
        path: impl Into<PathBuf>,
        content: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        ProbeError::Parse {
            path: path.into(),
            content: content.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_access(&self) -> bool {
        matches!(self, ProbeError::Access { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, ProbeError::Parse { .. })
    }
}

use chrono::{DateTime, Local};
use std::path::PathBuf;

/// One direct entry of the source directory.
///
/// `modified` is only populated for regular files; directories and
/// entries whose metadata could not be read carry `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Bare entry name, as listed by the directory
    pub name: String,

    /// Full path (source directory joined with `name`)
    pub path: PathBuf,

    /// True only for regular files (symlinks are resolved first)
    pub is_file: bool,

    /// Last-modified time in local wall-clock time
    pub modified: Option<DateTime<Local>>,
}

impl CandidateFile {
    /// A regular file with a known modification time.
    pub fn file(
        name:     impl Into<String>,
        path:     impl Into<PathBuf>,
        modified: DateTime<Local>,
    ) -> Self {
        Self {
            name:     name.into(),
            path:     path.into(),
            is_file:  true,
            modified: Some(modified),
        }
    }

    /// Anything that is not a regular file: directories, sockets,
    /// dangling links.
    pub fn other(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name:     name.into(),
            path:     path.into(),
            is_file:  false,
            modified: None,
        }
    }
}

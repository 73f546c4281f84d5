// ============================================================
// Layer 4 - Directory Lister
// ============================================================
// Lists the direct entries of one directory. Subdirectories are
// reported (as non-files) but never descended into.
//
// Metadata handling mirrors a plain "is this a file?" check:
//   - metadata is read through symlinks (fs::metadata, not
//     symlink_metadata), so a link to a file counts as a file
//   - if metadata cannot be read at all, the entry is simply
//     "not a file" and will be filtered out
//   - once an entry IS a regular file, failing to read its
//     modification time is a fatal error

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::{ffi::OsStr, fs, path::PathBuf};

use crate::domain::candidate::CandidateFile;
use crate::domain::traits::CandidateSource;

/// Lists a single directory's entries as CandidateFiles.
pub struct DirectoryLister {
    dir: PathBuf,

    /// Sort entries by name instead of keeping listing order
    sort_by_name: bool,
}

impl DirectoryLister {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), sort_by_name: false }
    }

    /// Visit entries in lexicographic name order.
    pub fn sorted(mut self, sort_by_name: bool) -> Self {
        self.sort_by_name = sort_by_name;
        self
    }
}

impl CandidateSource for DirectoryLister {
    fn candidates(&self) -> Result<Vec<CandidateFile>> {
        let mut out = Vec::new();

        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Cannot read directory '{}'", self.dir.display()))?
        {
            let entry = entry
                .with_context(|| format!("Cannot list entry in '{}'", self.dir.display()))?;
            let name  = entry_name(&entry.file_name());
            let path  = entry.path();

            let candidate = describe(name, path)?;
            tracing::debug!(
                "Listed '{}' (file: {})",
                candidate.name,
                candidate.is_file
            );
            out.push(candidate);
        }

        if self.sort_by_name {
            out.sort_by(|a, b| a.name.cmp(&b.name));
        }

        Ok(out)
    }
}

/// Entry name as UTF-8; invalid sequences become U+FFFD.
fn entry_name(raw: &OsStr) -> String {
    match raw.to_str() {
        Some(name) => name.to_owned(),
        None => {
            let lossy = raw.to_string_lossy().into_owned();
            tracing::debug!("Entry name {:?} is not valid UTF-8, using '{}'", raw, lossy);
            lossy
        }
    }
}

/// Build a CandidateFile for one entry.
fn describe(name: String, path: PathBuf) -> Result<CandidateFile> {
    match fs::metadata(&path) {
        Ok(meta) if meta.is_file() => {
            let modified = meta
                .modified()
                .with_context(|| format!("Cannot read modification time of '{}'", path.display()))?;
            Ok(CandidateFile::file(name, path, DateTime::<Local>::from(modified)))
        }
        _ => Ok(CandidateFile::other(name, path)),
    }
}

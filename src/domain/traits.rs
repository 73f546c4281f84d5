// ============================================================
// Layer 3 - Core Traits
// ============================================================
// The use case is written against these two traits so that the
// pipeline never touches `std::fs` or XML directly:
//   - DirectoryLister implements CandidateSource
//   - XmlDocumentWriter implements DocumentSink

use anyhow::Result;
use crate::domain::candidate::CandidateFile;
use crate::domain::document::DocumentRecord;

// ─── CandidateSource ─────────────────────────────────────────────────────────
/// Anything that can enumerate the entries to consider for a run.
pub trait CandidateSource {
    /// List every candidate, in the order they should be visited.
    /// Errors here are fatal for the run.
    fn candidates(&self) -> Result<Vec<CandidateFile>>;
}

// ─── DocumentSink ─────────────────────────────────────────────────────────────
/// Anything that can persist the finished, ordered set of records.
pub trait DocumentSink {
    /// Write all records, replacing any previous output.
    fn write_all(&self, records: &[DocumentRecord]) -> Result<()>;
}

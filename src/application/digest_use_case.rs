// ============================================================
// Layer 2 - DigestUseCase
// ============================================================
// One run, start to finish:
//
//   Step 1: List the source directory      (Layer 4 - data)
//   Step 2: Keep files modified today      (Layer 4 - data)
//   Step 3: Decode each file's content     (Layer 4 - data)
//   Step 4: Accumulate indexed records     (Layer 4 - data)
//   Step 5: Serialize and write the XML    (Layer 6 - infra)
//
// Files are handled strictly one at a time in visit order. Any
// filesystem error aborts the run; a file no encoding can decode
// is skipped with a warning.

use anyhow::Result;
use std::path::PathBuf;

use crate::data::{
    accumulator::DocumentAccumulator,
    decoder::{read_with_fallback, CandidateEncoding, DEFAULT_ENCODINGS},
    lister::DirectoryLister,
    recency::RecencyFilter,
};
use crate::domain::traits::{CandidateSource, DocumentSink};
use crate::infra::xml_writer::XmlDocumentWriter;

/// Directory scanned when no other is given
pub const DEFAULT_SOURCE_DIR:  &str = "src";

/// File written when no other is given
pub const DEFAULT_OUTPUT_FILE: &str = "updated_files.xml";

// ─── Run Configuration ───────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub source_dir:   PathBuf,
    pub output_file:  PathBuf,

    /// Assign indices in file-name order instead of listing order
    pub sort_by_name: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source_dir:   PathBuf::from(DEFAULT_SOURCE_DIR),
            output_file:  PathBuf::from(DEFAULT_OUTPUT_FILE),
            sort_by_name: false,
        }
    }
}

/// What a finished run produced, for the CLI to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub output_file: PathBuf,
    pub written:     usize,

    /// Files modified today that no encoding could decode
    pub skipped:     Vec<String>,
}

// ─── DigestUseCase ───────────────────────────────────────────────────────────
pub struct DigestUseCase {
    config:    RunConfig,
    filter:    RecencyFilter,
    encodings: &'static [CandidateEncoding],
}

impl DigestUseCase {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            filter:    RecencyFilter::live(),
            encodings: &DEFAULT_ENCODINGS,
        }
    }

    /// Replace the live clock, e.g. to pin "today" to a date.
    #[cfg(test)]
    pub fn with_filter(mut self, filter: RecencyFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Replace the ordered encoding list.
    #[cfg(test)]
    pub fn with_encodings(mut self, encodings: &'static [CandidateEncoding]) -> Self {
        self.encodings = encodings;
        self
    }

    /// Run against the configured directory and output file.
    ///
    /// `on_skip` is called with the file name as soon as a file is
    /// skipped for failing every encoding, before the output is written.
    pub fn execute(&self, on_skip: impl FnMut(&str)) -> Result<RunReport> {
        let cfg = &self.config;
        tracing::info!("Scanning '{}' for files modified today", cfg.source_dir.display());

        let lister = DirectoryLister::new(&cfg.source_dir).sorted(cfg.sort_by_name);
        let writer = XmlDocumentWriter::new(&cfg.output_file);
        let (written, skipped) = self.run(&lister, &writer, on_skip)?;

        Ok(RunReport {
            output_file: cfg.output_file.clone(),
            written,
            skipped,
        })
    }

    /// The pipeline itself, over any source and sink.
    pub fn run<S, K, F>(&self, source: &S, sink: &K, mut on_skip: F) -> Result<(usize, Vec<String>)>
    where
        S: CandidateSource,
        K: DocumentSink,
        F: FnMut(&str),
    {
        let mut acc = DocumentAccumulator::new();

        for candidate in source.candidates()? {
            if !self.filter.accepts(&candidate) {
                tracing::debug!("Skipping '{}': not a file modified today", candidate.name);
                continue;
            }
            let outcome = read_with_fallback(&candidate.path, self.encodings)?;
            if !acc.accept(&candidate.name, outcome) {
                on_skip(&candidate.name);
            }
        }

        tracing::info!("Collected {} documents", acc.len());

        let (records, skipped) = acc.finish();
        sink.write_all(&records)?;
        Ok((records.len(), skipped))
    }
}

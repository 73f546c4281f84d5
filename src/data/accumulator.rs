// ============================================================
// Layer 4 - Document Accumulator
// ============================================================
// Collects DocumentRecords in visit order. The index counter
// starts at 1 and advances only when a record is appended, so the
// output indices are always 1..=N with no gaps.

use crate::data::decoder::DecodeOutcome;
use crate::domain::document::DocumentRecord;

#[derive(Debug)]
pub struct DocumentAccumulator {
    records:    Vec<DocumentRecord>,
    next_index: usize,

    /// Names of files that no encoding could decode
    skipped:    Vec<String>,
}

impl DocumentAccumulator {
    pub fn new() -> Self {
        Self {
            records:    Vec::new(),
            next_index: 1,
            skipped:    Vec::new(),
        }
    }

    /// Record the decode result for one file and report whether a
    /// record was appended. A `Failed` outcome logs a warning and
    /// leaves the counter alone.
    pub fn accept(&mut self, source: &str, outcome: DecodeOutcome) -> bool {
        match outcome.into_text() {
            Some(text) => {
                self.records.push(DocumentRecord::new(self.next_index, source, text));
                self.next_index += 1;
                true
            }
            None => {
                tracing::warn!("Could not read '{}': no candidate encoding succeeded", source);
                self.skipped.push(source.to_string());
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Hand over the records and the skipped file names.
    pub fn finish(self) -> (Vec<DocumentRecord>, Vec<String>) {
        (self.records, self.skipped)
    }
}

impl Default for DocumentAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================
// Layer 3 - Document Record
// ============================================================
// The unit of output: one source file that was modified today
// and decoded successfully.
//
// Records are only ever created by the DocumentAccumulator, which
// hands out indices 1, 2, 3, ... in the order files were visited.
// A record never exists for a file that failed to decode, so
// `content` is always real text (possibly empty).

/// One `<document>` element of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// 1-based position in the output, dense across the run
    pub index: usize,

    /// The bare filename, written into `<source>`
    pub source: String,

    /// The decoded file text, written into `<document_content>`
    pub content: String,
}

impl DocumentRecord {
    /// Create a new DocumentRecord.
    ///
    /// Example:
    ///   let doc = DocumentRecord::new(1, "notes.txt", "hello");
    pub fn new(index: usize, source: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            index,
            source:  source.into(),
            content: content.into(),
        }
    }
}

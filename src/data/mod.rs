// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything between the source directory and the finished list
// of document records.
//
//   source directory
//       │
//       ▼
//   DirectoryLister     → direct entries, no recursion
//       │
//       ▼
//   RecencyFilter       → regular files modified today (local date)
//       │
//       ▼
//   Content Reader      → bytes → text, trying encodings in order
//       │
//       ▼
//   DocumentAccumulator → indexed DocumentRecords
//
// Each module is responsible for exactly one step.

/// Enumerates the direct entries of the source directory
pub mod lister;

/// Keeps regular files whose local modification date is today
pub mod recency;

/// Ordered-fallback text decoding
pub mod decoder;

/// Assigns dense indices and collects records
pub mod accumulator;

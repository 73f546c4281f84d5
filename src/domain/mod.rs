// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain structs and traits describing what the digest is made of:
//
//   CandidateFile   - one direct entry of the source directory
//   DocumentRecord  - one file that made it into the output
//   traits          - the seams between the pipeline and the
//                     filesystem / serializer
//
// Rules for this layer:
//   - NO file I/O
//   - NO XML or encoding details
//   - Only plain Rust structs, enums, and traits

// A directory entry considered for the digest
pub mod candidate;

// An indexed document destined for the XML output
pub mod document;

// Core abstractions (traits) that other layers implement
pub mod traits;

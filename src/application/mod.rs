// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Orchestrates the other layers for one digest run.
//
// Rules for this layer:
//   - No printing (that's Layer 1)
//   - No direct file access (that's Layer 4 and 6)
//   - Only workflow coordination

// The list → filter → decode → accumulate → write workflow
pub mod digest_use_case;

// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only: each use case wires the data
// and infra layers together for one command. No tokenising
// or file-format logic lives here.

// Full pipeline: corpus → split → dictionary + manifests
pub mod build_use_case;

// Split only: corpus → split.json
pub mod split_use_case;

// Read a dictionary back and summarise it
pub mod inspect_use_case;

//! Core data model.
//!
//! A record is the count of one word in one source. The engine produces one
//! record per successfully read source and never mutates it afterwards.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// Count of the target word in a single source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The source identifier as given by the caller (file path or URL).
    pub source: String,

    /// Whole-token, case-insensitive occurrences of the target word.
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Output document for machine-readable formats: every record plus the
/// grand total across sources.
#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    pub records: Vec<Record>,
    pub total: usize,
}

impl Report {
    /// Build a report from records, summing the total.
    pub fn new(records: Vec<Record>) -> Self {
        let total = records.iter().map(|r| r.count).sum();
        Self { records, total }
    }
}

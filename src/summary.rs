//! Run-level coverage accounting.

use std::collections::HashMap;

/// Counters accumulated over one scan.
#[derive(Debug, Clone, Default)]
pub struct CoverageSummary {
    /// Files parsed and audited.
    pub files_scanned: usize,
    /// Files skipped because they could not be read or parsed.
    pub files_skipped: usize,
    /// Declarations that passed the eligibility filter.
    pub eligible: usize,
    /// Eligible declarations with a leading comment.
    pub documented: usize,
    /// Eligible declarations reported as findings.
    pub undocumented: usize,
    /// Findings per report label ("Class", "Member", ...).
    pub by_label: HashMap<String, usize>,
}

impl CoverageSummary {
    /// Documented share of eligible declarations, in percent. A scan with no
    /// eligible declarations counts as fully covered.
    pub fn coverage_percent(&self) -> f64 {
        if self.eligible == 0 {
            return 100.0;
        }
        self.documented as f64 * 100.0 / self.eligible as f64
    }
}

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Terminal state of one asset in a sorting run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyOutcome {
    Copied,
    SkippedExisting,
    SkippedUnknownType,
    FailedNotFound,
    FailedOther,
}

impl Display for CopyOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let label = match self {
            CopyOutcome::Copied => "copied",
            CopyOutcome::SkippedExisting => "skipped_existing",
            CopyOutcome::SkippedUnknownType => "skipped_unknown_type",
            CopyOutcome::FailedNotFound => "failed_not_found",
            CopyOutcome::FailedOther => "failed_other",
        };
        f.write_str(label)
    }
}

/// Outcome counts for a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub copied: usize,
    pub skipped_existing: usize,
    pub skipped_unknown_type: usize,
    pub failed_not_found: usize,
    pub failed_other: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: CopyOutcome) {
        self.total += 1;
        match outcome {
            CopyOutcome::Copied => self.copied += 1,
            CopyOutcome::SkippedExisting => self.skipped_existing += 1,
            CopyOutcome::SkippedUnknownType => self.skipped_unknown_type += 1,
            CopyOutcome::FailedNotFound => self.failed_not_found += 1,
            CopyOutcome::FailedOther => self.failed_other += 1,
        }
    }

    pub fn failures(&self) -> usize {
        self.failed_not_found + self.failed_other
    }
}

//! Per-image outcomes and batch counters.

use std::fmt;

use super::ImportError;

/// Why an image was left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Extension is not png/jpg/jpeg
    UnsupportedFormat,
    /// Imageset already exists and overwrite is off
    AlreadyExists,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedFormat => f.write_str("unsupported format"),
            Self::AlreadyExists => f.write_str("already exists"),
        }
    }
}

/// Result of importing one source file.
#[derive(Debug)]
pub enum ImportOutcome {
    /// Imageset written; `replaced` when an old one was removed first
    Imported { name: String, replaced: bool },
    /// Nothing written
    Skipped { name: String, reason: SkipReason },
    /// Filesystem failure while writing the imageset
    Failed { name: String, error: ImportError },
}

impl ImportOutcome {
    /// Imageset name (or file name, for unsupported files).
    pub fn name(&self) -> &str {
        match self {
            Self::Imported { name, .. } | Self::Skipped { name, .. } | Self::Failed { name, .. } => {
                name
            }
        }
    }
}

/// Counters for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub success: usize,
    pub skip: usize,
    pub error: usize,
}

impl ImportStats {
    /// Count an outcome.
    pub fn record(&mut self, outcome: &ImportOutcome) {
        match outcome {
            ImportOutcome::Imported { .. } => self.success += 1,
            ImportOutcome::Skipped { .. } => self.skip += 1,
            ImportOutcome::Failed { .. } => self.error += 1,
        }
    }

    /// Number of files processed.
    pub const fn total(&self) -> usize {
        self.success + self.skip + self.error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_record() {
        let mut stats = ImportStats::default();
        stats.record(&ImportOutcome::Imported {
            name: "CountryBadge_CN".into(),
            replaced: false,
        });
        stats.record(&ImportOutcome::Skipped {
            name: "badge.gif".into(),
            reason: SkipReason::UnsupportedFormat,
        });
        stats.record(&ImportOutcome::Skipped {
            name: "CountryBadge_US".into(),
            reason: SkipReason::AlreadyExists,
        });
        stats.record(&ImportOutcome::Failed {
            name: "CountryBadge_JP".into(),
            error: ImportError::InvalidName(PathBuf::from("x")),
        });

        assert_eq!(
            stats,
            ImportStats {
                success: 1,
                skip: 2,
                error: 1
            }
        );
        assert_eq!(stats.total(), 4);
    }

    #[test]
    fn test_skip_reason_display() {
        assert_eq!(SkipReason::UnsupportedFormat.to_string(), "unsupported format");
        assert_eq!(SkipReason::AlreadyExists.to_string(), "already exists");
    }
}

//! Per-image import with side effects (directory creation, copying).

use std::path::Path;

use crate::core::NameMode;
use crate::debug;
use crate::logger::{Status, status};

use super::normalize::{country_code, is_canonical_code, normalize_name, strip_badge_prefix};
use super::scan::is_supported_image;
use super::{Imageset, ImportError, ImportOutcome, ImportStats, SkipReason};

/// Where and how images of one category are imported.
#[derive(Debug, Clone, Copy)]
pub struct ImportOptions<'a> {
    /// Category directory inside the asset catalog
    pub target_dir: &'a Path,
    /// Imageset name prefix (e.g. `CountryBadge_`)
    pub prefix: &'a str,
    pub mode: NameMode,
    /// Replace existing imagesets instead of skipping them
    pub overwrite: bool,
}

/// Imports source images one at a time and keeps the batch counters.
///
/// A failure on one image is recorded and never stops the next one.
pub struct Importer<'a> {
    options: ImportOptions<'a>,
    stats: ImportStats,
}

impl<'a> Importer<'a> {
    pub fn new(options: ImportOptions<'a>) -> Self {
        Self {
            options,
            stats: ImportStats::default(),
        }
    }

    /// Counters accumulated so far.
    pub const fn stats(&self) -> ImportStats {
        self.stats
    }

    /// Import one source image, count and print the outcome.
    pub fn import(&mut self, source: &Path) -> ImportOutcome {
        let outcome = self.process(source);
        self.stats.record(&outcome);
        report(&outcome);
        outcome
    }

    fn process(&self, source: &Path) -> ImportOutcome {
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !is_supported_image(source) {
            return ImportOutcome::Skipped {
                name: file_name,
                reason: SkipReason::UnsupportedFormat,
            };
        }

        let Some(stem) = source.file_stem().and_then(|s| s.to_str()) else {
            return ImportOutcome::Failed {
                name: file_name,
                error: ImportError::InvalidName(source.to_path_buf()),
            };
        };

        let id = self.identifier(stem);
        let imageset = Imageset::new(self.options.target_dir, self.options.prefix, &id);

        let replaced = imageset.exists();
        if replaced {
            if !self.options.overwrite {
                return ImportOutcome::Skipped {
                    name: imageset.name,
                    reason: SkipReason::AlreadyExists,
                };
            }
            status(Status::Replacing, &format!("replacing: {}", imageset.name));
            if let Err(error) = imageset.remove() {
                return ImportOutcome::Failed {
                    name: imageset.name,
                    error,
                };
            }
        }

        match imageset.create(source) {
            Ok(()) => ImportOutcome::Imported {
                name: imageset.name,
                replaced,
            },
            Err(error) => ImportOutcome::Failed {
                name: imageset.name,
                error,
            },
        }
    }

    /// Strip the imageset prefix and normalize the remaining stem.
    fn identifier(&self, stem: &str) -> String {
        let stem = strip_badge_prefix(stem, self.options.prefix);
        if self.options.mode == NameMode::Mapped
            && country_code(stem).is_none()
            && !is_canonical_code(stem)
        {
            debug!("import"; "no country code for `{}`, using name as-is", stem);
        }
        normalize_name(stem, self.options.mode)
    }
}

fn report(outcome: &ImportOutcome) {
    match outcome {
        ImportOutcome::Imported { name, replaced } => {
            let verb = if *replaced { "re-imported" } else { "imported" };
            status(Status::Imported, &format!("{verb}: {name}"));
        }
        ImportOutcome::Skipped { name, reason } => {
            status(Status::Skipped, &format!("skipped ({reason}): {name}"));
        }
        ImportOutcome::Failed { name, error } => {
            status(Status::Failed, &format!("failed: {name} - {}", error.detail()));
        }
    }
}

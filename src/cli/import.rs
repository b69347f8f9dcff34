//! Batch import of one badge category.
//!
//! Validates the source directory, prepares the target directory, imports
//! every image in name order and prints a summary.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use thiserror::Error;

use crate::catalog::{
    ImportOptions, ImportStats, Importer, SUPPORTED_EXTENSIONS, scan_source_images,
};
use crate::config::{CategoryPaths, ImportConfig};
use crate::core::{Category, is_shutdown};
use crate::logger::plain;
use crate::{debug, log};

/// Errors that abort a batch before any image is imported.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("source directory not found: {}", .source_dir.display())]
    SourceMissing {
        category: Category,
        source_root: PathBuf,
        source_dir: PathBuf,
    },

    #[error("cancelled after {processed} of {total} images")]
    Interrupted { processed: usize, total: usize },
}

impl BatchError {
    /// Print guidance on how to fix the error.
    pub fn print_hint(&self) {
        match self {
            Self::SourceMissing {
                category,
                source_root,
                source_dir,
            } => {
                log!("hint"; "create the folder and put the {} badge images in it:", category);
                plain(&format!("{}/", dir_name(source_root)));
                plain(&format!("  {}/", dir_name(source_dir)));
                for sample in category.sample_files() {
                    plain(&format!("    {sample}"));
                }
            }
            Self::Interrupted { .. } => {}
        }
    }
}

fn dir_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Import all images of `category`.
///
/// Per-image failures are counted in the returned stats; only a missing
/// source directory, an unusable target directory or Ctrl+C is an error.
pub fn run_import(
    config: &ImportConfig,
    category: Category,
    overwrite: bool,
) -> Result<ImportStats> {
    let paths = config.category_paths(category);
    log!("import"; "importing {} badges", category);

    if !paths.source_dir.exists() {
        return Err(BatchError::SourceMissing {
            category,
            source_root: paths.source_root,
            source_dir: paths.source_dir,
        }
        .into());
    }

    fs::create_dir_all(&paths.target_dir).with_context(|| {
        format!(
            "failed to create target directory `{}`",
            paths.target_dir.display()
        )
    })?;
    log!("import"; "target ready: {}", paths.target_dir.display());

    let images = scan_source_images(&paths.source_dir)
        .with_context(|| format!("failed to read `{}`", paths.source_dir.display()))?;

    if images.is_empty() {
        log!("warning"; "no images found in {}", paths.source_dir.display());
        log!("warning"; "supported formats: {}", supported_formats());
        return Ok(ImportStats::default());
    }

    log!("import"; "found {}", image_count(images.len()));
    let stats = import_all(&paths, &images, overwrite, is_shutdown);
    if is_shutdown() {
        return Err(BatchError::Interrupted {
            processed: stats.total(),
            total: images.len(),
        }
        .into());
    }
    print_summary(&stats);
    Ok(stats)
}

/// Run the importer over every image, in order, until `cancelled` reports true.
fn import_all(
    paths: &CategoryPaths,
    images: &[PathBuf],
    overwrite: bool,
    cancelled: impl Fn() -> bool,
) -> ImportStats {
    let mut importer = Importer::new(ImportOptions {
        target_dir: &paths.target_dir,
        prefix: &paths.prefix,
        mode: paths.category.name_mode(),
        overwrite,
    });

    for image in images {
        if cancelled() {
            break;
        }
        let outcome = importer.import(image);
        debug!("import"; "{} <- {}", outcome.name(), image.display());
    }

    importer.stats()
}

/// "1 image", "3 images".
fn image_count(n: usize) -> String {
    if n == 1 {
        "1 image".to_owned()
    } else {
        format!("{n} images")
    }
}

fn supported_formats() -> String {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| ext.to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_summary(stats: &ImportStats) {
    println!();
    log!("done"; "processed {}", image_count(stats.total()));
    plain(&format!("imported: {}", stats.success.green()));
    plain(&format!("skipped:  {}", stats.skip.yellow()));
    plain(&format!("errors:   {}", stats.error.red()));

    if stats.success > 0 {
        log!("hint"; "refresh Assets.xcassets in Xcode to see the imported images");
    }
}

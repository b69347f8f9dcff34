//! Source image discovery (pure, no side effects).

use std::path::{Path, PathBuf};

/// Image extensions accepted for import (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Check whether a path has a supported image extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}

/// Scan a flat source directory for importable images
///
/// Returns regular files directly inside `dir` with a supported extension,
/// sorted by file name. Each file appears once regardless of extension case.
/// Subdirectories are not descended into.
///
/// ```text
/// BadgeImages/Countries/
/// ├── CN.png          -> included
/// ├── 中国.PNG        -> included
/// ├── badge.gif       -> ignored
/// └── drafts/         -> ignored
/// ```
pub fn scan_source_images(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut images: Vec<PathBuf> = std::fs::read_dir(dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}

//! Imageset directories inside an asset catalog.
//!
//! ```text
//! CountryBadges/
//! └── CountryBadge_CN.imageset/
//!     ├── 中国.png        (copied source, original file name)
//!     └── Contents.json
//! ```

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

use super::{CONTENTS_FILE, Contents, ImportError};

/// Directory extension Xcode uses for image sets.
pub const IMAGESET_EXTENSION: &str = "imageset";

/// A single imageset entry: `<target_dir>/<name>.imageset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Imageset {
    /// Asset name as referenced from code (e.g. `CountryBadge_CN`)
    pub name: String,
    /// Full path of the `.imageset` directory
    pub dir: PathBuf,
}

impl Imageset {
    /// Build the entry for `prefix + id` under `target_dir`.
    pub fn new(target_dir: &Path, prefix: &str, id: &str) -> Self {
        let name = format!("{prefix}{id}");
        let dir = target_dir.join(format!("{name}.{IMAGESET_EXTENSION}"));
        Self { name, dir }
    }

    /// Path of the imageset's `Contents.json`.
    pub fn contents_path(&self) -> PathBuf {
        self.dir.join(CONTENTS_FILE)
    }

    /// Whether the imageset directory is already present.
    pub fn exists(&self) -> bool {
        self.dir.exists()
    }

    /// Recursively delete the imageset directory.
    pub fn remove(&self) -> Result<(), ImportError> {
        fs::remove_dir_all(&self.dir).map_err(|e| ImportError::RemoveExisting(self.dir.clone(), e))
    }

    /// Create the imageset from `source`: directory, image copy, descriptor.
    ///
    /// The image keeps its original file name and timestamps.
    pub fn create(&self, source: &Path) -> Result<(), ImportError> {
        let filename = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| ImportError::InvalidName(source.to_path_buf()))?;

        fs::create_dir_all(&self.dir).map_err(|e| ImportError::CreateDir(self.dir.clone(), e))?;

        let target = self.dir.join(filename);
        copy_preserving_times(source, &target).map_err(|e| ImportError::Copy {
            from: source.to_path_buf(),
            to: target.clone(),
            source: e,
        })?;

        Contents::for_image(filename).write(&self.contents_path())
    }
}

/// Copy file content, then carry over access/modification times and
/// permissions from `from`.
///
/// Permissions are applied last so a read-only source does not block
/// setting the times on the copy.
fn copy_preserving_times(from: &Path, to: &Path) -> io::Result<()> {
    let mut reader = File::open(from)?;
    let meta = reader.metadata()?;

    let mut writer = File::create(to)?;
    io::copy(&mut reader, &mut writer)?;

    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    writer.set_times(times)?;
    drop(writer);

    fs::set_permissions(to, meta.permissions())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    #[test]
    fn test_naming() {
        let set = Imageset::new(Path::new("/assets/CountryBadges"), "CountryBadge_", "CN");
        assert_eq!(set.name, "CountryBadge_CN");
        assert_eq!(
            set.dir,
            PathBuf::from("/assets/CountryBadges/CountryBadge_CN.imageset")
        );
    }

    #[test]
    fn test_create_copies_image_and_writes_contents() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("中国.png");
        fs::write(&source, b"\x89PNG fake").unwrap();

        let set = Imageset::new(&dir.path().join("out"), "CountryBadge_", "CN");
        set.create(&source).unwrap();

        assert!(set.exists());
        assert_eq!(fs::read(set.dir.join("中国.png")).unwrap(), b"\x89PNG fake");
        let contents = fs::read_to_string(set.dir.join(CONTENTS_FILE)).unwrap();
        assert!(contents.contains("中国.png"));
        assert_eq!(fs::read_dir(&set.dir).unwrap().count(), 2);
    }

    #[test]
    fn test_create_preserves_mtime() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("CN.png");
        fs::write(&source, b"png").unwrap();

        let past = SystemTime::now() - Duration::from_secs(86_400 * 30);
        File::options()
            .write(true)
            .open(&source)
            .unwrap()
            .set_modified(past)
            .unwrap();

        let set = Imageset::new(dir.path(), "CountryBadge_", "CN");
        set.create(&source).unwrap();

        let copied = fs::metadata(set.dir.join("CN.png")).unwrap().modified().unwrap();
        let original = fs::metadata(&source).unwrap().modified().unwrap();
        assert_eq!(copied, original);
    }

    #[test]
    fn test_remove() {
        let dir = TempDir::new().unwrap();
        let set = Imageset::new(dir.path(), "ProvinceBadge_", "北京");
        fs::create_dir_all(set.dir.join("nested")).unwrap();
        fs::write(set.dir.join("old.png"), b"old").unwrap();

        set.remove().unwrap();
        assert!(!set.exists());
    }

    #[test]
    fn test_remove_missing_is_error() {
        let dir = TempDir::new().unwrap();
        let set = Imageset::new(dir.path(), "ProvinceBadge_", "北京");
        assert!(matches!(set.remove(), Err(ImportError::RemoveExisting(..))));
    }

    #[test]
    fn test_create_missing_source_is_copy_error() {
        let dir = TempDir::new().unwrap();
        let set = Imageset::new(dir.path(), "CountryBadge_", "CN");
        let err = set.create(&dir.path().join("CN.png")).unwrap_err();
        assert!(matches!(err, ImportError::Copy { .. }));
    }
}

//! `Contents.json` descriptor written into every imageset.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ImportError;

/// File name of the imageset descriptor.
pub const CONTENTS_FILE: &str = "Contents.json";

const IDIOM_UNIVERSAL: &str = "universal";
const SCALE_1X: &str = "1x";
const AUTHOR: &str = "xcode";
const FORMAT_VERSION: u32 = 1;

/// Imageset descriptor.
///
/// Field order matches what Xcode writes; `serde_json` runs with
/// `preserve_order`, so it is kept on round-trips too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contents {
    pub images: Vec<ImageEntry>,
    pub info: ContentsInfo,
}

/// One image variant of an imageset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentsInfo {
    pub author: String,
    pub version: u32,
}

impl Contents {
    /// Descriptor for a single universal 1x image.
    pub fn for_image(filename: impl Into<String>) -> Self {
        Self {
            images: vec![ImageEntry {
                filename: filename.into(),
                idiom: IDIOM_UNIVERSAL.to_string(),
                scale: SCALE_1X.to_string(),
            }],
            info: ContentsInfo {
                author: AUTHOR.to_string(),
                version: FORMAT_VERSION,
            },
        }
    }

    /// Render as two-space indented JSON, non-ASCII kept literal.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the descriptor to `path`.
    pub fn write(&self, path: &Path) -> Result<(), ImportError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| ImportError::WriteContents(path.to_path_buf(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_json_layout() {
        let json = Contents::for_image("CN.png").to_json().unwrap();
        let expected = r#"{
  "images": [
    {
      "filename": "CN.png",
      "idiom": "universal",
      "scale": "1x"
    }
  ],
  "info": {
    "author": "xcode",
    "version": 1
  }
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_non_ascii_not_escaped() {
        let json = Contents::for_image("中国.png").to_json().unwrap();
        assert!(json.contains(r#""filename": "中国.png""#));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_write() {
        let dir = TempDir::new().unwrap();
        Contents::for_image("北京.jpg")
            .write(&dir.path().join(CONTENTS_FILE))
            .unwrap();

        let written = fs::read_to_string(dir.path().join(CONTENTS_FILE)).unwrap();
        let parsed: Contents = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.images.len(), 1);
        assert_eq!(parsed.images[0].filename, "北京.jpg");
        assert_eq!(parsed.info.version, 1);
        assert!(!written.ends_with('\n'));
    }

    #[test]
    fn test_write_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope").join(CONTENTS_FILE);
        let err = Contents::for_image("CN.png").write(&missing).unwrap_err();
        assert!(matches!(err, ImportError::WriteContents(..)));
    }
}

//! Asset catalog import.
//!
//! # Module Structure
//!
//! ```text
//! catalog/
//! ├── normalize   # file stem -> badge identifier (country name table)
//! ├── scan        # source image discovery (pure)
//! ├── imageset    # .imageset directory creation/removal
//! ├── contents    # Contents.json descriptor
//! ├── process     # per-image import (Importer)
//! ├── stats       # outcomes and counters
//! └── error       # ImportError
//! ```

mod contents;
mod error;
mod imageset;
mod normalize;
mod process;
mod scan;
mod stats;

pub use contents::{CONTENTS_FILE, Contents};
pub use error::ImportError;
pub use imageset::Imageset;
pub use process::{ImportOptions, Importer};
pub use scan::{SUPPORTED_EXTENSIONS, scan_source_images};
pub use stats::{ImportOutcome, ImportStats, SkipReason};

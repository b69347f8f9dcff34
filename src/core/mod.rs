//! Core types shared across the importer.

mod category;
mod state;

pub use category::{Category, CategoryProfile, NameMode};
pub use state::{is_shutdown, setup_shutdown_handler};

// ResuForge - template-driven resume editor and document renderer
//
// This is the library crate containing the data model, state store,
// template catalog, projection/rendering logic and persistence. The
// binary crate (main.rs) provides the CLI shell.

pub mod catalog;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod render;
pub mod state;
pub mod storage;

// Re-export commonly used types for convenience
pub use catalog::TemplateCatalog;
pub use models::{ResumeData, ResumeState, SectionKey};
pub use state::{ResumeStore, StateChange};
pub use storage::{Snapshot, StorageManager};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");

use crate::models::{ResumeData, ResumeState};
use crate::state::ResumeStore;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;
use tokio::sync::broadcast;

/// File name of the single persisted snapshot key.
const SNAPSHOT_FILE: &str = "resume-builder-storage.json";

/// Errors from the import boundary.
///
/// Import is the one storage path whose failures are part of the product
/// contract (a user-facing alert), so it gets a typed error instead of an
/// anyhow chain.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read import file {path}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON file. Please check the file format.")]
    Parse {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The subset of state persisted across restarts.
///
/// Matches the original single-key storage format: aggregate data plus
/// template selection and theme, explicitly excluding transient UI fields
/// (current section, validation errors, auto-save bookkeeping). There is
/// no schema version field; format changes are not migration-safe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub data: ResumeData,
    pub selected_template: String,
    pub is_dark_mode: bool,
    pub accent_color: String,
}

impl Snapshot {
    /// Partialize live state into its persisted subset.
    pub fn capture(state: &ResumeState) -> Self {
        Self {
            data: state.data.clone(),
            selected_template: state.selected_template.clone(),
            is_dark_mode: state.is_dark_mode,
            accent_color: state.accent_color.clone(),
        }
    }

    /// Rehydrate a full state from the persisted subset; transient fields
    /// start at their defaults.
    pub fn restore(self) -> ResumeState {
        ResumeState {
            data: self.data,
            selected_template: self.selected_template,
            is_dark_mode: self.is_dark_mode,
            accent_color: self.accent_color,
            ..ResumeState::default()
        }
    }
}

/// Storage manager for the persisted snapshot and import/export files.
///
/// Owns the single snapshot key plus the JSON import/export paths. There
/// is no cross-process coordination: two instances writing the same
/// snapshot race as last-write-wins.
#[derive(Debug, Clone)]
pub struct StorageManager {
    data_dir: Utf8PathBuf,
    snapshot_path: Utf8PathBuf,
}

impl StorageManager {
    /// Create a new StorageManager rooted at the given data directory.
    ///
    /// The directory is created if it does not exist.
    pub fn new<P: AsRef<Utf8Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();

        if !data_dir.exists() {
            fs::create_dir_all(&data_dir)
                .with_context(|| format!("Failed to create data directory: {data_dir}"))?;
        }

        Ok(Self {
            snapshot_path: data_dir.join(SNAPSHOT_FILE),
            data_dir,
        })
    }

    /// Load the persisted snapshot.
    ///
    /// Returns `Ok(None)` when no snapshot exists yet. A snapshot that
    /// exists but fails to parse is an error - callers decide whether to
    /// fall back to defaults.
    pub fn load_snapshot(&self) -> Result<Option<Snapshot>> {
        if !self.snapshot_path.exists() {
            tracing::warn!(
                "No snapshot found at {}, starting with defaults",
                self.snapshot_path
            );
            return Ok(None);
        }

        let file_contents = fs::read_to_string(&self.snapshot_path)
            .with_context(|| format!("Failed to read snapshot: {}", self.snapshot_path))?;

        let snapshot: Snapshot = serde_json::from_str(&file_contents)
            .with_context(|| format!("Failed to parse snapshot: {}", self.snapshot_path))?;

        tracing::info!("Loaded snapshot from {}", self.snapshot_path);
        Ok(Some(snapshot))
    }

    /// Save the snapshot, replacing any previous one.
    pub fn save_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        let json_string = serde_json::to_string_pretty(snapshot)
            .context("Failed to serialize snapshot to JSON")?;

        fs::write(&self.snapshot_path, json_string)
            .with_context(|| format!("Failed to write snapshot: {}", self.snapshot_path))?;

        tracing::debug!("Saved snapshot to {}", self.snapshot_path);
        Ok(())
    }

    /// Write the aggregate as a standalone export file into `dest_dir`.
    ///
    /// The file carries the raw aggregate (not the wrapped snapshot) and
    /// is named with the template id and current date:
    /// `resume-modern-2026-08-07.json`.
    pub fn export_resume(
        &self,
        data: &ResumeData,
        selected_template: &str,
        dest_dir: &Utf8Path,
    ) -> Result<Utf8PathBuf> {
        let date = chrono::Local::now().format("%Y-%m-%d");
        let path = dest_dir.join(format!("resume-{selected_template}-{date}.json"));

        let json_string =
            serde_json::to_string_pretty(data).context("Failed to serialize resume to JSON")?;

        fs::write(&path, json_string)
            .with_context(|| format!("Failed to write export file: {path}"))?;

        tracing::info!("Exported resume to {path}");
        Ok(path)
    }

    /// Read and parse an import file into a resume aggregate.
    ///
    /// Ids inside the file are preserved verbatim. Parsing is the only
    /// validation performed - anything that deserializes flows into the
    /// store unchecked. On failure the caller's state is untouched.
    pub fn import_resume(&self, path: &Utf8Path) -> Result<ResumeData, ImportError> {
        let file_contents = fs::read_to_string(path).map_err(|source| ImportError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let data: ResumeData =
            serde_json::from_str(&file_contents).map_err(|source| ImportError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::info!("Imported resume from {path}");
        Ok(data)
    }

    /// Spawn a background task that persists a fresh snapshot on every
    /// state change.
    ///
    /// This is the actual durability mechanism; the store's auto-save
    /// indicator is cosmetic. The task ends when the store (and all its
    /// clones) is dropped.
    pub fn spawn_snapshot_writer(&self, store: &ResumeStore) -> tokio::task::JoinHandle<()> {
        let mut rx = store.subscribe();
        let store = store.clone();
        let manager = self.clone();

        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(_) => {
                        let snapshot = Snapshot::capture(&store.snapshot());
                        if let Err(err) = manager.save_snapshot(&snapshot) {
                            tracing::warn!("Snapshot write failed: {err:#}");
                        }
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        // Coalesced writes are fine: the next event persists
                        // the latest state anyway.
                        tracing::debug!("Snapshot writer lagged, skipped {skipped} events");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> &Utf8Path {
        &self.data_dir
    }

    /// Get the snapshot file path.
    pub fn snapshot_path(&self) -> &Utf8Path {
        &self.snapshot_path
    }
}

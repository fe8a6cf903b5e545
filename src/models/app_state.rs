use crate::models::resume::{ResumeData, ValidationError};
use chrono::{DateTime, Local};

/// Default accent color (matches the modern template).
pub const DEFAULT_ACCENT_COLOR: &str = "#3b82f6";

/// Single source of truth for the document being edited plus UI-adjacent
/// state.
///
/// # Thread Safety
///
/// `ResumeState` is wrapped in `Arc<RwLock<ResumeState>>` by
/// [`crate::state::ResumeStore`]. Never hold a reference to it directly -
/// always go through the store:
/// - [`read()`](crate::state::ResumeStore::read) for read-only access
/// - [`update()`](crate::state::ResumeStore::update) for mutations with
///   automatic change events
///
/// # Persistence
///
/// Only a subset survives a restart: `data`, `selected_template`,
/// `is_dark_mode` and `accent_color` are captured into
/// [`crate::storage::Snapshot`]; the remaining fields are transient.
///
/// # Related Types
///
/// - [`crate::state::ResumeStore`]: thread-safe wrapper with event emission
/// - [`crate::state::StateChange`]: event types emitted on mutations
/// - [`crate::storage::StorageManager`]: persists the snapshot subset
#[derive(Clone, Debug)]
pub struct ResumeState {
    /// The persisted aggregate.
    pub data: ResumeData,

    /// Active template id, kept in sync with `data.template_id` by the
    /// template-switch and import operations.
    pub selected_template: String,

    /// Section key currently focused in the editor.
    pub current_section: String,

    // Theme
    pub is_dark_mode: bool,
    pub accent_color: String,

    /// Dead validation hook: settable through the store, never produced by
    /// any validation logic in this snapshot.
    pub validation_errors: Vec<ValidationError>,

    // Auto-save bookkeeping (UX indicator, not a durability mechanism)
    pub is_auto_saving: bool,
    pub last_saved: Option<DateTime<Local>>,
}

impl Default for ResumeState {
    fn default() -> Self {
        Self {
            data: ResumeData::default(),
            selected_template: "modern".to_string(),
            current_section: "contact".to_string(),
            is_dark_mode: false,
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            validation_errors: Vec::new(),
            is_auto_saving: false,
            last_saved: None,
        }
    }
}

impl ResumeState {
    /// Whether any user content has been entered yet.
    ///
    /// Used by shells to decide between "continue editing" and "start
    /// fresh" affordances.
    pub fn has_content(&self) -> bool {
        let d = &self.data;
        d.contact != Default::default()
            || !d.summary.is_empty()
            || !d.experience.is_empty()
            || !d.education.is_empty()
            || !d.skills.is_empty()
            || !d.projects.is_empty()
            || !d.certifications.is_empty()
            || !d.achievements.is_empty()
            || !d.interests.is_empty()
    }

    /// Reset the aggregate to its empty default and drop validation errors.
    ///
    /// Theme and the top-level template selection are deliberately left
    /// untouched; they re-sync on the next template switch or import.
    pub fn clear_data(&mut self) {
        self.data = ResumeData::default();
        self.validation_errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::ExperienceItem;

    #[test]
    fn default_state_is_empty_modern_contact() {
        let state = ResumeState::default();
        assert_eq!(state.selected_template, "modern");
        assert_eq!(state.current_section, "contact");
        assert_eq!(state.accent_color, DEFAULT_ACCENT_COLOR);
        assert!(!state.is_dark_mode);
        assert!(!state.is_auto_saving);
        assert!(state.last_saved.is_none());
        assert!(!state.has_content());
    }

    #[test]
    fn has_content_detects_any_populated_section() {
        let mut state = ResumeState::default();
        state.data.experience.push(ExperienceItem::new());
        assert!(state.has_content());

        let mut state = ResumeState::default();
        state.data.summary = "Engineer".to_string();
        assert!(state.has_content());
    }

    #[test]
    fn clear_data_keeps_selection_and_theme() {
        let mut state = ResumeState::default();
        state.selected_template = "classic".to_string();
        state.is_dark_mode = true;
        state.data.summary = "text".to_string();
        state.validation_errors.push(ValidationError {
            field: "summary".to_string(),
            message: "too long".to_string(),
        });

        state.clear_data();

        assert!(!state.has_content());
        assert!(state.validation_errors.is_empty());
        assert_eq!(state.selected_template, "classic");
        assert!(state.is_dark_mode);
        assert_eq!(state.data.template_id, "modern");
    }
}

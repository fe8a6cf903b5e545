use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Soft cap on the summary length.
///
/// This is an editing-surface limit only: the form projection reports it so
/// a UI can show a character counter, but nothing in the model or store
/// rejects longer text. Matches the original product behavior where the
/// textarea enforced the cap and the model did not.
pub const SUMMARY_SOFT_LIMIT: usize = 600;

/// Stable identifier for a repeatable entity within its owning sequence.
///
/// Stored as a plain string so ids from externally produced import files
/// are preserved verbatim; freshly created entities get a UUIDv4.
pub type EntityId = String;

/// Generate a new entity id.
pub fn generate_id() -> EntityId {
    Uuid::new_v4().to_string()
}

/// Scalar contact record. No field is cross-validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl ContactInfo {
    /// Read a field by its template field key.
    ///
    /// Used by the FieldSpec-driven contact form; unknown keys read as empty.
    pub fn field(&self, key: &str) -> &str {
        match key {
            "fullName" => &self.full_name,
            "title" => &self.title,
            "email" => &self.email,
            "phone" => &self.phone,
            "city" => &self.city,
            "website" => self.website.as_deref().unwrap_or(""),
            "linkedin" => self.linkedin.as_deref().unwrap_or(""),
            "github" => self.github.as_deref().unwrap_or(""),
            _ => "",
        }
    }
}

/// Partial update for [`ContactInfo`]. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

impl ContactPatch {
    /// Build a single-field patch from a template field key.
    ///
    /// Returns `None` for keys that are not contact fields, so a generic
    /// form layer can route edits without its own key knowledge.
    pub fn for_field(key: &str, value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        let mut patch = Self::default();
        match key {
            "fullName" => patch.full_name = Some(value),
            "title" => patch.title = Some(value),
            "email" => patch.email = Some(value),
            "phone" => patch.phone = Some(value),
            "city" => patch.city = Some(value),
            "website" => patch.website = Some(value),
            "linkedin" => patch.linkedin = Some(value),
            "github" => patch.github = Some(value),
            _ => return None,
        }
        Some(patch)
    }

    /// Merge this patch into an existing record.
    pub fn apply(self, contact: &mut ContactInfo) {
        if let Some(v) = self.full_name {
            contact.full_name = v;
        }
        if let Some(v) = self.title {
            contact.title = v;
        }
        if let Some(v) = self.email {
            contact.email = v;
        }
        if let Some(v) = self.phone {
            contact.phone = v;
        }
        if let Some(v) = self.city {
            contact.city = v;
        }
        if let Some(v) = self.website {
            contact.website = Some(v);
        }
        if let Some(v) = self.linkedin {
            contact.linkedin = Some(v);
        }
        if let Some(v) = self.github {
            contact.github = Some(v);
        }
    }
}

/// A single work-experience entry.
///
/// `start_date`/`end_date` are month-granularity strings (`"2020-01"`).
/// When `current` is true the end date is irrelevant and kept empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceItem {
    pub id: EntityId,
    pub role: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: Vec<String>,
}

impl ExperienceItem {
    /// Create an empty entry with a fresh id and one blank description line.
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            role: String::new(),
            company: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: vec![String::new()],
        }
    }
}

impl Default for ExperienceItem {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update for [`ExperienceItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperiencePatch {
    pub role: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<Vec<String>>,
}

impl ExperiencePatch {
    /// Merge into an entry. Setting `current = true` clears the end date.
    pub fn apply(self, item: &mut ExperienceItem) {
        if let Some(v) = self.role {
            item.role = v;
        }
        if let Some(v) = self.company {
            item.company = v;
        }
        if let Some(v) = self.start_date {
            item.start_date = v;
        }
        if let Some(v) = self.end_date {
            item.end_date = v;
        }
        if let Some(v) = self.description {
            item.description = v;
        }
        if let Some(current) = self.current {
            item.current = current;
            if current {
                item.end_date.clear();
            }
        }
    }
}

/// A single education entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: EntityId,
    pub degree: String,
    pub institution: String,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
}

impl EducationItem {
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            degree: String::new(),
            institution: String::new(),
            year: String::new(),
            score: None,
        }
    }
}

impl Default for EducationItem {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update for [`EducationItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationPatch {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub year: Option<String>,
    pub score: Option<String>,
}

impl EducationPatch {
    pub fn apply(self, item: &mut EducationItem) {
        if let Some(v) = self.degree {
            item.degree = v;
        }
        if let Some(v) = self.institution {
            item.institution = v;
        }
        if let Some(v) = self.year {
            item.year = v;
        }
        if let Some(v) = self.score {
            item.score = Some(v);
        }
    }
}

/// Skill proficiency levels, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Proficiency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }

    /// Width of the proficiency bar in the modern layout, in percent.
    pub fn bar_width_percent(&self) -> u8 {
        match self {
            Self::Advanced => 90,
            Self::Intermediate => 70,
            Self::Beginner => 50,
        }
    }
}

/// A single skill entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillItem {
    pub id: EntityId,
    pub name: String,
    pub proficiency: Proficiency,
}

impl SkillItem {
    /// Create an empty skill. New skills default to `Intermediate`.
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            name: String::new(),
            proficiency: Proficiency::Intermediate,
        }
    }
}

impl Default for SkillItem {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update for [`SkillItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillPatch {
    pub name: Option<String>,
    pub proficiency: Option<Proficiency>,
}

impl SkillPatch {
    pub fn apply(self, item: &mut SkillItem) {
        if let Some(v) = self.name {
            item.name = v;
        }
        if let Some(v) = self.proficiency {
            item.proficiency = v;
        }
    }
}

/// A single project entry. `stack` is an ordered list of technology names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub description: String,
    pub stack: Vec<String>,
}

impl ProjectItem {
    pub fn new() -> Self {
        Self {
            id: generate_id(),
            name: String::new(),
            link: None,
            description: String::new(),
            stack: Vec::new(),
        }
    }
}

impl Default for ProjectItem {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update for [`ProjectItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub stack: Option<Vec<String>>,
}

impl ProjectPatch {
    pub fn apply(self, item: &mut ProjectItem) {
        if let Some(v) = self.name {
            item.name = v;
        }
        if let Some(v) = self.link {
            item.link = Some(v);
        }
        if let Some(v) = self.description {
            item.description = v;
        }
        if let Some(v) = self.stack {
            item.stack = v;
        }
    }
}

/// The single persisted aggregate: everything the user has entered.
///
/// All collection fields default to empty so partially shaped import files
/// deserialize with missing sections treated as empty rather than failing.
///
/// # Invariants
///
/// - Entity ids are unique within their owning sequence, generated at
///   creation and never reused.
/// - Sequence order is display order and is user-reorderable.
/// - `template_id` should resolve against the catalog; when it does not,
///   editing degrades to a "template not found" state and preview falls
///   back to the modern layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    pub template_id: String,
    pub contact: ContactInfo,
    pub summary: String,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub skills: Vec<SkillItem>,
    pub projects: Vec<ProjectItem>,
    pub certifications: Vec<String>,
    pub achievements: Vec<String>,
    pub interests: Vec<String>,
}

impl Default for ResumeData {
    fn default() -> Self {
        Self {
            template_id: "modern".to_string(),
            contact: ContactInfo::default(),
            summary: String::new(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            projects: Vec::new(),
            certifications: Vec::new(),
            achievements: Vec::new(),
            interests: Vec::new(),
        }
    }
}

/// A modeled-but-dormant validation error.
///
/// The store exposes a setter for these but no code path produces them;
/// the type exists so the contract survives for a future validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn new_experience_defaults() {
        let exp = ExperienceItem::new();
        assert!(!exp.current);
        assert_eq!(exp.description, vec![String::new()]);
        assert!(exp.end_date.is_empty());
    }

    #[test]
    fn new_skill_defaults_to_intermediate() {
        let skill = SkillItem::new();
        assert_eq!(skill.proficiency, Proficiency::Intermediate);
    }

    #[test]
    fn experience_patch_current_clears_end_date() {
        let mut exp = ExperienceItem::new();
        exp.end_date = "2023-06".to_string();

        ExperiencePatch {
            current: Some(true),
            ..Default::default()
        }
        .apply(&mut exp);

        assert!(exp.current);
        assert!(exp.end_date.is_empty());
    }

    #[test]
    fn experience_patch_uncurrent_keeps_end_date() {
        let mut exp = ExperienceItem::new();
        exp.current = true;
        exp.end_date = "2023-06".to_string();

        ExperiencePatch {
            current: Some(false),
            ..Default::default()
        }
        .apply(&mut exp);

        assert!(!exp.current);
        assert_eq!(exp.end_date, "2023-06");
    }

    #[test]
    fn contact_patch_for_field_routes_known_keys() {
        let patch = ContactPatch::for_field("email", "jane@example.com").unwrap();
        let mut contact = ContactInfo::default();
        patch.apply(&mut contact);
        assert_eq!(contact.email, "jane@example.com");

        assert!(ContactPatch::for_field("notAField", "x").is_none());
    }

    #[test]
    fn contact_patch_merges_partially() {
        let mut contact = ContactInfo {
            full_name: "Jane Doe".to_string(),
            city: "Lisbon".to_string(),
            ..Default::default()
        };

        ContactPatch {
            city: Some("Porto".to_string()),
            ..Default::default()
        }
        .apply(&mut contact);

        assert_eq!(contact.full_name, "Jane Doe");
        assert_eq!(contact.city, "Porto");
    }

    #[test]
    fn resume_data_serde_uses_camel_case_and_defaults() {
        let parsed: ResumeData = serde_json::from_str(r#"{"templateId":"classic"}"#).unwrap();
        assert_eq!(parsed.template_id, "classic");
        assert!(parsed.experience.is_empty());
        assert!(parsed.contact.full_name.is_empty());

        let json = serde_json::to_string(&ResumeData::default()).unwrap();
        assert!(json.contains("\"templateId\":\"modern\""));
        assert!(json.contains("\"fullName\""));
    }

    #[test]
    fn proficiency_round_trips_as_plain_names() {
        let json = serde_json::to_string(&Proficiency::Advanced).unwrap();
        assert_eq!(json, "\"Advanced\"");
        let back: Proficiency = serde_json::from_str("\"Beginner\"").unwrap();
        assert_eq!(back, Proficiency::Beginner);
    }
}

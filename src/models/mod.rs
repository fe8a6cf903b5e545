// Data models module
//
// Contains the persisted resume aggregate, the template specification
// model, and the ephemeral application state wrapped by the store.

mod app_state;
mod resume;
mod template;

pub use app_state::{DEFAULT_ACCENT_COLOR, ResumeState};
pub use resume::{
    ContactInfo, ContactPatch, EducationItem, EducationPatch, EntityId, ExperienceItem,
    ExperiencePatch, Proficiency, ProjectItem, ProjectPatch, ResumeData, SUMMARY_SOFT_LIMIT,
    SkillItem, SkillPatch, ValidationError, generate_id,
};
pub use template::{
    FieldSpec, FieldType, FontPrefs, LineSection, RepeatableSection, SectionKey, SectionKind,
    SectionSpec, TemplateSpec,
};

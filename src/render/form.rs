//! Form projection - data to editable fields and back.
//!
//! [`project_section`] turns the active template's section spec plus the
//! current aggregate into a typed [`SectionForm`] a UI can render without
//! knowing section semantics. [`apply_edit`] routes a [`FormEdit`] back
//! into the matching store mutation, applying the text-to-sequence
//! transforms on the way in.
//!
//! Contact and line-list sections are driven generically by their
//! FieldSpec list; the repeatable entity sections are dispatched by
//! section kind with per-kind typed entry views.

use crate::models::{
    ContactPatch, EducationPatch, EntityId, ExperiencePatch, FieldType, LineSection, Proficiency,
    ProjectPatch, RepeatableSection, ResumeData, SUMMARY_SOFT_LIMIT, SectionKey, SectionKind,
    SkillPatch, TemplateSpec,
};
use crate::state::ResumeStore;

/// Split newline-joined bullet/list text into trimmed non-empty lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split comma-joined stack text into trimmed non-empty tokens.
pub fn split_tokens(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join list items for textarea display. Inverse of [`split_lines`] up to
/// whitespace trimming.
pub fn join_lines(items: &[String]) -> String {
    items.join("\n")
}

/// Join stack tokens for single-line display. Inverse of [`split_tokens`]
/// up to whitespace trimming.
pub fn join_tokens(items: &[String]) -> String {
    items.join(", ")
}

/// One generically rendered input field with its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub key: &'static str,
    pub label: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    pub placeholder: &'static str,
    pub value: String,
}

/// Editable view of one experience entry. The description is pre-joined
/// for textarea display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntryForm {
    pub id: EntityId,
    pub role: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationEntryForm {
    pub id: EntityId,
    pub degree: String,
    pub institution: String,
    pub year: String,
    pub score: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillEntryForm {
    pub id: EntityId,
    pub name: String,
    pub proficiency: Proficiency,
}

/// Editable view of one project entry. The stack is pre-joined with
/// commas for single-line display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEntryForm {
    pub id: EntityId,
    pub name: String,
    pub link: String,
    pub description: String,
    pub stack_text: String,
}

/// The editable surface for one section, tagged by section kind.
///
/// Every section key maps into exactly one of these; there is no runtime
/// "form not implemented" fallthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionForm {
    /// FieldSpec-driven scalar record.
    Contact {
        label: &'static str,
        fields: Vec<FieldView>,
    },
    /// Free text with a soft character cap surfaced for a counter.
    Summary {
        label: &'static str,
        required: bool,
        value: String,
        char_count: usize,
        soft_limit: usize,
    },
    Experience {
        label: &'static str,
        entries: Vec<ExperienceEntryForm>,
    },
    Education {
        label: &'static str,
        entries: Vec<EducationEntryForm>,
    },
    Skills {
        label: &'static str,
        entries: Vec<SkillEntryForm>,
    },
    Projects {
        label: &'static str,
        entries: Vec<ProjectEntryForm>,
    },
    /// Newline-joined plain string list.
    Lines {
        label: &'static str,
        section: LineSection,
        text: String,
        placeholder: &'static str,
    },
}

/// Project the section with the given key into its editable form.
///
/// Returns `None` when the key is unknown or the template does not carry
/// the section - the "select a section" / not-found state callers must
/// handle instead of crashing.
pub fn project_section(
    template: &TemplateSpec,
    data: &ResumeData,
    section_key: &str,
) -> Option<SectionForm> {
    let key = SectionKey::parse(section_key)?;
    let spec = template.section(key)?;

    let form = match key.kind() {
        SectionKind::Contact => SectionForm::Contact {
            label: spec.label,
            fields: spec
                .fields
                .iter()
                .map(|field| FieldView {
                    key: field.key,
                    label: field.label,
                    field_type: field.field_type,
                    required: field.required,
                    placeholder: field.placeholder,
                    value: data.contact.field(field.key).to_string(),
                })
                .collect(),
        },
        SectionKind::Summary => SectionForm::Summary {
            label: spec.label,
            required: spec.required,
            value: data.summary.clone(),
            char_count: data.summary.chars().count(),
            soft_limit: SUMMARY_SOFT_LIMIT,
        },
        SectionKind::Repeatable(RepeatableSection::Experience) => SectionForm::Experience {
            label: spec.label,
            entries: data
                .experience
                .iter()
                .map(|exp| ExperienceEntryForm {
                    id: exp.id.clone(),
                    role: exp.role.clone(),
                    company: exp.company.clone(),
                    start_date: exp.start_date.clone(),
                    end_date: exp.end_date.clone(),
                    current: exp.current,
                    description_text: join_lines(&exp.description),
                })
                .collect(),
        },
        SectionKind::Repeatable(RepeatableSection::Education) => SectionForm::Education {
            label: spec.label,
            entries: data
                .education
                .iter()
                .map(|edu| EducationEntryForm {
                    id: edu.id.clone(),
                    degree: edu.degree.clone(),
                    institution: edu.institution.clone(),
                    year: edu.year.clone(),
                    score: edu.score.clone().unwrap_or_default(),
                })
                .collect(),
        },
        SectionKind::Repeatable(RepeatableSection::Skills) => SectionForm::Skills {
            label: spec.label,
            entries: data
                .skills
                .iter()
                .map(|skill| SkillEntryForm {
                    id: skill.id.clone(),
                    name: skill.name.clone(),
                    proficiency: skill.proficiency,
                })
                .collect(),
        },
        SectionKind::Repeatable(RepeatableSection::Projects) => SectionForm::Projects {
            label: spec.label,
            entries: data
                .projects
                .iter()
                .map(|project| ProjectEntryForm {
                    id: project.id.clone(),
                    name: project.name.clone(),
                    link: project.link.clone().unwrap_or_default(),
                    description: project.description.clone(),
                    stack_text: join_tokens(&project.stack),
                })
                .collect(),
        },
        SectionKind::Lines(section) => {
            let items = match section {
                LineSection::Certifications => &data.certifications,
                LineSection::Achievements => &data.achievements,
                LineSection::Interests => &data.interests,
            };
            SectionForm::Lines {
                label: spec.label,
                section,
                text: join_lines(items),
                placeholder: spec.fields.first().map(|f| f.placeholder).unwrap_or(""),
            }
        }
    };

    Some(form)
}

/// A single user edit coming back from a form surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEdit {
    /// Generic contact field edit keyed by FieldSpec key.
    ContactField { key: String, value: String },
    Summary(String),
    AddEntry(RepeatableSection),
    RemoveEntry(RepeatableSection, EntityId),
    Experience(EntityId, ExperiencePatch),
    /// Raw description textarea text; split into bullet lines on apply.
    ExperienceDescription(EntityId, String),
    Education(EntityId, EducationPatch),
    Skill(EntityId, SkillPatch),
    Project(EntityId, ProjectPatch),
    /// Raw comma-joined stack text; split into tokens on apply.
    ProjectStack(EntityId, String),
    /// Raw newline-joined list text for a plain string-list section.
    Lines(LineSection, String),
}

/// Translate a form edit into the matching store mutation.
///
/// Follows the store's failure semantics: edits referencing missing
/// entities are silent no-ops. Returns the id of a newly added entry for
/// `AddEntry`, `None` otherwise.
pub fn apply_edit(store: &ResumeStore, edit: FormEdit) -> Option<EntityId> {
    match edit {
        FormEdit::ContactField { key, value } => {
            match ContactPatch::for_field(&key, value) {
                Some(patch) => {
                    store.update_contact(patch);
                }
                None => tracing::debug!("apply_edit: unknown contact field {key}"),
            }
            None
        }
        FormEdit::Summary(value) => {
            store.update_summary(value);
            None
        }
        FormEdit::AddEntry(section) => Some(match section {
            RepeatableSection::Experience => store.add_experience(),
            RepeatableSection::Education => store.add_education(),
            RepeatableSection::Skills => store.add_skill(),
            RepeatableSection::Projects => store.add_project(),
        }),
        FormEdit::RemoveEntry(section, id) => {
            match section {
                RepeatableSection::Experience => store.remove_experience(&id),
                RepeatableSection::Education => store.remove_education(&id),
                RepeatableSection::Skills => store.remove_skill(&id),
                RepeatableSection::Projects => store.remove_project(&id),
            };
            None
        }
        FormEdit::Experience(id, patch) => {
            store.update_experience(&id, patch);
            None
        }
        FormEdit::ExperienceDescription(id, text) => {
            store.update_experience(
                &id,
                ExperiencePatch {
                    description: Some(split_lines(&text)),
                    ..Default::default()
                },
            );
            None
        }
        FormEdit::Education(id, patch) => {
            store.update_education(&id, patch);
            None
        }
        FormEdit::Skill(id, patch) => {
            store.update_skill(&id, patch);
            None
        }
        FormEdit::Project(id, patch) => {
            store.update_project(&id, patch);
            None
        }
        FormEdit::ProjectStack(id, text) => {
            store.update_project(
                &id,
                ProjectPatch {
                    stack: Some(split_tokens(&text)),
                    ..Default::default()
                },
            );
            None
        }
        FormEdit::Lines(section, text) => {
            let items = split_lines(&text);
            match section {
                LineSection::Certifications => store.update_certifications(items),
                LineSection::Achievements => store.update_achievements(items),
                LineSection::Interests => store.update_interests(items),
            };
            None
        }
    }
}

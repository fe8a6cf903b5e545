// Template catalog module
//
// Immutable lookup table from template id to its section/field tree.
// Built once at startup from static data; there is no dynamic reload.

use crate::models::{FieldSpec, FieldType, FontPrefs, SectionKey, SectionSpec, TemplateSpec};
use indexmap::IndexMap;

/// Immutable mapping from template identifier to its [`TemplateSpec`].
///
/// Iteration order is the catalog-defined display order used by template
/// selection UI. Lookups for unknown ids return `None`; both the editing
/// and preview surfaces must degrade to a "template not found" state
/// rather than crash.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: IndexMap<String, TemplateSpec>,
}

impl TemplateCatalog {
    /// Build the built-in catalog: modern, classic, minimal.
    ///
    /// The three templates currently share one section set; per-template
    /// divergence is supported by the model but unused in this snapshot.
    pub fn builtin() -> Self {
        let mut templates = IndexMap::new();

        templates.insert(
            "modern".to_string(),
            TemplateSpec {
                id: "modern",
                name: "Modern",
                description: "Two-column with accent colors",
                accent_color: "#3b82f6",
                font_prefs: FontPrefs {
                    heading: "Inter, sans-serif",
                    body: "Inter, sans-serif",
                },
                sections: standard_sections(),
            },
        );

        templates.insert(
            "classic".to_string(),
            TemplateSpec {
                id: "classic",
                name: "Classic",
                description: "Traditional single-column",
                accent_color: "#1f2937",
                font_prefs: FontPrefs {
                    heading: "Georgia, serif",
                    body: "Georgia, serif",
                },
                sections: standard_sections(),
            },
        );

        templates.insert(
            "minimal".to_string(),
            TemplateSpec {
                id: "minimal",
                name: "Minimal",
                description: "Clean and spacious",
                accent_color: "#6b7280",
                font_prefs: FontPrefs {
                    heading: "Helvetica Neue, sans-serif",
                    body: "Helvetica Neue, sans-serif",
                },
                sections: standard_sections(),
            },
        );

        Self { templates }
    }

    /// Look up a template by id.
    pub fn get(&self, id: &str) -> Option<&TemplateSpec> {
        self.templates.get(id)
    }

    /// All templates in catalog order.
    pub fn all(&self) -> impl Iterator<Item = &TemplateSpec> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The section set shared by the built-in templates.
fn standard_sections() -> Vec<SectionSpec> {
    vec![
        SectionSpec {
            key: SectionKey::Contact,
            label: "Contact Information",
            required: true,
            repeatable: false,
            fields: vec![
                FieldSpec {
                    key: "fullName",
                    label: "Full Name",
                    field_type: FieldType::Text,
                    required: true,
                    placeholder: "John Doe",
                },
                FieldSpec {
                    key: "title",
                    label: "Professional Title",
                    field_type: FieldType::Text,
                    required: true,
                    placeholder: "Software Engineer",
                },
                FieldSpec {
                    key: "email",
                    label: "Email",
                    field_type: FieldType::Email,
                    required: true,
                    placeholder: "john@example.com",
                },
                FieldSpec {
                    key: "phone",
                    label: "Phone",
                    field_type: FieldType::Phone,
                    required: false,
                    placeholder: "+1 555 000 1234",
                },
                FieldSpec {
                    key: "city",
                    label: "City",
                    field_type: FieldType::Text,
                    required: false,
                    placeholder: "San Francisco, CA",
                },
                FieldSpec {
                    key: "website",
                    label: "Website",
                    field_type: FieldType::Url,
                    required: false,
                    placeholder: "https://johndoe.dev",
                },
                FieldSpec {
                    key: "linkedin",
                    label: "LinkedIn",
                    field_type: FieldType::Url,
                    required: false,
                    placeholder: "linkedin.com/in/johndoe",
                },
                FieldSpec {
                    key: "github",
                    label: "GitHub",
                    field_type: FieldType::Url,
                    required: false,
                    placeholder: "github.com/johndoe",
                },
            ],
        },
        SectionSpec {
            key: SectionKey::Summary,
            label: "Professional Summary",
            required: true,
            repeatable: false,
            fields: vec![FieldSpec {
                key: "summary",
                label: "Summary",
                field_type: FieldType::Textarea,
                required: true,
                placeholder:
                    "Brief professional summary highlighting your key skills and experience...",
            }],
        },
        SectionSpec {
            key: SectionKey::Experience,
            label: "Work Experience",
            required: true,
            repeatable: true,
            fields: vec![
                FieldSpec {
                    key: "role",
                    label: "Job Title",
                    field_type: FieldType::Text,
                    required: true,
                    placeholder: "Senior Software Engineer",
                },
                FieldSpec {
                    key: "company",
                    label: "Company",
                    field_type: FieldType::Text,
                    required: true,
                    placeholder: "Tech Corp",
                },
                FieldSpec {
                    key: "startDate",
                    label: "Start Date",
                    field_type: FieldType::Date,
                    required: true,
                    placeholder: "2020-01",
                },
                FieldSpec {
                    key: "endDate",
                    label: "End Date",
                    field_type: FieldType::Date,
                    required: false,
                    placeholder: "2023-06",
                },
                FieldSpec {
                    key: "description",
                    label: "Job Description",
                    field_type: FieldType::Multiline,
                    required: true,
                    placeholder: "• Developed and maintained web applications",
                },
            ],
        },
        SectionSpec {
            key: SectionKey::Education,
            label: "Education",
            required: true,
            repeatable: true,
            fields: vec![
                FieldSpec {
                    key: "degree",
                    label: "Degree",
                    field_type: FieldType::Text,
                    required: true,
                    placeholder: "Bachelor of Science in Computer Science",
                },
                FieldSpec {
                    key: "institution",
                    label: "Institution",
                    field_type: FieldType::Text,
                    required: true,
                    placeholder: "University of Technology",
                },
                FieldSpec {
                    key: "year",
                    label: "Year",
                    field_type: FieldType::Text,
                    required: true,
                    placeholder: "2020",
                },
                FieldSpec {
                    key: "score",
                    label: "GPA/Score",
                    field_type: FieldType::Text,
                    required: false,
                    placeholder: "3.8/4.0",
                },
            ],
        },
        SectionSpec {
            key: SectionKey::Skills,
            label: "Skills",
            required: false,
            repeatable: true,
            fields: vec![
                FieldSpec {
                    key: "name",
                    label: "Skill Name",
                    field_type: FieldType::Text,
                    required: true,
                    placeholder: "JavaScript",
                },
                FieldSpec {
                    key: "proficiency",
                    label: "Proficiency Level",
                    field_type: FieldType::List,
                    required: false,
                    placeholder: "Intermediate",
                },
            ],
        },
        SectionSpec {
            key: SectionKey::Projects,
            label: "Projects",
            required: false,
            repeatable: true,
            fields: vec![
                FieldSpec {
                    key: "name",
                    label: "Project Name",
                    field_type: FieldType::Text,
                    required: true,
                    placeholder: "E-commerce Platform",
                },
                FieldSpec {
                    key: "link",
                    label: "Project Link",
                    field_type: FieldType::Url,
                    required: false,
                    placeholder: "https://github.com/johndoe/project",
                },
                FieldSpec {
                    key: "description",
                    label: "Description",
                    field_type: FieldType::Textarea,
                    required: true,
                    placeholder: "Built a full-stack e-commerce platform using React and Node.js...",
                },
                FieldSpec {
                    key: "stack",
                    label: "Tech Stack",
                    field_type: FieldType::List,
                    required: false,
                    placeholder: "React, Node.js, MongoDB, Express",
                },
            ],
        },
        SectionSpec {
            key: SectionKey::Certifications,
            label: "Certifications",
            required: false,
            repeatable: false,
            fields: vec![FieldSpec {
                key: "items",
                label: "Certifications",
                field_type: FieldType::List,
                required: false,
                placeholder: "AWS Certified Solutions Architect",
            }],
        },
        SectionSpec {
            key: SectionKey::Achievements,
            label: "Achievements",
            required: false,
            repeatable: false,
            fields: vec![FieldSpec {
                key: "items",
                label: "Achievements",
                field_type: FieldType::List,
                required: false,
                placeholder: "Employee of the Year 2023",
            }],
        },
        SectionSpec {
            key: SectionKey::Interests,
            label: "Interests",
            required: false,
            repeatable: false,
            fields: vec![FieldSpec {
                key: "items",
                label: "Interests",
                field_type: FieldType::List,
                required: false,
                placeholder: "Photography",
            }],
        },
    ]
}

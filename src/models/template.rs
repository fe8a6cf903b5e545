//! Template specification model.
//!
//! A template declares which form sections and fields it accepts plus its
//! visual defaults. Instances are catalog-owned static data, read-only at
//! runtime; the model supports per-template section divergence even though
//! the built-in templates currently share one section set.

use serde::{Deserialize, Serialize};

/// Input widget kind for a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Email,
    Phone,
    Url,
    Date,
    Multiline,
    List,
}

/// One editable field within a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    pub placeholder: &'static str,
}

/// A named, independently navigable group of related fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionSpec {
    pub key: SectionKey,
    pub label: &'static str,
    pub required: bool,
    pub repeatable: bool,
    pub fields: Vec<FieldSpec>,
}

/// Font preferences a layout applies when rendering a full document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontPrefs {
    pub heading: &'static str,
    pub body: &'static str,
}

/// A named visual layout plus the section/field set it supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSpec {
    pub id: &'static str,
    pub name: &'static str,
    /// Short blurb shown in template selection UI.
    pub description: &'static str,
    pub accent_color: &'static str,
    pub font_prefs: FontPrefs,
    pub sections: Vec<SectionSpec>,
}

impl TemplateSpec {
    /// Find a section spec by key.
    pub fn section(&self, key: SectionKey) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.key == key)
    }
}

/// The closed set of resume section keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Achievements,
    Interests,
}

impl SectionKey {
    /// All keys in canonical display order.
    pub const ALL: [SectionKey; 9] = [
        Self::Contact,
        Self::Summary,
        Self::Experience,
        Self::Education,
        Self::Skills,
        Self::Projects,
        Self::Certifications,
        Self::Achievements,
        Self::Interests,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Summary => "summary",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Certifications => "certifications",
            Self::Achievements => "achievements",
            Self::Interests => "interests",
        }
    }

    /// Parse a raw key string. Unknown keys read as `None`, which callers
    /// surface as a "section not found" state.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "contact" => Some(Self::Contact),
            "summary" => Some(Self::Summary),
            "experience" => Some(Self::Experience),
            "education" => Some(Self::Education),
            "skills" => Some(Self::Skills),
            "projects" => Some(Self::Projects),
            "certifications" => Some(Self::Certifications),
            "achievements" => Some(Self::Achievements),
            "interests" => Some(Self::Interests),
            _ => None,
        }
    }

    /// Map this key into its rendering kind.
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Contact => SectionKind::Contact,
            Self::Summary => SectionKind::Summary,
            Self::Experience => SectionKind::Repeatable(RepeatableSection::Experience),
            Self::Education => SectionKind::Repeatable(RepeatableSection::Education),
            Self::Skills => SectionKind::Repeatable(RepeatableSection::Skills),
            Self::Projects => SectionKind::Repeatable(RepeatableSection::Projects),
            Self::Certifications => SectionKind::Lines(LineSection::Certifications),
            Self::Achievements => SectionKind::Lines(LineSection::Achievements),
            Self::Interests => SectionKind::Lines(LineSection::Interests),
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic rendering kind of a section.
///
/// Form dispatch matches on this exhaustively instead of falling through a
/// runtime string switch: the compiler proves every section kind has an
/// editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Scalar record edited through its FieldSpec list generically.
    Contact,
    /// Single free-text field with a soft character cap.
    Summary,
    /// Ordered entity list with per-kind typed entry forms.
    Repeatable(RepeatableSection),
    /// Ordered list of plain strings edited as one newline-joined text.
    Lines(LineSection),
}

/// The repeatable entity collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatableSection {
    Experience,
    Education,
    Skills,
    Projects,
}

/// The positional-identity string-list collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSection {
    Certifications,
    Achievements,
    Interests,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_key() {
        for key in SectionKey::ALL {
            assert_eq!(SectionKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SectionKey::parse("references"), None);
    }

    #[test]
    fn kinds_partition_the_key_space() {
        let repeatable = SectionKey::ALL
            .iter()
            .filter(|k| matches!(k.kind(), SectionKind::Repeatable(_)))
            .count();
        let lines = SectionKey::ALL
            .iter()
            .filter(|k| matches!(k.kind(), SectionKind::Lines(_)))
            .count();
        assert_eq!(repeatable, 4);
        assert_eq!(lines, 3);
        assert_eq!(SectionKey::Contact.kind(), SectionKind::Contact);
        assert_eq!(SectionKey::Summary.kind(), SectionKind::Summary);
    }

    #[test]
    fn section_keys_serialize_lowercase() {
        let json = serde_json::to_string(&SectionKey::Certifications).unwrap();
        assert_eq!(json, "\"certifications\"");
    }
}

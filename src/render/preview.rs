//! Preview projection - data to a visual document.
//!
//! Selects one of the three fixed layouts by template id and optionally
//! wraps the result in a complete printable HTML page. The print contract
//! is that the printed subtree is exactly the preview output, with A4
//! page sizing requested as a styling hint.

use crate::catalog::TemplateCatalog;
use crate::models::ResumeData;
use crate::render::layouts;

/// Page and typography styling shared by the printable document wrapper.
///
/// `@page` requests A4 with a fixed margin; `print-color-adjust` keeps
/// accent backgrounds in the printed output.
const DOCUMENT_CSS: &str = r#"
@page { size: A4; margin: 0.5in; }
@media print {
  body { -webkit-print-color-adjust: exact !important; print-color-adjust: exact !important; }
  .no-print { display: none; }
}
body { margin: 0; background: #fff; color: #111827; }
.resume { width: 100%; }
.resume h1 { margin: 0 0 0.25rem; }
.resume h2 { text-transform: uppercase; letter-spacing: 0.05em; }
.resume section { margin-bottom: 1.5rem; }
.resume .entry { margin-bottom: 1rem; }
.resume .dates, .resume .year { color: #6b7280; font-size: 0.875rem; }
.resume .chips { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.resume .chip { padding: 0.125rem 0.5rem; border-radius: 0.25rem; font-size: 0.75rem; }
.resume.modern { display: flex; }
.resume.modern .sidebar { width: 33%; color: #fff; padding: 1.5rem; }
.resume.modern .sidebar .contact { list-style: none; padding: 0; font-size: 0.875rem; }
.resume.modern .bar { background: rgba(255,255,255,0.2); border-radius: 9999px; height: 0.5rem; }
.resume.modern .bar-fill { background: #fff; border-radius: 9999px; height: 0.5rem; }
.resume.modern main { width: 67%; padding: 1.5rem; }
.resume.modern main h2 { border-bottom: 2px solid; padding-bottom: 0.5rem; }
.resume.classic { padding: 2rem; text-align: center; }
.resume.classic header { border-bottom: 2px solid #1f2937; padding-bottom: 1.5rem; margin-bottom: 2rem; }
.resume.classic ul { text-align: left; }
.resume.classic .grid { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
.resume.minimal { padding: 3rem; }
.resume.minimal h1 { font-weight: 300; font-size: 2.25rem; }
.resume.minimal h2 { color: #9ca3af; font-size: 0.875rem; }
.resume.minimal .divider { width: 3rem; height: 1px; background: #d1d5db; margin-bottom: 1.5rem; }
.resume.minimal .chip { border: 1px solid; border-radius: 9999px; padding: 0.25rem 0.75rem; }
"#;

/// Render the layout selected by `data.template_id`.
///
/// Unrecognized ids fall back to the modern layout rather than failing;
/// the catalog lookup miss is an editing-surface concern, not a preview
/// one.
pub fn render_preview(data: &ResumeData, accent: &str) -> String {
    match data.template_id.as_str() {
        "classic" => layouts::classic::render(data, accent),
        "minimal" => layouts::minimal::render(data, accent),
        _ => layouts::modern::render(data, accent),
    }
}

/// Render a complete printable HTML document around the preview.
///
/// Font preferences come from the resolved template spec, falling back to
/// the modern template for unknown ids.
pub fn render_document(catalog: &TemplateCatalog, data: &ResumeData, accent: &str) -> String {
    let template = catalog
        .get(&data.template_id)
        .or_else(|| catalog.get("modern"));
    let (heading_font, body_font) = template
        .map(|t| (t.font_prefs.heading, t.font_prefs.body))
        .unwrap_or(("sans-serif", "sans-serif"));

    let title = if data.contact.full_name.is_empty() {
        "Resume".to_string()
    } else {
        format!("Resume - {}", crate::render::html_escape(&data.contact.full_name))
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>\n\
         body {{ font-family: {body_font}; }}\n\
         h1, h2, h3 {{ font-family: {heading_font}; }}\n\
         {DOCUMENT_CSS}\n</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        render_preview(data, accent)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_template_id_falls_back_to_modern() {
        let mut data = ResumeData::default();
        data.template_id = "brutalist".to_string();
        let html = render_preview(&data, "#3b82f6");
        assert!(html.contains("class=\"resume modern\""));
    }

    #[test]
    fn each_known_id_selects_its_layout() {
        let mut data = ResumeData::default();
        for (id, marker) in [
            ("modern", "resume modern"),
            ("classic", "resume classic"),
            ("minimal", "resume minimal"),
        ] {
            data.template_id = id.to_string();
            assert!(render_preview(&data, "#3b82f6").contains(marker));
        }
    }

    #[test]
    fn document_wrapper_carries_print_styling() {
        let catalog = TemplateCatalog::builtin();
        let html = render_document(&catalog, &ResumeData::default(), "#3b82f6");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("size: A4"));
        assert!(html.contains("margin: 0.5in"));
        assert!(html.contains("Inter, sans-serif"));
    }

    #[test]
    fn document_fonts_follow_the_resolved_template() {
        let catalog = TemplateCatalog::builtin();
        let mut data = ResumeData::default();
        data.template_id = "classic".to_string();
        let html = render_document(&catalog, &data, "#1f2937");
        assert!(html.contains("Georgia, serif"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let data = ResumeData::default();
        assert_eq!(
            render_preview(&data, "#3b82f6"),
            render_preview(&data, "#3b82f6")
        );
    }
}

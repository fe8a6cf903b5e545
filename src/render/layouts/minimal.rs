//! Minimal layout: spacious single column, light header, em-dash date
//! ranges. Description lines keep a bullet marker but are normalized to
//! "• " regardless of what the user typed.

use super::date_range;
use crate::models::ResumeData;
use crate::render::{html_escape, strip_bullet};

/// Section heading with the layout's thin divider line.
fn heading(html: &mut String, label: &str) {
    html.push_str(&format!(
        "<h2>{}</h2>\n<div class=\"divider\"></div>\n",
        html_escape(label)
    ));
}

pub fn render(data: &ResumeData, accent: &str) -> String {
    let mut html = String::new();
    let accent = html_escape(accent);

    html.push_str("<div class=\"resume minimal\">\n");

    // Header: title and contact parts render only when present
    let name = if data.contact.full_name.is_empty() {
        "Your Name"
    } else {
        &data.contact.full_name
    };
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(name)));
    if !data.contact.title.is_empty() {
        html.push_str(&format!(
            "<p class=\"title\">{}</p>\n",
            html_escape(&data.contact.title)
        ));
    }
    let contact = &data.contact;
    let parts: Vec<String> = [
        contact.email.as_str(),
        contact.phone.as_str(),
        contact.city.as_str(),
        contact.website.as_deref().unwrap_or(""),
        contact.linkedin.as_deref().unwrap_or(""),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .map(|part| format!("<span>{}</span>", html_escape(part)))
    .collect();
    if !parts.is_empty() {
        html.push_str(&format!("<div class=\"contact\">{}</div>\n", parts.join(" ")));
    }
    html.push_str("</header>\n");

    if !data.summary.is_empty() {
        html.push_str("<section class=\"summary\">\n");
        heading(&mut html, "About");
        html.push_str(&format!("<p>{}</p>\n</section>\n", html_escape(&data.summary)));
    }

    if !data.experience.is_empty() {
        html.push_str("<section class=\"experience\">\n");
        heading(&mut html, "Experience");
        for exp in &data.experience {
            html.push_str(&format!(
                "<div class=\"entry\">\n<h3>{}</h3>\n<p class=\"company\">{}</p>\n<span class=\"dates\">{}</span>\n",
                html_escape(&exp.role),
                html_escape(&exp.company),
                date_range(exp, " — ")
            ));
            for line in &exp.description {
                let stripped = strip_bullet(line);
                if !stripped.is_empty() {
                    html.push_str(&format!("<p class=\"bullet\">• {}</p>\n", html_escape(&stripped)));
                }
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if !data.skills.is_empty() {
        html.push_str("<section class=\"skills\">\n");
        heading(&mut html, "Skills");
        html.push_str("<div class=\"chips\">");
        for skill in &data.skills {
            html.push_str(&format!(
                "<span class=\"chip\" style=\"border-color:{accent};color:{accent};background-color:{accent}08\">{}</span>",
                html_escape(&skill.name)
            ));
        }
        html.push_str("</div>\n</section>\n");
    }

    if !data.education.is_empty() {
        html.push_str("<section class=\"education\">\n");
        heading(&mut html, "Education");
        for edu in &data.education {
            html.push_str(&format!(
                "<div class=\"entry\"><h3>{}</h3><p>{}</p><span class=\"year\">{}</span>",
                html_escape(&edu.degree),
                html_escape(&edu.institution),
                html_escape(&edu.year)
            ));
            if let Some(score) = &edu.score {
                if !score.is_empty() {
                    html.push_str(&format!("<span class=\"score\">{}</span>", html_escape(score)));
                }
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if !data.projects.is_empty() {
        html.push_str("<section class=\"projects\">\n");
        heading(&mut html, "Projects");
        for project in &data.projects {
            html.push_str(&format!(
                "<div class=\"entry\">\n<h3>{}</h3>\n",
                html_escape(&project.name)
            ));
            if let Some(link) = &project.link {
                if !link.is_empty() {
                    // Display the link without its scheme, keep it in href
                    let display = link
                        .strip_prefix("https://")
                        .or_else(|| link.strip_prefix("http://"))
                        .unwrap_or(link);
                    html.push_str(&format!(
                        "<a href=\"{}\">{}</a>\n",
                        html_escape(link),
                        html_escape(display)
                    ));
                }
            }
            html.push_str(&format!("<p>{}</p>\n", html_escape(&project.description)));
            if !project.stack.is_empty() {
                html.push_str("<div class=\"chips\">");
                for tech in &project.stack {
                    html.push_str(&format!(
                        "<span class=\"chip\" style=\"background-color:{accent}15;color:{accent}\">{}</span>",
                        html_escape(tech)
                    ));
                }
                html.push_str("</div>\n");
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if !data.certifications.is_empty() {
        html.push_str("<section class=\"certifications\">\n");
        heading(&mut html, "Certifications");
        for cert in &data.certifications {
            html.push_str(&format!("<p>{}</p>\n", html_escape(cert)));
        }
        html.push_str("</section>\n");
    }

    if !data.achievements.is_empty() {
        html.push_str("<section class=\"achievements\">\n");
        heading(&mut html, "Achievements");
        for achievement in &data.achievements {
            html.push_str(&format!("<p>{}</p>\n", html_escape(achievement)));
        }
        html.push_str("</section>\n");
    }

    if !data.interests.is_empty() {
        html.push_str("<section class=\"interests\">\n");
        heading(&mut html, "Interests");
        let joined: Vec<String> = data.interests.iter().map(|i| html_escape(i)).collect();
        html.push_str(&format!("<p>{}</p>\n</section>\n", joined.join(", ")));
    }

    html.push_str("</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectItem;

    #[test]
    fn bullets_are_normalized_to_a_single_marker() {
        let mut data = ResumeData::default();
        let mut exp = crate::models::ExperienceItem::new();
        exp.role = "Engineer".to_string();
        exp.description = vec!["- Shipped it".to_string(), "• Measured it".to_string()];
        data.experience.push(exp);

        let html = render(&data, "#6b7280");
        assert!(html.contains("• Shipped it"));
        assert!(html.contains("• Measured it"));
        assert!(!html.contains("• • "));
    }

    #[test]
    fn project_link_display_drops_the_scheme() {
        let mut data = ResumeData::default();
        let mut project = ProjectItem::new();
        project.name = "Site".to_string();
        project.link = Some("https://example.dev/site".to_string());
        data.projects.push(project);

        let html = render(&data, "#6b7280");
        assert!(html.contains(">example.dev/site</a>"));
        assert!(html.contains("href=\"https://example.dev/site\""));
    }

    #[test]
    fn title_row_is_omitted_when_empty() {
        let html = render(&ResumeData::default(), "#6b7280");
        assert!(!html.contains("class=\"title\""));
    }

    #[test]
    fn interests_join_with_commas() {
        let mut data = ResumeData::default();
        data.interests = vec!["Photography".to_string(), "Hiking".to_string()];
        let html = render(&data, "#6b7280");
        assert!(html.contains("Photography, Hiking"));
    }
}

//! Modern layout: accent-colored sidebar plus a main content column.
//!
//! Sidebar carries contact details, skills (with proficiency bars),
//! education and interests; the main column carries summary, experience,
//! projects, certifications and achievements.

use super::date_range;
use crate::models::ResumeData;
use crate::render::{html_escape, strip_bullet};

pub fn render(data: &ResumeData, accent: &str) -> String {
    let mut html = String::new();
    let accent = html_escape(accent);

    html.push_str("<div class=\"resume modern\">\n");

    // Sidebar
    html.push_str(&format!(
        "<aside class=\"sidebar\" style=\"background-color:{accent}\">\n"
    ));

    let name = if data.contact.full_name.is_empty() {
        "Your Name"
    } else {
        &data.contact.full_name
    };
    let title = if data.contact.title.is_empty() {
        "Your Title"
    } else {
        &data.contact.title
    };
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(name)));
    html.push_str(&format!("<p class=\"title\">{}</p>\n", html_escape(title)));

    html.push_str("<ul class=\"contact\">\n");
    let contact = &data.contact;
    let mut contact_rows: Vec<(&str, &str)> = vec![
        ("email", contact.email.as_str()),
        ("phone", contact.phone.as_str()),
        ("city", contact.city.as_str()),
    ];
    contact_rows.push(("website", contact.website.as_deref().unwrap_or("")));
    contact_rows.push(("linkedin", contact.linkedin.as_deref().unwrap_or("")));
    contact_rows.push(("github", contact.github.as_deref().unwrap_or("")));
    for (class, value) in contact_rows {
        if !value.is_empty() {
            html.push_str(&format!(
                "<li class=\"{class}\">{}</li>\n",
                html_escape(value)
            ));
        }
    }
    html.push_str("</ul>\n");

    if !data.skills.is_empty() {
        html.push_str("<section class=\"skills\">\n<h2>Skills</h2>\n");
        for skill in &data.skills {
            html.push_str(&format!(
                "<div class=\"skill\"><span class=\"name\">{}</span><span class=\"level\">{}</span>\n",
                html_escape(&skill.name),
                skill.proficiency.as_str()
            ));
            html.push_str(&format!(
                "<div class=\"bar\"><div class=\"bar-fill\" style=\"width:{}%\"></div></div></div>\n",
                skill.proficiency.bar_width_percent()
            ));
        }
        html.push_str("</section>\n");
    }

    if !data.education.is_empty() {
        html.push_str("<section class=\"education\">\n<h2>Education</h2>\n");
        for edu in &data.education {
            html.push_str(&format!(
                "<div class=\"entry\"><h3>{}</h3><p>{}</p>",
                html_escape(&edu.degree),
                html_escape(&edu.institution)
            ));
            html.push_str(&format!("<span>{}</span>", html_escape(&edu.year)));
            if let Some(score) = &edu.score {
                if !score.is_empty() {
                    html.push_str(&format!("<span class=\"score\">{}</span>", html_escape(score)));
                }
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if !data.interests.is_empty() {
        html.push_str("<section class=\"interests\">\n<h2>Interests</h2>\n<div class=\"chips\">");
        for interest in &data.interests {
            html.push_str(&format!(
                "<span class=\"chip\">{}</span>",
                html_escape(interest)
            ));
        }
        html.push_str("</div>\n</section>\n");
    }

    html.push_str("</aside>\n");

    // Main column
    html.push_str("<main>\n");

    if !data.summary.is_empty() {
        html.push_str(&format!(
            "<section class=\"summary\">\n<h2 style=\"border-color:{accent}\">Professional Summary</h2>\n<p>{}</p>\n</section>\n",
            html_escape(&data.summary)
        ));
    }

    if !data.experience.is_empty() {
        html.push_str(&format!(
            "<section class=\"experience\">\n<h2 style=\"border-color:{accent}\">Work Experience</h2>\n"
        ));
        for exp in &data.experience {
            html.push_str(&format!(
                "<div class=\"entry\">\n<h3 style=\"color:{accent}\">{}</h3>\n<p class=\"company\">{}</p>\n<span class=\"dates\">{}</span>\n",
                html_escape(&exp.role),
                html_escape(&exp.company),
                date_range(exp, " - ")
            ));
            let bullets: Vec<String> = exp
                .description
                .iter()
                .map(|line| strip_bullet(line))
                .filter(|line| !line.is_empty())
                .collect();
            if !bullets.is_empty() {
                html.push_str("<ul>\n");
                for bullet in bullets {
                    html.push_str(&format!("<li>{}</li>\n", html_escape(&bullet)));
                }
                html.push_str("</ul>\n");
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if !data.projects.is_empty() {
        html.push_str(&format!(
            "<section class=\"projects\">\n<h2 style=\"border-color:{accent}\">Projects</h2>\n"
        ));
        for project in &data.projects {
            html.push_str(&format!(
                "<div class=\"entry\">\n<h3 style=\"color:{accent}\">{}</h3>\n",
                html_escape(&project.name)
            ));
            if let Some(link) = &project.link {
                if !link.is_empty() {
                    html.push_str(&format!(
                        "<a href=\"{}\">View Project</a>\n",
                        html_escape(link)
                    ));
                }
            }
            html.push_str(&format!("<p>{}</p>\n", html_escape(&project.description)));
            if !project.stack.is_empty() {
                html.push_str("<div class=\"chips\">");
                for tech in &project.stack {
                    html.push_str(&format!(
                        "<span class=\"chip\" style=\"background-color:{accent}20;color:{accent}\">{}</span>",
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
        html.push_str(&format!(
            "<section class=\"certifications\">\n<h2 style=\"border-color:{accent}\">Certifications</h2>\n<ul>\n"
        ));
        for cert in &data.certifications {
            html.push_str(&format!("<li>{}</li>\n", html_escape(cert)));
        }
        html.push_str("</ul>\n</section>\n");
    }

    if !data.achievements.is_empty() {
        html.push_str(&format!(
            "<section class=\"achievements\">\n<h2 style=\"border-color:{accent}\">Achievements</h2>\n<ul>\n"
        ));
        for achievement in &data.achievements {
            html.push_str(&format!("<li>{}</li>\n", html_escape(achievement)));
        }
        html.push_str("</ul>\n</section>\n");
    }

    html.push_str("</main>\n</div>\n");
    html
}

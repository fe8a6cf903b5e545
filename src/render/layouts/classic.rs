//! Classic layout: traditional serif single column with centered
//! headings. Education leads, experience follows; interests close the
//! page joined with bullet separators.

use super::date_range;
use crate::models::ResumeData;
use crate::render::{html_escape, strip_bullet};

/// The classic layout deliberately ignores the accent override: its look
/// is monochrome serif. The parameter stays for dispatch uniformity.
pub fn render(data: &ResumeData, _accent: &str) -> String {
    let mut html = String::new();

    html.push_str("<div class=\"resume classic\">\n");

    // Centered header with a bullet-separated contact line
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
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(name)));
    html.push_str(&format!("<p class=\"title\">{}</p>\n", html_escape(title)));

    let contact_line: Vec<String> = [
        data.contact.email.as_str(),
        data.contact.phone.as_str(),
        data.contact.city.as_str(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .map(|part| html_escape(part))
    .collect();
    if !contact_line.is_empty() {
        html.push_str(&format!(
            "<p class=\"contact-line\">{}</p>\n",
            contact_line.join(" • ")
        ));
    }
    if let Some(website) = &data.contact.website {
        if !website.is_empty() {
            html.push_str(&format!(
                "<p class=\"website\">{}</p>\n",
                html_escape(website)
            ));
        }
    }
    html.push_str("</header>\n");

    if !data.summary.is_empty() {
        html.push_str(&format!(
            "<section class=\"summary\">\n<h2>Objective</h2>\n<p>{}</p>\n</section>\n",
            html_escape(&data.summary)
        ));
    }

    // Education comes before experience in this layout
    if !data.education.is_empty() {
        html.push_str("<section class=\"education\">\n<h2>Education</h2>\n");
        for edu in &data.education {
            html.push_str(&format!(
                "<div class=\"entry\">\n<h3>{}</h3>\n<p class=\"institution\">{}</p>\n<span class=\"year\">{}</span>\n",
                html_escape(&edu.degree),
                html_escape(&edu.institution),
                html_escape(&edu.year)
            ));
            if let Some(score) = &edu.score {
                if !score.is_empty() {
                    html.push_str(&format!(
                        "<span class=\"score\">GPA: {}</span>\n",
                        html_escape(score)
                    ));
                }
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if !data.experience.is_empty() {
        html.push_str("<section class=\"experience\">\n<h2>Professional Experience</h2>\n");
        for exp in &data.experience {
            html.push_str(&format!(
                "<div class=\"entry\">\n<h3>{}</h3>\n<p class=\"company\">{}</p>\n<span class=\"dates\">{}</span>\n",
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

    if !data.skills.is_empty() {
        html.push_str("<section class=\"skills\">\n<h2>Technical Skills</h2>\n<div class=\"grid\">\n");
        for skill in &data.skills {
            html.push_str(&format!(
                "<div class=\"skill\"><span class=\"name\">{}</span><span class=\"level\">{}</span></div>\n",
                html_escape(&skill.name),
                skill.proficiency.as_str()
            ));
        }
        html.push_str("</div>\n</section>\n");
    }

    if !data.projects.is_empty() {
        html.push_str("<section class=\"projects\">\n<h2>Notable Projects</h2>\n");
        for project in &data.projects {
            html.push_str(&format!(
                "<div class=\"entry\">\n<h3>{}</h3>\n",
                html_escape(&project.name)
            ));
            if let Some(link) = &project.link {
                if !link.is_empty() {
                    html.push_str(&format!("<span class=\"link\">{}</span>\n", html_escape(link)));
                }
            }
            html.push_str(&format!("<p>{}</p>\n", html_escape(&project.description)));
            if !project.stack.is_empty() {
                html.push_str(&format!(
                    "<p class=\"stack\"><strong>Technologies:</strong> {}</p>\n",
                    html_escape(&project.stack.join(", "))
                ));
            }
            html.push_str("</div>\n");
        }
        html.push_str("</section>\n");
    }

    if !data.certifications.is_empty() {
        html.push_str("<section class=\"certifications\">\n<h2>Certifications</h2>\n<ul>\n");
        for cert in &data.certifications {
            html.push_str(&format!("<li>{}</li>\n", html_escape(cert)));
        }
        html.push_str("</ul>\n</section>\n");
    }

    if !data.achievements.is_empty() {
        html.push_str("<section class=\"achievements\">\n<h2>Achievements</h2>\n<ul>\n");
        for achievement in &data.achievements {
            html.push_str(&format!("<li>{}</li>\n", html_escape(achievement)));
        }
        html.push_str("</ul>\n</section>\n");
    }

    if !data.interests.is_empty() {
        let joined: Vec<String> = data.interests.iter().map(|i| html_escape(i)).collect();
        html.push_str(&format!(
            "<section class=\"interests\">\n<h2>Personal Interests</h2>\n<p>{}</p>\n</section>\n",
            joined.join(" • ")
        ));
    }

    html.push_str("</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EducationItem;

    #[test]
    fn education_precedes_experience() {
        let mut data = ResumeData::default();
        data.education.push(EducationItem {
            degree: "BSc".to_string(),
            institution: "MIT".to_string(),
            year: "2019".to_string(),
            ..Default::default()
        });
        let mut exp = crate::models::ExperienceItem::new();
        exp.role = "Engineer".to_string();
        data.experience.push(exp);

        let html = render(&data, "#1f2937");
        let edu_at = html.find("Education").unwrap();
        let exp_at = html.find("Professional Experience").unwrap();
        assert!(edu_at < exp_at);
    }

    #[test]
    fn score_gets_gpa_prefix() {
        let mut data = ResumeData::default();
        data.education.push(EducationItem {
            degree: "BSc".to_string(),
            institution: "MIT".to_string(),
            year: "2019".to_string(),
            score: Some("3.8/4.0".to_string()),
            ..Default::default()
        });
        let html = render(&data, "#1f2937");
        assert!(html.contains("GPA: 3.8/4.0"));
    }

    #[test]
    fn interests_join_with_bullet_separators() {
        let mut data = ResumeData::default();
        data.interests = vec!["Hiking".to_string(), "Chess".to_string()];
        let html = render(&data, "#1f2937");
        assert!(html.contains("Hiking • Chess"));
    }
}

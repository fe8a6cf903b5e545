//! The three fixed visual layouts.
//!
//! Each layout is a pure function from `ResumeData` + accent color to an
//! HTML fragment. Every layout independently owns its section ordering,
//! date formatting, bullet-marker handling and accent application points,
//! and omits any section whose backing data is empty.

pub mod classic;
pub mod minimal;
pub mod modern;

use crate::models::ExperienceItem;
use crate::render::format_month;

/// Render an experience date range, honoring the `current` flag.
///
/// A current position always reads "Present" regardless of any stored end
/// date value.
fn date_range(exp: &ExperienceItem, separator: &str) -> String {
    let end = if exp.current {
        "Present".to_string()
    } else {
        format_month(&exp.end_date)
    };
    format!("{}{}{}", format_month(&exp.start_date), separator, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_range_prefers_present_over_stored_end_date() {
        let mut exp = ExperienceItem::new();
        exp.start_date = "2020-01".to_string();
        exp.end_date = "2022-03".to_string();
        exp.current = true;
        assert_eq!(date_range(&exp, " - "), "Jan 2020 - Present");

        exp.current = false;
        assert_eq!(date_range(&exp, " — "), "Jan 2020 — Mar 2022");
    }
}

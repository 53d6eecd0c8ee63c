use crate::schema::stats::CourseStats;

/// Paragraph share above which a recommendation is made.
pub const MAX_PARAGRAPH_RATIO: f64 = 0.5;
/// Average section length above which a recommendation is made.
pub const MAX_AVERAGE_SECTION_ITEMS: f64 = 15.0;

/// Authoring advice for a course, always at least one entry.
pub fn generate_recommendations(stats: &CourseStats) -> Vec<String> {
    let mut out = Vec::new();

    let ratio = stats.paragraph_ratio();
    if ratio > MAX_PARAGRAPH_RATIO {
        out.push(format!(
            "{:.0}% of the items are paragraphs; mix in lists, callouts and examples.",
            ratio * 100.0
        ));
    }
    if stats.count("exercise") == 0 {
        out.push("No exercise found; add at least one hands-on exercise.".to_owned());
    }
    if stats.count("quiz") == 0 {
        out.push("No quiz found; add a quick quiz to check understanding.".to_owned());
    }
    let avg = stats.average_items_per_section();
    if avg > MAX_AVERAGE_SECTION_ITEMS {
        out.push(format!(
            "Sections hold {avg:.1} items on average; split the longer ones."
        ));
    }

    if out.is_empty() {
        out.push("The course structure looks well balanced.".to_owned());
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/schema/recommend.rs"]
mod tests;

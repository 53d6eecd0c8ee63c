use super::*;
use std::collections::BTreeMap;

fn stats(total: usize, paragraphs: usize, sections: usize, tags: &[&str]) -> CourseStats {
    CourseStats {
        sections,
        total_items: total,
        items_per_section: Vec::new(),
        items_by_type: tags
            .iter()
            .map(|t| ((*t).to_owned(), 1))
            .collect::<BTreeMap<_, _>>(),
        paragraphs,
    }
}

#[test]
fn balanced_course_gets_a_single_affirmation() {
    let r = generate_recommendations(&stats(10, 3, 2, &["exercise", "quiz"]));
    assert_eq!(r, vec!["The course structure looks well balanced.".to_owned()]);
}

#[test]
fn paragraph_heavy_course() {
    let r = generate_recommendations(&stats(4, 3, 1, &["exercise", "quiz"]));
    assert_eq!(r.len(), 1);
    assert!(r[0].starts_with("75%"));
}

#[test]
fn exactly_half_paragraphs_is_fine() {
    let r = generate_recommendations(&stats(4, 2, 1, &["exercise", "quiz"]));
    assert_eq!(r.len(), 1);
    assert!(r[0].contains("well balanced"));
}

#[test]
fn missing_exercise_and_quiz() {
    let r = generate_recommendations(&stats(2, 0, 1, &[]));
    assert_eq!(r.len(), 2);
    assert!(r[0].contains("exercise"));
    assert!(r[1].contains("quiz"));
}

#[test]
fn long_sections() {
    let r = generate_recommendations(&stats(32, 0, 2, &["exercise", "quiz"]));
    assert_eq!(r, vec!["Sections hold 16.0 items on average; split the longer ones.".to_owned()]);
}

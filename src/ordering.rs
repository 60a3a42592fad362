//! Ordering policy: record order and section-label order.
//!
//! Two comparators are defined here. [`compare_records`] is the total order
//! over application records used for every sort in the crate: primary key is
//! case-insensitive title collation, tie-break is the [`AppKey`] ordering so
//! that equal-title records never reorder across rebuilds with unchanged
//! input. [`compare_section_labels`] orders section labels during the
//! cross-letter grouping pass for locales that need it; it agrees in
//! direction with the title collation, with the one extra rule that
//! alphanumeric sections sort before symbol sections.

use std::cmp::Ordering;

use crate::domain::AppRecord;

/// Total order over application records.
///
/// Case-insensitive title comparison first (Unicode simple lowercase
/// folding), then the identity key as a stable, deterministic disambiguator.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use appdrawer::{ordering::compare_records, AppRecord};
///
/// let a = AppRecord::new("com.a/.A", 0, "Alpha");
/// let b = AppRecord::new("com.b/.B", 0, "alpha2");
/// assert_eq!(compare_records(&a, &b), Ordering::Less);
/// ```
#[must_use]
pub fn compare_records(a: &AppRecord, b: &AppRecord) -> Ordering {
    compare_case_insensitive(&a.title, &b.title).then_with(|| a.key.cmp(&b.key))
}

/// Orders section labels for locale-driven section grouping.
///
/// Labels whose first character is alphanumeric sort before symbol labels
/// (letters and digits ahead of `∙`); within a class, labels compare
/// case-insensitively.
#[must_use]
pub fn compare_section_labels(a: &str, b: &str) -> Ordering {
    let a_alnum = starts_alphanumeric(a);
    let b_alnum = starts_alphanumeric(b);
    match (a_alnum, b_alnum) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => compare_case_insensitive(a, b),
    }
}

fn starts_alphanumeric(label: &str) -> bool {
    // The digit bucket is the literal "#", which must class with the
    // alphanumeric sections even though '#' itself is a symbol.
    label
        .chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '#')
}

fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(component: &str, title: &str) -> AppRecord {
        AppRecord::new(component, 0, title)
    }

    #[test]
    fn titles_compare_case_insensitively() {
        assert_eq!(
            compare_records(&rec("com.a/.A", "alpha"), &rec("com.b/.B", "BRAVO")),
            Ordering::Less
        );
        assert_eq!(
            compare_records(&rec("com.a/.A", "Alpha"), &rec("com.b/.B", "alpha2")),
            Ordering::Less
        );
    }

    #[test]
    fn equal_titles_break_ties_by_key() {
        let a = rec("com.a/.A", "Mail");
        let b = rec("com.b/.B", "mail");
        assert_eq!(compare_records(&a, &b), Ordering::Less);
        assert_eq!(compare_records(&b, &a), Ordering::Greater);
    }

    #[test]
    fn same_key_same_title_is_equal() {
        let a = rec("com.a/.A", "Mail");
        assert_eq!(compare_records(&a, &a.clone()), Ordering::Equal);
    }

    #[test]
    fn user_profile_disambiguates_cloned_apps() {
        let personal = AppRecord::new("com.a/.A", 0, "Mail");
        let work = AppRecord::new("com.a/.A", 10, "Mail");
        assert_eq!(compare_records(&personal, &work), Ordering::Less);
    }

    #[test]
    fn alphanumeric_sections_precede_symbol_sections() {
        assert_eq!(compare_section_labels("A", "∙"), Ordering::Less);
        assert_eq!(compare_section_labels("∙", "#"), Ordering::Greater);
        assert_eq!(compare_section_labels("#", "A"), Ordering::Less);
    }

    #[test]
    fn section_labels_compare_case_insensitively() {
        assert_eq!(compare_section_labels("a", "B"), Ordering::Less);
        assert_eq!(compare_section_labels("A", "a"), Ordering::Equal);
    }
}

//! Ordering engine for the final per-group output

use crate::record::Enrollee;
use std::cmp::Ordering;

/// Compare two enrollees by last name, then first name.
///
/// Comparison is plain code point order, not locale-aware collation, so
/// the produced order is identical across platforms and locales. Safe on
/// equal and empty strings.
pub fn compare_by_name(a: &Enrollee, b: &Enrollee) -> Ordering {
    a.last_name
        .cmp(&b.last_name)
        .then_with(|| a.first_name.cmp(&b.first_name))
}

/// Stably sort enrollees by `(last_name, first_name)`.
pub fn sort_by_name(records: &mut [Enrollee]) {
    records.sort_by(compare_by_name);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrollee(user_id: i64, first: &str, last: &str) -> Enrollee {
        Enrollee {
            user_id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            version: 1,
            insurance: "A".to_string(),
        }
    }

    #[test]
    fn test_sort_by_last_name() {
        let mut records = vec![enrollee(1, "Amy", "Zed"), enrollee(2, "Jane", "Doe")];
        sort_by_name(&mut records);

        let lasts: Vec<&str> = records.iter().map(|e| e.last_name.as_str()).collect();
        assert_eq!(lasts, vec!["Doe", "Zed"]);
    }

    #[test]
    fn test_sort_ties_broken_by_first_name() {
        let mut records = vec![
            enrollee(1, "Zoe", "Doe"),
            enrollee(2, "Amy", "Doe"),
            enrollee(3, "Jane", "Doe"),
        ];
        sort_by_name(&mut records);

        let firsts: Vec<&str> = records.iter().map(|e| e.first_name.as_str()).collect();
        assert_eq!(firsts, vec!["Amy", "Jane", "Zoe"]);
    }

    #[test]
    fn test_sort_is_stable_on_identical_names() {
        let mut records = vec![
            enrollee(1, "Jane", "Doe"),
            enrollee(2, "Jane", "Doe"),
            enrollee(3, "Jane", "Doe"),
        ];
        sort_by_name(&mut records);

        let ids: Vec<i64> = records.iter().map(|e| e.user_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_handles_empty_names() {
        let mut records = vec![enrollee(1, "Jane", "Doe"), enrollee(2, "", "")];
        sort_by_name(&mut records);

        assert_eq!(records[0].user_id, 2);
        assert_eq!(records[1].user_id, 1);
    }

    #[test]
    fn test_compare_is_code_point_order() {
        // Uppercase sorts before lowercase; no locale folding
        let upper = enrollee(1, "jane", "Zed");
        let lower = enrollee(2, "jane", "apple");
        assert_eq!(compare_by_name(&upper, &lower), Ordering::Less);
    }
}

use crate::course::{fold_case, Course};

/// Returns the courses whose title or code contains `query`, ignoring case.
///
/// Order is preserved and an empty query yields every course. The query is
/// not trimmed, so whitespace is matched literally.
pub fn filter_courses<'a>(query: &str, courses: &'a [Course]) -> Vec<&'a Course> {
    if query.is_empty() {
        return courses.iter().collect();
    }
    let needle = fold_case(query);
    courses
        .iter()
        .filter(|course| course.matches_folded(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn codes(courses: &[&Course]) -> Vec<String> {
        courses.iter().map(|c| c.code.clone()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let catalog = Catalog::builtin();
        let all = filter_courses("", catalog.courses());
        assert_eq!(all.len(), catalog.len());
        assert!(all.iter().zip(catalog.courses()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_case_insensitive() {
        let catalog = Catalog::builtin();
        let lower = filter_courses("cs301", catalog.courses());
        let upper = filter_courses("CS301", catalog.courses());
        assert_eq!(lower, upper);
        assert_eq!(codes(&lower), vec!["CS301"]);
    }

    #[test]
    fn test_title_match() {
        let catalog = Catalog::builtin();
        let result = filter_courses("Security", catalog.courses());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Cyber Security");
    }

    #[test]
    fn test_no_match_is_empty() {
        let catalog = Catalog::builtin();
        assert!(filter_courses("CS999", catalog.courses()).is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let catalog = Catalog::builtin();
        for query in ["de", "DESIGN", "cs3", " ", "a", "zz", "Data"] {
            let result = filter_courses(query, catalog.courses());
            let mut source = catalog.courses().iter();
            for course in &result {
                assert!(
                    source.any(|c| c == *course),
                    "{query:?} produced a course out of order or not in the catalog"
                );
            }
        }
    }

    #[test]
    fn test_design_matches_two_titles() {
        let catalog = Catalog::builtin();
        let result = filter_courses("design", catalog.courses());
        assert_eq!(codes(&result), vec!["CS302", "CS308"]);
    }

    #[test]
    fn test_non_ascii_title_matches_any_case() {
        let courses = vec![
            Course::new("ΟΔΟΣ", "GR101", 3, "Street names.", "No prerequisites"),
            Course::new("Straße", "DE200", 2, "German streets.", "No prerequisites"),
        ];
        for query in ["Σ", "σ", "ΟΔΟΣ", "οδοσ", "δοσ"] {
            let hits = filter_courses(query, &courses);
            assert_eq!(hits.len(), 1, "{query:?} should match the Greek title");
            assert_eq!(hits[0].code, "GR101");
        }
        assert_eq!(filter_courses("STRASSE", &courses).len(), 0);
        assert_eq!(filter_courses("STRAßE", &courses)[0].code, "DE200");
    }

    #[test]
    fn test_whitespace_is_literal() {
        let catalog = Catalog::builtin();
        let result = filter_courses(" ", catalog.courses());
        // Every built-in title has a space; no code does.
        assert!(result.iter().all(|c| c.title.contains(' ')));
        assert_eq!(result.len(), 10);
    }
}

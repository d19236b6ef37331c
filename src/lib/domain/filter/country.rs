use std::collections::HashSet;

const QUOTES: &[char] = &['\'', '"'];

#[derive(Debug, Clone)]
pub struct CountryFilter {
    targets: HashSet<String>,
}

impl CountryFilter {
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            targets: targets
                .into_iter()
                .map(|t| normalize_country(t.as_ref()))
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn targets(&self) -> Vec<&str> {
        let mut targets: Vec<&str> = self.targets.iter().map(String::as_str).collect();
        targets.sort_unstable();
        targets
    }

    pub fn matches(&self, country: Option<&str>) -> bool {
        country.is_some_and(|c| self.targets.contains(&normalize_country(c)))
    }
}

/// Whitespace and surrounding quotes removed, lowercased.
pub fn normalize_country(value: &str) -> String {
    value.trim().trim_matches(QUOTES).trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter() -> CountryFilter {
        CountryFilter::new(["usa", "united_kingdom"])
    }

    #[test]
    fn matching_ignores_case_quotes_and_whitespace() {
        let filter = filter();
        assert!(filter.matches(Some("USA")));
        assert!(filter.matches(Some("'usa'")));
        assert!(filter.matches(Some("  \"United_Kingdom\" ")));
        assert!(filter.matches(Some(" ' usa ' ")));
    }

    #[test]
    fn quoted_targets_match_unquoted_values() {
        let filter = CountryFilter::new(["'usa'", "'united_kingdom'"]);
        assert!(filter.matches(Some("usa")));
        assert_eq!(filter.targets(), vec!["united_kingdom", "usa"]);
    }

    #[test]
    fn other_or_missing_countries_are_rejected() {
        let filter = filter();
        assert!(!filter.matches(Some("france")));
        assert!(!filter.matches(Some("united kingdom")));
        assert!(!filter.matches(Some("")));
        assert!(!filter.matches(None));
    }
}

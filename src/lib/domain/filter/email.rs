use std::collections::HashSet;

/// Decides whether an address belongs to a business rather than a personal
/// mail provider.
#[derive(Debug, Clone)]
pub struct EmailClassifier {
    personal_domains: HashSet<String>,
    require_at_sign: bool,
}

impl EmailClassifier {
    pub fn new<I, S>(personal_domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            personal_domains: personal_domains
                .into_iter()
                .map(|d| d.as_ref().trim().to_lowercase())
                .filter(|d| !d.is_empty())
                .collect(),
            require_at_sign: false,
        }
    }

    /// When set, values without an `@` are classified as not business.
    pub fn with_require_at_sign(mut self, require: bool) -> Self {
        self.require_at_sign = require;
        self
    }

    pub fn personal_domains(&self) -> &HashSet<String> {
        &self.personal_domains
    }

    pub fn is_business(&self, email: Option<&str>) -> bool {
        let Some(email) = email else {
            return false;
        };
        let unquoted = email.trim().trim_matches('\'');
        if self.require_at_sign && !unquoted.contains('@') {
            return false;
        }
        !self.personal_domains.contains(&domain_of(unquoted))
    }
}

/// Lowercased text after the last `@`, or the whole value when there is none.
pub fn domain_of(email: &str) -> String {
    email
        .rsplit('@')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

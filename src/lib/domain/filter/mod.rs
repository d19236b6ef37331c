pub mod country;
pub mod email;

pub use country::{CountryFilter, normalize_country};
pub use email::{EmailClassifier, domain_of};

use crate::config::Config;
use crate::domain::models::Table;
use tracing::debug;

pub const COUNTRY_COLUMN: &str = "country";
pub const EMAIL_COLUMN: &str = "email";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterStats {
    pub rows_in: usize,
    pub country_matched: usize,
    pub business_emails: usize,
}

/// Country filter followed by the business-email filter.
#[derive(Debug, Clone)]
pub struct RowFilter {
    pub countries: CountryFilter,
    pub emails: EmailClassifier,
}

impl RowFilter {
    pub fn new(countries: CountryFilter, emails: EmailClassifier) -> Self {
        Self { countries, emails }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CountryFilter::new(&config.target_countries),
            EmailClassifier::new(&config.personal_email_domains)
                .with_require_at_sign(config.require_email_at_sign),
        )
    }

    /// Filters `table` in place. Fails if either column is missing.
    pub fn apply(&self, table: &mut Table) -> anyhow::Result<FilterStats> {
        let country_idx = table.column_index(COUNTRY_COLUMN)?;
        let email_idx = table.column_index(EMAIL_COLUMN)?;
        let rows_in = table.len();

        table.retain_rows(|row| {
            let country = row[country_idx].as_text();
            self.countries.matches(country.as_deref())
        });
        let country_matched = table.len();
        debug!(
            "{} of {} rows matched countries {:?}",
            country_matched,
            rows_in,
            self.countries.targets()
        );

        table.retain_rows(|row| {
            let email = row[email_idx].as_text();
            self.emails.is_business(email.as_deref())
        });
        let business_emails = table.len();
        debug!(
            "{} of {} rows have business emails",
            business_emails, country_matched
        );

        Ok(FilterStats {
            rows_in,
            country_matched,
            business_emails,
        })
    }
}

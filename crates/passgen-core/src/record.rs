//! Stored credential records and in-memory filtering

use std::fmt;

/// One stored `(site, username, secret)` triple
#[derive(Clone, PartialEq, Eq, Default)]
pub struct CredentialRecord {
    pub site: String,
    pub username: String,
    pub secret: String,
}

impl CredentialRecord {
    pub fn new(
        site: impl Into<String>,
        username: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            username: username.into(),
            secret: secret.into(),
        }
    }

    /// Build a record from a raw row, padding missing trailing fields with
    /// empty strings. Fields past the third are ignored.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default().to_string();
        let site = next();
        let username = next();
        let secret = next();
        Self {
            site,
            username,
            secret,
        }
    }

    /// Case-insensitive match on site or username. `query` must already be lowercase.
    fn matches_lowercase(&self, query: &str) -> bool {
        self.site.to_lowercase().contains(query) || self.username.to_lowercase().contains(query)
    }
}

impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("site", &self.site)
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Filter records by a case-insensitive substring of site or username
///
/// The secret is never searched. An empty query keeps every record, and the
/// original order is always preserved.
pub fn filter_records<'a>(records: &'a [CredentialRecord], query: &str) -> Vec<&'a CredentialRecord> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let query = query.to_lowercase();
    records
        .iter()
        .filter(|record| record.matches_lowercase(&query))
        .collect()
}

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// Classified result of one lookup call, distinct from the raw HTTP response.
///
/// Represented as an explicit tagged variant so each branch can carry its own
/// log message without conflating "no records" with "quota exceeded".
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// HTTP 200 with a JSON body. The shape is dictated entirely by the
    /// upstream service; flattening into report rows happens later.
    Found(Value),

    /// The service had no data for this email. Contributes no report rows.
    NoData(NoDataKind),

    /// The call failed. Reported on the console; the batch moves on.
    Failed(LookupFailure),
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }
}

/// Internal classification of a no-data response. Both kinds yield the same
/// observable behavior (no row in the report) but get distinct log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoDataKind {
    /// HTTP 404 from the endpoint.
    EndpointMissing,

    /// HTTP 500: the upstream reports "no records found" and internal server
    /// errors through the same status.
    NoRecordsOrServerError,
}

/// Why a lookup call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// Unexpected HTTP status (invalid API key, exceeded quota, ...).
    Status { code: u16 },

    /// The request never completed (DNS, TLS, connect, timeout, ...).
    Transport { message: String },

    /// HTTP 200 whose body could not be decoded as JSON.
    Decode { message: String },
}

/// One leaked-credential entry associated with an email, as returned inside
/// the payload's `result` list. Every field defaults when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BreachRecord {
    #[serde(default)]
    pub password: Option<String>,

    #[serde(default)]
    pub sha1: Option<String>,

    #[serde(default)]
    pub hash: Option<String>,

    #[serde(default)]
    pub sources: Vec<String>,
}

/// One line of the CSV report, fields already rendered as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub email: String,
    pub password: String,
    pub sha1: String,
    pub hash: String,
    /// Source names joined with ", ".
    pub sources: String,
}

impl ReportRow {
    pub fn from_record(email: &str, record: &BreachRecord) -> Self {
        Self {
            email: email.to_string(),
            password: record.password.clone().unwrap_or_default(),
            sha1: record.sha1.clone().unwrap_or_default(),
            hash: record.hash.clone().unwrap_or_default(),
            sources: record.sources.join(", "),
        }
    }
}

/// Insertion-ordered mapping from email to its lookup outcome.
///
/// Unique-key semantics: inserting an email again keeps its original position
/// and replaces the outcome. Every queried email is a key, whatever its
/// outcome, so the report writer can rely on the mapping being complete.
#[derive(Default, Debug, Clone)]
pub struct LookupResults {
    order: Vec<String>,
    outcomes: HashMap<String, LookupOutcome>,
}

impl LookupResults {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the outcome for an email.
    pub fn insert(&mut self, email: String, outcome: LookupOutcome) {
        if !self.outcomes.contains_key(&email) {
            self.order.push(email.clone());
        }
        self.outcomes.insert(email, outcome);
    }

    pub fn get(&self, email: &str) -> Option<&LookupOutcome> {
        self.outcomes.get(email)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Iterate entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LookupOutcome)> {
        self.order.iter().filter_map(|email| {
            self.outcomes
                .get(email)
                .map(|outcome| (email.as_str(), outcome))
        })
    }

    /// Emails in first-insertion order.
    pub fn emails(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn duplicate_insert_keeps_position_takes_last_outcome() {
        let mut results = LookupResults::new();
        results.insert(
            "a@x.com".into(),
            LookupOutcome::NoData(NoDataKind::NoRecordsOrServerError),
        );
        results.insert("b@y.com".into(), LookupOutcome::Found(json!({"result": []})));
        results.insert(
            "a@x.com".into(),
            LookupOutcome::Failed(LookupFailure::Status { code: 429 }),
        );

        assert_eq!(results.len(), 2);
        let order: Vec<&str> = results.emails().collect();
        assert_eq!(order, vec!["a@x.com", "b@y.com"]);
        assert_eq!(
            results.get("a@x.com"),
            Some(&LookupOutcome::Failed(LookupFailure::Status { code: 429 }))
        );
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let mut results = LookupResults::new();
        for email in ["c@z.com", "a@x.com", "b@y.com"] {
            results.insert(email.into(), LookupOutcome::NoData(NoDataKind::EndpointMissing));
        }
        let order: Vec<&str> = results.iter().map(|(email, _)| email).collect();
        assert_eq!(order, vec!["c@z.com", "a@x.com", "b@y.com"]);
    }

    #[test]
    fn breach_record_defaults_missing_fields() {
        let record: BreachRecord =
            serde_json::from_value(json!({"password": "p1"})).unwrap();
        assert_eq!(record.password.as_deref(), Some("p1"));
        assert_eq!(record.sha1, None);
        assert_eq!(record.hash, None);
        assert!(record.sources.is_empty());
    }

    #[test]
    fn report_row_joins_sources() {
        let record = BreachRecord {
            password: Some("p1".into()),
            sha1: Some("s1".into()),
            hash: None,
            sources: vec!["siteA".into(), "siteB".into()],
        };
        let row = ReportRow::from_record("a@x.com", &record);
        assert_eq!(row.email, "a@x.com");
        assert_eq!(row.hash, "");
        assert_eq!(row.sources, "siteA, siteB");
    }
}

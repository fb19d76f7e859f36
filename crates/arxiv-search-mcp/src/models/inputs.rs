//! Input model for the `search_paper` tool.

use serde::{Deserialize, Serialize};

use super::{DateType, SearchField, Subject};
use crate::config::defaults;

/// Parameters of one arXiv search.
///
/// Optional filters stay `None` until the caller supplies them; `None` fields
/// are left out of the outbound query entirely. An explicit empty string is a
/// supplied value and is sent as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Term to search for in paper metadata.
    pub search_term: String,

    /// Field to search in.
    #[serde(default)]
    pub field: SearchField,

    /// Subject area filter.
    #[serde(default)]
    pub subject: Option<Subject>,

    /// Start of the date window, `YYYY-MM-DD`.
    #[serde(default)]
    pub date_from: Option<String>,

    /// End of the date window, `YYYY-MM-DD`.
    #[serde(default)]
    pub date_to: Option<String>,

    /// Which date the window applies to.
    #[serde(default)]
    pub date_type: DateType,

    /// Maximum number of results.
    #[serde(default = "default_num_results")]
    pub num_results: i32,

    /// Pagination index: 0 is the first page, 1 the second, and so on.
    #[serde(default = "default_start")]
    pub start: i32,
}

fn default_num_results() -> i32 {
    defaults::NUM_RESULTS
}

fn default_start() -> i32 {
    defaults::START
}

impl SearchRequest {
    /// Create a request for `search_term` with every other parameter defaulted.
    #[must_use]
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            field: SearchField::default(),
            subject: None,
            date_from: None,
            date_to: None,
            date_type: DateType::default(),
            num_results: defaults::NUM_RESULTS,
            start: defaults::START,
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: SearchField) -> Self {
        self.field = field;
        self
    }

    #[must_use]
    pub fn with_subject(mut self, subject: Subject) -> Self {
        self.subject = Some(subject);
        self
    }

    #[must_use]
    pub fn with_date_range(
        mut self,
        date_from: Option<impl Into<String>>,
        date_to: Option<impl Into<String>>,
    ) -> Self {
        self.date_from = date_from.map(Into::into);
        self.date_to = date_to.map(Into::into);
        self
    }

    #[must_use]
    pub fn with_date_type(mut self, date_type: DateType) -> Self {
        self.date_type = date_type;
        self
    }

    #[must_use]
    pub fn with_page(mut self, num_results: i32, start: i32) -> Self {
        self.num_results = num_results;
        self.start = start;
        self
    }

    /// Build the outbound query parameters.
    ///
    /// Order is fixed: `search_term, field, subject, date_from, date_to,
    /// date_type, num_results, start`, with absent optionals skipped.
    #[must_use]
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let candidates: [(&'static str, Option<String>); 8] = [
            ("search_term", Some(self.search_term.clone())),
            ("field", Some(self.field.as_str().to_string())),
            ("subject", self.subject.map(|s| s.as_str().to_string())),
            ("date_from", self.date_from.clone()),
            ("date_to", self.date_to.clone()),
            ("date_type", Some(self.date_type.as_str().to_string())),
            ("num_results", Some(self.num_results.to_string())),
            ("start", Some(self.start.to_string())),
        ];

        candidates.into_iter().filter_map(|(key, value)| value.map(|v| (key, v))).collect()
    }
}

use serde::{Deserialize, Serialize};

pub mod chart;
pub mod dates;
pub mod draft;
pub mod money;

pub use chart::{BarPoint, ChartSeries, PieSlice};
pub use draft::{DraftError, ExpenseDraft};

/// A single tracked expense as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Backend-assigned identity, absent until the record is first saved
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub amount: f64,
    pub category: String,
    /// Calendar date as sent by the backend (`YYYY-MM-DD` or RFC 3339)
    pub date: String,
}

impl Expense {
    /// True when both records carry the same backend identity.
    pub fn same_identity(&self, other: &Expense) -> bool {
        matches!((&self.id, &other.id), (Some(a), Some(b)) if a == b)
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}

/// Body of a create or update request. Never carries an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpensePayload {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

/// Per-category slice of the backend aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub count: u64,
}

/// Backend-computed aggregate over all expenses.
///
/// The client never derives this from its local list; `Default` is the zeroed
/// fallback used when the summary endpoint fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub by_category: Vec<CategoryTotal>,
}

/// Shape of a non-2xx response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Extracts a server message from a raw body, tolerating non-JSON bodies.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .filter(|message| !message.is_empty())
    }
}

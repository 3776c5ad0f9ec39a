use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error body returned by the translation boundary. `errors` is only ever
/// populated by request-shape validation failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub details: Option<String>,
    pub status_code: u16,
    pub timestamp: DateTime<Utc>,
    pub errors: Option<HashMap<String, Vec<String>>>,
}

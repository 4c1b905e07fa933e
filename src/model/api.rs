use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub details: String,
}

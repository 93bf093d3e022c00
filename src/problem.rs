//! JSON error body for routing failures
//!
//! ```json
//! { "status": 404, "error": "Not Found", "reason": "no route for GET /nope" }
//! ```

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Error body returned to clients when a request cannot be routed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Numeric HTTP status
    pub status: u16,
    /// Canonical reason phrase for `status`
    pub error: String,
    /// What went wrong
    pub reason: String,
}

impl ErrorBody {
    pub fn new(status: StatusCode, reason: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            reason: reason.into(),
        }
    }

    /// 404 body for a request that matched no route
    pub fn not_found(method: &http::Method, path: &str) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("no route for {} {}", method, path),
        )
    }

    /// # Errors
    ///
    /// Only fails if serialization itself fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// The status as an [`http::StatusCode`]
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

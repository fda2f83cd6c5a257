//! API Response types
//!
//! The menu backend answers with bare JSON entities on success. Failures may
//! carry a small error body:
//! ```json
//! { "error": "Subdomain already taken" }
//! ```

use serde::{Deserialize, Serialize};

/// Error body returned by the backend on non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable message
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Parse an error body, returning the message if one is present
    pub fn message_from(text: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(text)
            .ok()
            .and_then(|body| body.error)
            .filter(|msg| !msg.trim().is_empty())
    }
}

//! Response types for the HTTP scale service.

use serde::{Deserialize, Serialize};

/// Error payload: `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// A computed HTTP reply: status code plus JSON body.
#[derive(Debug, Clone)]
pub struct Reply {
    /// HTTP status code.
    pub status: u16,
    /// JSON-encoded response body.
    pub body: String,
}

impl Reply {
    /// A 200 reply with an already-serialized JSON body.
    pub fn ok(body: String) -> Self {
        Reply { status: 200, body }
    }

    /// An error reply wrapping the message in the `{"error": ...}` shape.
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        let body = serde_json::to_string(&ErrorBody {
            error: message.into(),
        })
        .unwrap_or_else(|_| r#"{"error":"An unexpected error occurred"}"#.to_string());
        Reply { status, body }
    }
}

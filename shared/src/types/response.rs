//! API response envelopes
//!
//! Every JSON body leaving the server is one of two shapes:
//! `{status, data}` for successful payloads and `{status, message}`
//! for everything else. `status` is `"success"` for 2xx, `"fail"` for
//! client-caused errors, and `"error"` for server-side failures.

use serde::{Deserialize, Serialize};

/// Outcome discriminator carried in every response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Fail,
    Error,
}

/// Successful response carrying a payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub status: Status,
    pub data: T,
}

impl<T> DataResponse<T> {
    /// Wrap a payload in the success envelope
    pub fn success(data: T) -> Self {
        Self {
            status: Status::Success,
            data,
        }
    }
}

/// Response carrying only a human-readable message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MessageResponse {
    /// Bare success acknowledgement: `{"status":"success"}`
    pub fn success() -> Self {
        Self {
            status: Status::Success,
            message: None,
        }
    }

    /// Success with an informational message
    pub fn success_with(message: impl Into<String>) -> Self {
        Self {
            status: Status::Success,
            message: Some(message.into()),
        }
    }

    /// Client-fault failure: `{"status":"fail","message":...}`
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: Status::Fail,
            message: Some(message.into()),
        }
    }

    /// Server-fault failure: `{"status":"error","message":...}`
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            message: Some(message.into()),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::errors::InitError;

pub const SUCCESS_MESSAGE: &str = "Schema created successfully";
pub const FAILURE_MESSAGE: &str = "Failed to create schema";

/// Result envelope handed back to the invoking platform.
///
/// `body` is itself a JSON document, serialized to a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessBody {
    pub message: String,
    pub database: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FailureBody {
    pub error: String,
    pub message: String,
}

impl InvocationResponse {
    #[must_use]
    pub fn success(database: &str) -> Self {
        Self::new(
            200,
            &SuccessBody {
                message: SUCCESS_MESSAGE.to_string(),
                database: database.to_string(),
            },
        )
    }

    /// Failure envelope carrying only the error's public message.
    #[must_use]
    pub fn failure(err: &InitError) -> Self {
        Self::new(
            500,
            &FailureBody {
                error: err.public_message(),
                message: FAILURE_MESSAGE.to_string(),
            },
        )
    }

    fn new<B: Serialize>(status_code: u16, body: &B) -> Self {
        // Plain string fields always serialize.
        let body = serde_json::to_string(body).unwrap_or_default();
        Self { status_code, body }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_code == 200
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope for state-changing quiz operations.
///
/// Rejected requests are not errors on the wire: they carry `success: false` and a
/// human-readable `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            id: None,
            message: None,
        }
    }

    #[must_use]
    pub fn created(id: String) -> Self {
        Self {
            id: Some(id),
            ..Self::ok()
        }
    }

    pub fn rejected<M: Into<String>>(message: M) -> Self {
        Self {
            success: false,
            id: None,
            message: Some(message.into()),
        }
    }
}

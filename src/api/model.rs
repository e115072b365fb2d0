use serde::Serialize;

/// Body of every 4xx/5xx API response. `success` is the string `"false"`, not a boolean.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(super) struct ErrorResponse {
    pub success: &'static str,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self {
            success: "false",
            error,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct PingResponse {
    pub success: bool,
}

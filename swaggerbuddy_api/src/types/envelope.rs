use serde::{Deserialize, Serialize};

/// Wrapper the backend puts around every response body.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BackendResponse<T> {
    #[serde(default)]
    pub message: String,
    pub status_code: i64,
    pub data: T,
}

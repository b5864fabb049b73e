use serde::{Deserialize, Serialize};

/// Response envelope for POST /weather. The saved record's id is
/// deliberately not reflected here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    pub result: SaveResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResult {
    pub message: String,
    pub date: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Backend returned status {status}: {detail}")]
    Backend { status: u16, detail: String },
}

impl DeckError {
    /// Map a non-success HTTP status and its body to an error.
    ///
    /// The collection backend reports failures as `{"detail": "..."}`; when
    /// the body has that shape the detail string is used, otherwise the raw
    /// body (or the bare status) is kept.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("HTTP {status}")
                } else {
                    trimmed.to_string()
                }
            });

        if status == 404 {
            DeckError::NotFound(detail)
        } else {
            DeckError::Backend { status, detail }
        }
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;

pub type LtResult<T, E = LtError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum LtError {
    /// The backend refused the call and explained why.
    #[error("{message}")]
    Rejected { message: String },

    #[error("unknown skill: {0}")]
    UnknownSkill(String),

    #[error("invalid skill catalog")]
    InvalidCatalog(#[source] serde_json::Error),

    #[error("profile service request failed")]
    Http(#[from] reqwest::Error),

    #[error("an internal error occurred")]
    Anyhow(#[from] anyhow::Error),
}

impl LtError {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Human readable text suitable for the form banner.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

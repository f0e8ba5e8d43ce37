use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// A non-2xx answer from the API.
///
/// `message` is the server's `message` field, else its `error` field, else
/// `"HTTP <status>: <status_text>"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub status_text: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl ClientError {
    /// HTTP status of an API error, `None` for every other failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_for_api_errors() {
        let api = ClientError::from(ApiError {
            status: 404,
            status_text: "Not Found".to_string(),
            message: "Resource not found".to_string(),
        });
        assert_eq!(api.status(), Some(404));
        assert!(api.is_not_found());
        assert_eq!(api.to_string(), "Resource not found");

        let parse = ClientError::from(serde_json::from_str::<u32>("nope").unwrap_err());
        assert_eq!(parse.status(), None);
        assert!(!parse.is_not_found());
    }
}

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP error {status} from {url}: {message}")]
    Http {
        url: String,
        status: u16,
        message: String,
    },
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ApiError {
    /// Status code of an HTTP error response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_status_and_message() {
        let err = ApiError::Http {
            url: "http://localhost:9999/api/posts".to_string(),
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_transport());
        assert_eq!(
            err.to_string(),
            "HTTP error 500 from http://localhost:9999/api/posts: Internal Server Error"
        );
    }

    #[test]
    fn test_decode_error_keeps_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = source.to_string();
        let err = ApiError::from(source);
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains(&expected));
    }
}

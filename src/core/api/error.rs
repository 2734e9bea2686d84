//! Analysis API error types.

/// Errors from talking to the analysis service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, reset).
    #[error("could not reach the analysis service: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync + 'static>),
    /// The service answered with a non-2xx status where the body is not used.
    #[error("analysis service returned HTTP {0}")]
    Status(u16),
    /// The response body was not the JSON we expected.
    #[error("malformed response from analysis service: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(Box::new(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_from_serde() {
        let e = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ApiError = e.into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().starts_with("malformed response"));
    }

    #[test]
    fn status_display() {
        assert_eq!(
            ApiError::Status(502).to_string(),
            "analysis service returned HTTP 502"
        );
    }
}

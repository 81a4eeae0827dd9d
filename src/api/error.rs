use thiserror::Error;

/// Errors surfaced by the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The endpoint answered with a non-2xx status. The original status and
    /// body are discarded; only the fixed per-endpoint message survives.
    #[error("{message}")]
    Endpoint { message: &'static str },

    /// Transport-level failure (connection refused, malformed body, ...).
    /// Propagated as-is, distinct from the fixed endpoint messages.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    pub fn endpoint(message: &'static str) -> Self {
        ApiError::Endpoint { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_error_renders_fixed_message() {
        let err = ApiError::endpoint("Failed to fetch students");
        assert_eq!(err.to_string(), "Failed to fetch students");
    }
}

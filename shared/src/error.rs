//! Typed failure of a single back-office API request.

use thiserror::Error;

/// Failure of one request against the back-office API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never completed (offline, DNS, connection reset).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status and a failure envelope.
    #[error("{message}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// Failure message from the envelope, empty when the body had none.
        message: String,
    },
    /// A 2xx response whose body did not match the expected envelope.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for a user-facing notification.
    ///
    /// Server messages pass through verbatim; transport and decode
    /// failures collapse to generic wording.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => "Network error, please try again".to_string(),
            ApiError::Api { message, .. } if !message.is_empty() => message.clone(),
            ApiError::Api { status, .. } => format!("Request failed with status {status}"),
            ApiError::Decode(_) => "Unexpected response from the server".to_string(),
        }
    }

    /// Whether the failure came from the server rather than transport.
    pub fn is_server_rejection(&self) -> bool {
        matches!(self, ApiError::Api { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_passes_through() {
        let err = ApiError::Api {
            status: 403,
            message: "Seller already approved".to_string(),
        };
        assert_eq!(err.user_message(), "Seller already approved");
    }

    #[test]
    fn empty_server_message_falls_back_to_status() {
        let err = ApiError::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.user_message(), "Request failed with status 500");
    }

    #[test]
    fn transport_failures_stay_generic() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), "Network error, please try again");
        assert!(!err.is_server_rejection());
    }

    #[test]
    fn decode_failures_stay_generic() {
        let err = ApiError::Decode("missing field `data`".to_string());
        assert_eq!(err.user_message(), "Unexpected response from the server");
    }
}

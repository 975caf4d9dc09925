use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("status {status} {status_text}")]
    Status { status: u16, status_text: String },
    #[error("decode failed: {0}")]
    Decode(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("endpoint rejected submission with status {status}")]
    Rejected {
        status: u16,
        status_text: String,
        server_message: Option<String>,
    },
    #[error("{0}")]
    Network(String),
}

impl SubmitError {
    /// The single most specific message available: the endpoint's own error
    /// text, then the HTTP status text, then the transport error.
    pub fn detail(&self) -> String {
        match self {
            SubmitError::Rejected {
                status,
                status_text,
                server_message,
            } => {
                if let Some(message) = server_message.as_deref().filter(|m| !m.is_empty()) {
                    return message.to_string();
                }
                if status_text.trim().is_empty() {
                    format!("HTTP {status}")
                } else {
                    status_text.clone()
                }
            }
            SubmitError::Network(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn server_message_wins_over_status_text() {
        let err = SubmitError::Rejected {
            status: 422,
            status_text: "Unprocessable Entity".into(),
            server_message: Some("email is invalid".into()),
        };
        assert_eq!(err.detail(), "email is invalid");
    }

    #[test]
    fn status_text_used_without_server_message() {
        let err = SubmitError::Rejected {
            status: 500,
            status_text: "Internal Server Error".into(),
            server_message: None,
        };
        assert_eq!(err.detail(), "Internal Server Error");
    }

    #[test]
    fn empty_status_text_reports_code() {
        let err = SubmitError::Rejected {
            status: 503,
            status_text: String::new(),
            server_message: Some(String::new()),
        };
        assert_eq!(err.detail(), "HTTP 503");
    }

    #[test]
    fn network_error_is_verbatim() {
        assert_eq!(
            SubmitError::Network("Failed to fetch".into()).detail(),
            "Failed to fetch"
        );
    }
}

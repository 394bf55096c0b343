use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    Network(String),
    Rejected(u16),
    Encode(String),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Network(msg) => write!(f, "Network Error: {}", msg),
            SubmitError::Rejected(status) => write!(f, "Submission rejected with status {}", status),
            SubmitError::Encode(msg) => write!(f, "Encoding Error: {}", msg),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<serde_json::Error> for SubmitError {
    fn from(error: serde_json::Error) -> Self {
        SubmitError::Encode(error.to_string())
    }
}

impl From<gloo_net::Error> for SubmitError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::SerdeError(err) => SubmitError::Encode(err.to_string()),
            other => SubmitError::Network(other.to_string()),
        }
    }
}

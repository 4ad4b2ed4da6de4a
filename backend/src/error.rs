use std::fmt;

/// Ways the remote painter can fail. Every one of them sends the spin
/// down the fallback illustrator path; none of them fail the request.
#[derive(Debug)]
pub enum PainterError {
    MissingKey,
    Http(reqwest::Error),
    Status(reqwest::StatusCode),
    BadPayload(&'static str),
}

impl fmt::Display for PainterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey => write!(f, "OPENAI_API_KEY not set"),
            Self::Http(err) => write!(f, "image request failed: {}", err),
            Self::Status(status) => write!(f, "image API returned {}", status),
            Self::BadPayload(detail) => write!(f, "unusable image response: {}", detail),
        }
    }
}

impl From<reqwest::Error> for PainterError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

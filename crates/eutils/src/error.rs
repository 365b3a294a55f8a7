use std::borrow::Cow;
use std::fmt::{self, Display};

/// The kind of error that occurred while talking to E-utilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request never produced a response (DNS, connect, timeout, or
    /// reading the body failed).
    Network,
    /// The service answered with a non-success status.
    Remote,
    /// The response body could not be decoded as JSON.
    Decode,
    /// The JSON decoded, but lacks the keys the caller reads.
    MalformedEnvelope,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Network => write!(f, "Network error"),
            ErrorKind::Remote => write!(f, "Remote error"),
            ErrorKind::Decode => write!(f, "Decode error"),
            ErrorKind::MalformedEnvelope => write!(f, "Malformed envelope"),
        }
    }
}

/// Describes a failed E-utilities call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Error {
    kind: ErrorKind,
    reason: Option<String>,
    status: Option<u16>,
    body: Option<String>,
}

impl Error {
    #[inline]
    fn with_kind(kind: ErrorKind) -> Self {
        Self {
            kind,
            reason: None,
            status: None,
            body: None,
        }
    }

    /// Creates a new error with the `Network` kind.
    #[inline]
    pub fn network() -> Self {
        Self::with_kind(ErrorKind::Network)
    }

    /// Creates a new error with the `Remote` kind, carrying the response
    /// status and body.
    #[inline]
    pub fn remote<S: Into<String>>(status: u16, body: S) -> Self {
        Self {
            status: Some(status),
            body: Some(body.into()),
            ..Self::with_kind(ErrorKind::Remote)
        }
    }

    /// Creates a new error with the `Decode` kind.
    #[inline]
    pub fn decode() -> Self {
        Self::with_kind(ErrorKind::Decode)
    }

    /// Creates a new error with the `MalformedEnvelope` kind.
    #[inline]
    pub fn malformed_envelope() -> Self {
        Self::with_kind(ErrorKind::MalformedEnvelope)
    }

    /// Attaches a reason to the error.
    #[inline]
    pub fn with_reason<S: Into<String>>(self, reason: S) -> Self {
        Self {
            reason: Some(reason.into()),
            ..self
        }
    }

    /// Returns the kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the HTTP status of a `Remote` error.
    #[inline]
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the response body of a `Remote` error.
    #[inline]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the reason for the error.
    #[inline]
    pub fn reason(&self) -> Cow<'_, str> {
        match self.reason.as_deref() {
            Some(reason) => Cow::Borrowed(reason),
            None => Cow::Owned(format!("{}", self.kind)),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.status, self.body.as_deref()) {
            (Some(status), Some(body)) => {
                write!(f, "{} (HTTP {status}): {body}", self.kind)
            }
            _ => match self.reason.as_deref() {
                Some(reason) => write!(f, "{}: {reason}", self.kind),
                None => write!(f, "{}", self.kind),
            },
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_carries_status_and_body() {
        let err = Error::remote(429, "API rate limit exceeded");
        assert_eq!(err.kind(), ErrorKind::Remote);
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.body(), Some("API rate limit exceeded"));
        assert_eq!(
            err.to_string(),
            "Remote error (HTTP 429): API rate limit exceeded"
        );
    }

    #[test]
    fn test_reason_falls_back_to_kind() {
        let err = Error::network();
        assert_eq!(err.reason(), "Network error");
        let err = err.with_reason("connection refused");
        assert_eq!(err.reason(), "connection refused");
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}

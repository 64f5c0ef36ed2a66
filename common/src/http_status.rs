//! HTTP status code helpers for classifying search API failures.

/// HTTP status code returned by the photo API.
///
/// Stored directly rather than parsed back out of error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// The access key was missing, revoked or mistyped.
    pub fn is_unauthorized(&self) -> bool {
        self.0 == 401
    }

    /// Unsplash answers 403 once the hourly request quota is spent, 429 elsewhere.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self.0, 403 | 429)
    }

    /// Short label used in log lines.
    pub fn category(&self) -> &'static str {
        if self.is_unauthorized() {
            "unauthorized"
        } else if self.is_rate_limited() {
            "rate_limited"
        } else if self.is_client_error() {
            "client_error"
        } else if self.is_server_error() {
            "server_error"
        } else {
            "unexpected"
        }
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

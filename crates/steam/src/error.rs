/// Longest response body kept on a [`SteamApiError::Status`].
const MAX_ERROR_BODY_LEN: usize = 512;

/// Errors from the Steam Web API layer.
#[derive(Debug, thiserror::Error)]
pub enum SteamApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    /// Built through [`SteamApiError::request`] so the URL, which carries
    /// the API key, never reaches the message.
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// Steam returned a non-2xx status code.
    #[error("Steam API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated, for debugging.
        body: String,
    },

    /// The response was JSON but not the shape the endpoint documents.
    #[error("Unexpected {endpoint} payload: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl SteamApiError {
    /// Wrap a transport error with its request URL stripped.
    pub fn request(err: reqwest::Error) -> Self {
        Self::Request(err.without_url())
    }

    /// Build a [`SteamApiError::Status`], truncating the body.
    pub fn status_error(status: u16, body: impl Into<String>) -> Self {
        let mut body = body.into();
        if body.len() > MAX_ERROR_BODY_LEN {
            let mut cut = MAX_ERROR_BODY_LEN;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }
        Self::Status { status, body }
    }

    /// HTTP status of the failed call, when there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request(err) => err.status().map(|s| s.as_u16()),
            Self::Decode { .. } => None,
        }
    }

    /// Steam answered 403: private profile or restricted game stats.
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    /// Steam answered 429.
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

use thiserror::Error;

/// Failure taxonomy for the one catalog retrieval (and per-poster image
/// fetches). Every variant collapses to the same user-visible banner; the
/// typed detail only reaches the logs.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("movie service unreachable: {0}")]
    Unreachable(String),
    #[error("movie service returned status {0}")]
    BadStatus(u16),
    #[error("could not decode movie listing: {0}")]
    BadBody(String),
}

impl FetchError {
    /// Stable machine-readable label, used for structured log fields.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Unreachable(_) => "unreachable",
            Self::BadStatus(_) => "bad-status",
            Self::BadBody(_) => "bad-body",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_labels_are_stable() {
        assert_eq!(FetchError::Unreachable("dns".into()).reason(), "unreachable");
        assert_eq!(FetchError::BadStatus(500).reason(), "bad-status");
        assert_eq!(FetchError::BadBody("not json".into()).reason(), "bad-body");
    }

    #[test]
    fn display_includes_detail() {
        let err = FetchError::BadStatus(503);
        assert_eq!(err.to_string(), "movie service returned status 503");
    }
}

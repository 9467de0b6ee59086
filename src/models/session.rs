use serde::{Deserialize, Serialize};

/// Tokens kept in durable browser storage between visits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: Option<String>,
    /// Persisted but never used to renew access.
    pub refresh_token: Option<String>,
}

impl Session {
    pub fn new(access_token: impl Into<String>, refresh_token: Option<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            refresh_token,
        }
    }

    /// The access token, if one is stored and non-blank.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.access_token().is_none()
    }
}

/// Outcome of checking a session against the remote service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationResult {
    /// Check in flight or not yet performed.
    #[default]
    Unknown,
    Valid,
    Invalid,
}

impl From<bool> for ValidationResult {
    fn from(valid: bool) -> Self {
        if valid {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid
        }
    }
}

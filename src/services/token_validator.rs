use std::future::Future;

use crate::error::ApiError;
use crate::models::ValidateTokenResponse;
use crate::services::ApiClient;

/// Asks whether an access token is currently accepted by the auth service.
pub trait TokenValidator {
    /// `false` whenever validity cannot be confirmed.
    fn validate(&self, token: &str) -> impl Future<Output = bool>;
}

/// Validator backed by `POST /auth/validate-token`. One attempt, no retries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HttpTokenValidator {
    api: ApiClient,
}

impl HttpTokenValidator {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

impl TokenValidator for HttpTokenValidator {
    async fn validate(&self, token: &str) -> bool {
        verdict(self.api.validate_token(token).await)
    }
}

/// Fail-closed reading of a validation call: only an explicit `isValid: true` passes.
pub fn verdict(result: Result<ValidateTokenResponse, ApiError>) -> bool {
    match result {
        Ok(response) => response.is_valid,
        Err(e) => {
            log::error!("❌ Token validation failed: {}", e);
            false
        }
    }
}

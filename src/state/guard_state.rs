// ============================================================================
// GUARD STATE - access decision for protected views
// ============================================================================
// Checking -> Authorized | Unauthorized, terminal for the lifetime of a mount.
// ============================================================================

use crate::models::ValidationResult;
use crate::services::TokenValidator;
use crate::stores::{SessionStore, StorageBackend};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GuardState {
    /// Nothing protected is shown, and no redirect happens yet.
    #[default]
    Checking,
    Authorized,
    Unauthorized,
}

impl GuardState {
    pub fn is_settled(self) -> bool {
        !matches!(self, GuardState::Checking)
    }

    /// Whether the protected view may be rendered.
    pub fn shows_protected(self) -> bool {
        matches!(self, GuardState::Authorized)
    }

    pub fn redirects_to_sign_in(self) -> bool {
        matches!(self, GuardState::Unauthorized)
    }
}

impl From<ValidationResult> for GuardState {
    fn from(result: ValidationResult) -> Self {
        match result {
            ValidationResult::Unknown => GuardState::Checking,
            ValidationResult::Valid => GuardState::Authorized,
            ValidationResult::Invalid => GuardState::Unauthorized,
        }
    }
}

/// Validates the stored session. Without an access token the validator is never called.
pub async fn check_session<B, V>(store: &SessionStore<B>, validator: &V) -> ValidationResult
where
    B: StorageBackend,
    V: TokenValidator,
{
    let session = store.get();
    let Some(token) = session.access_token() else {
        log::info!("🔒 No access token stored");
        return ValidationResult::Invalid;
    };

    ValidationResult::from(validator.validate(token).await)
}

/// The state a guard settles in after its single check.
pub async fn resolve_access<B, V>(store: &SessionStore<B>, validator: &V) -> GuardState
where
    B: StorageBackend,
    V: TokenValidator,
{
    let state = GuardState::from(check_session(store, validator).await);
    log::info!("🛡️ Route guard settled: {:?}", state);
    state
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::error::ApiError;
    use crate::models::Session;
    use crate::services::token_validator::verdict;
    use crate::stores::MemoryStorage;

    #[derive(Default)]
    struct RecordingValidator {
        answer: bool,
        calls: Cell<usize>,
        seen: RefCell<Vec<String>>,
    }

    impl RecordingValidator {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                ..Self::default()
            }
        }
    }

    impl TokenValidator for RecordingValidator {
        async fn validate(&self, token: &str) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.seen.borrow_mut().push(token.to_string());
            self.answer
        }
    }

    /// Stands in for the HTTP validator when the remote call blows up.
    struct FailingValidator;

    impl TokenValidator for FailingValidator {
        async fn validate(&self, _token: &str) -> bool {
            verdict(Err(ApiError::Network("connection reset".to_string())))
        }
    }

    fn store_with(token: Option<&str>) -> SessionStore<MemoryStorage> {
        let store = SessionStore::new(MemoryStorage::new());
        if let Some(token) = token {
            store.set(&Session::new(token, None)).unwrap();
        }
        store
    }

    #[test]
    fn initial_state_is_checking() {
        assert_eq!(GuardState::default(), GuardState::Checking);
        assert!(!GuardState::Checking.is_settled());
        assert!(GuardState::Unauthorized.is_settled());
    }

    #[tokio::test]
    async fn missing_token_is_unauthorized_without_a_network_call() {
        let validator = RecordingValidator::answering(true);
        let state = resolve_access(&store_with(None), &validator).await;

        assert_eq!(state, GuardState::Unauthorized);
        assert_eq!(validator.calls.get(), 0);
    }

    #[tokio::test]
    async fn blank_token_is_treated_as_missing() {
        let validator = RecordingValidator::answering(true);
        let state = resolve_access(&store_with(Some("")), &validator).await;

        assert_eq!(state, GuardState::Unauthorized);
        assert_eq!(validator.calls.get(), 0);
    }

    #[tokio::test]
    async fn valid_token_is_authorized_after_exactly_one_check() {
        let validator = RecordingValidator::answering(true);
        let state = resolve_access(&store_with(Some("tok-1")), &validator).await;

        assert_eq!(state, GuardState::Authorized);
        assert_eq!(validator.calls.get(), 1);
        assert_eq!(*validator.seen.borrow(), vec!["tok-1".to_string()]);
    }

    #[tokio::test]
    async fn every_guard_mount_runs_its_own_check() {
        let validator = RecordingValidator::answering(true);
        let store = store_with(Some("tok"));

        // Dashboard, then the post form: two guards, two checks
        assert_eq!(resolve_access(&store, &validator).await, GuardState::Authorized);
        assert_eq!(validator.calls.get(), 1);
        assert_eq!(resolve_access(&store, &validator).await, GuardState::Authorized);
        assert_eq!(validator.calls.get(), 2);
    }

    #[tokio::test]
    async fn rejected_token_is_unauthorized() {
        let validator = RecordingValidator::answering(false);
        let state = resolve_access(&store_with(Some("expired")), &validator).await;
        assert_eq!(state, GuardState::Unauthorized);
    }

    #[tokio::test]
    async fn validator_failure_fails_closed() {
        let state = resolve_access(&store_with(Some("tok")), &FailingValidator).await;
        assert_eq!(state, GuardState::Unauthorized);
    }

    #[test]
    fn checking_neither_renders_nor_redirects() {
        let checking = GuardState::Checking;
        assert!(!checking.shows_protected());
        assert!(!checking.redirects_to_sign_in());

        assert!(GuardState::Authorized.shows_protected());
        assert!(!GuardState::Authorized.redirects_to_sign_in());
        assert!(GuardState::Unauthorized.redirects_to_sign_in());
        assert!(!GuardState::Unauthorized.shows_protected());
    }

    #[test]
    fn unknown_maps_to_checking() {
        assert_eq!(GuardState::from(ValidationResult::Unknown), GuardState::Checking);
        assert_eq!(GuardState::from(ValidationResult::Valid), GuardState::Authorized);
        assert_eq!(GuardState::from(ValidationResult::Invalid), GuardState::Unauthorized);
    }
}

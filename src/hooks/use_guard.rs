use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::{use_services, EffectScope};
use crate::state::{resolve_access, GuardState};

/// The state to apply once a check finishes, or `None` when its mount is gone.
pub fn settle(scope: &EffectScope, outcome: GuardState) -> Option<GuardState> {
    if scope.is_active() {
        Some(outcome)
    } else {
        log::debug!("Guard unmounted before the token check finished, ignoring {:?}", outcome);
        None
    }
}

/// Checks the stored session once per mount.
///
/// Starts as `Checking`; a result that arrives after unmount is dropped.
#[hook]
pub fn use_guard_state() -> GuardState {
    let services = use_services();
    let state = use_state(GuardState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let scope = EffectScope::new();
            {
                let scope = scope.clone();
                spawn_local(async move {
                    let validator = services.validator();
                    let outcome = resolve_access(&services.session, &validator).await;
                    if let Some(settled) = settle(&scope, outcome) {
                        state.set(settled);
                    }
                });
            }
            move || scope.cancel()
        });
    }

    *state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_mount_takes_the_result() {
        let scope = EffectScope::new();
        assert_eq!(settle(&scope, GuardState::Authorized), Some(GuardState::Authorized));
        assert_eq!(settle(&scope, GuardState::Unauthorized), Some(GuardState::Unauthorized));
    }

    #[test]
    fn result_after_teardown_is_dropped() {
        let scope = EffectScope::new();
        let spawned = scope.clone();
        scope.cancel();

        assert_eq!(settle(&spawned, GuardState::Authorized), None);
        assert_eq!(settle(&spawned, GuardState::Unauthorized), None);
    }
}

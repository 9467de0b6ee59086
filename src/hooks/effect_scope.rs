use std::cell::Cell;
use std::rc::Rc;

/// Liveness flag shared between an effect and the futures it spawns.
///
/// The effect's teardown cancels the scope; a future that resolves afterwards
/// checks `is_active` and drops its result instead of touching state.
#[derive(Clone, Debug, Default)]
pub struct EffectScope {
    cancelled: Rc<Cell<bool>>,
}

impl EffectScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.cancelled.get()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelling_is_seen_by_every_clone() {
        let scope = EffectScope::new();
        let spawned = scope.clone();
        assert!(spawned.is_active());

        scope.cancel();
        assert!(!spawned.is_active());
    }
}

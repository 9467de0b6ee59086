// ============================================================================
// TOASTS - short-lived notifications
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

use crate::config::CONFIG;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ToastAction {
    Push(Toast),
    Dismiss(Uuid),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Push(toast) => toasts.push(toast),
            ToastAction::Dismiss(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(ToastList { toasts })
    }
}

/// Posts toasts to the nearest `ToastProvider`.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatcher: Option<UseReducerDispatcher<ToastList>>,
}

impl Notifier {
    pub fn new(dispatcher: UseReducerDispatcher<ToastList>) -> Self {
        Self {
            dispatcher: Some(dispatcher),
        }
    }

    pub fn notify(&self, title: &str, description: &str) {
        log::info!("🔔 {}: {}", title, description);
        let Some(dispatcher) = self.dispatcher.clone() else {
            log::warn!("⚠️ No toast provider mounted, notification only logged");
            return;
        };

        let toast = Toast {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
        };
        let id = toast.id;
        dispatcher.dispatch(ToastAction::Push(toast));

        Timeout::new(CONFIG.toast_duration_ms, move || {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
        .forget();
    }

    /// Error toast with the fixed "Problem" title.
    pub fn problem(&self, description: &str) {
        self.notify("Problem", description);
    }
}

#[hook]
pub fn use_toast() -> Notifier {
    let dispatcher = use_context::<UseReducerDispatcher<ToastList>>();
    Notifier { dispatcher }
}

pub mod effect_scope;
pub mod services_context;
pub mod use_guard;
pub mod use_toast;

pub use effect_scope::EffectScope;
pub use services_context::{use_services, AppServices, ServicesProvider};
pub use use_guard::use_guard_state;
pub use use_toast::{use_toast, Notifier, Toast, ToastAction, ToastList};

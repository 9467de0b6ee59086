// Pure UI state: no DOM, no network

pub mod dashboard_state;
pub mod forms;
pub mod guard_state;

pub use dashboard_state::{DashboardFilters, FilterAction};
pub use forms::{
    PostField, PostForm, SignInFailure, SignInField, SignInForm, SignInNext, SignInOutcome, SignUpField,
    SignUpForm,
};
pub use guard_state::{check_session, resolve_access, GuardState};

pub mod auth;
pub mod dashboard_view;
pub mod post_card;
pub mod post_form_view;

pub use auth::{RoleSelectView, SignInView, SignUpView};
pub use dashboard_view::DashboardView;
pub use post_card::PostCard;
pub use post_form_view::PostFormView;

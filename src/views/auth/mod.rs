mod role_select_view;
mod sign_in_view;
mod sign_up_view;

pub use role_select_view::*;
pub use sign_in_view::*;
pub use sign_up_view::*;

pub mod app;
pub mod image_picker;
pub mod password_field;
pub mod phone_field;
pub mod route_guard;
pub mod toast;

pub use app::App;
pub use image_picker::ImagePicker;
pub use password_field::PasswordField;
pub use phone_field::PhoneField;
pub use route_guard::RouteGuard;
pub use toast::ToastProvider;

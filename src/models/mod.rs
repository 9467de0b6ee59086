pub mod auth;
pub mod phone;
pub mod post;
pub mod session;

pub use auth::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, ValidateTokenRequest,
    ValidateTokenResponse,
};
pub use phone::PhoneCountry;
pub use post::{CreatePostResponse, NewPost, Post, PostQuery, PostType, PostTypeResponse, PostsPage};
pub use session::{Session, ValidationResult};

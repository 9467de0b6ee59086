pub mod api_client;
pub mod token_validator;

pub use api_client::ApiClient;
pub use token_validator::{HttpTokenValidator, TokenValidator};

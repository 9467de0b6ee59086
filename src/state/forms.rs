// ============================================================================
// FORMS - field state, validation and request building
// ============================================================================
// Views keep one of these in a use_state and only turn it into a request
// when every check passes.
// ============================================================================

use crate::error::{ApiError, ValidationError};
use crate::models::{LoginRequest, LoginResponse, NewPost, PhoneCountry, PostType, RegisterRequest, Session};
use crate::utils::constants::{
    POST_PHONE_MAX_DIGITS, POST_PHONE_MIN_DIGITS, SIGN_UP_PHONE_DIGITS, UNKNOWN_ACCOUNT_REDIRECT_MS,
};
use crate::utils::format_retry_after;
use crate::utils::validation::{
    require_keywords, validate_email, validate_password, validate_phone_exact, validate_phone_range,
};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInField {
    Email,
    Password,
}

impl SignInForm {
    pub fn set(&mut self, field: SignInField, value: String) {
        match field {
            SignInField::Email => self.email = value,
            SignInField::Password => self.password = value,
        }
    }

    pub fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

/// How a failed sign-in is reported to the user.
#[derive(Clone, Debug, PartialEq)]
pub enum SignInFailure {
    RateLimited { wait: String },
    /// Followed by a delayed move to sign-up.
    UnknownAccount,
    Other,
}

impl SignInFailure {
    pub fn from_error(error: &ApiError) -> Self {
        match error {
            ApiError::RateLimited { retry_after_ms } => SignInFailure::RateLimited {
                wait: format_retry_after(*retry_after_ms),
            },
            ApiError::NotFound { .. } => SignInFailure::UnknownAccount,
            _ => SignInFailure::Other,
        }
    }

    pub fn message(&self) -> String {
        match self {
            SignInFailure::RateLimited { wait } => {
                format!("Too many login attempts. Please try again after {}.", wait)
            }
            SignInFailure::UnknownAccount => "User does not exist. Redirecting to Sign Up...".to_string(),
            SignInFailure::Other => "An error occurred during sign-in.".to_string(),
        }
    }

    pub fn redirects_to_sign_up(&self) -> bool {
        matches!(self, SignInFailure::UnknownAccount)
    }
}

/// Where the sign-in screen goes after an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInNext {
    Dashboard,
    SignUpAfter { delay_ms: u32 },
    Stay,
}

/// Everything the sign-in screen does with a login answer.
#[derive(Clone, Debug, PartialEq)]
pub struct SignInOutcome {
    /// Stored before navigating. `None` leaves storage untouched.
    pub session: Option<Session>,
    pub title: &'static str,
    pub message: String,
    pub next: SignInNext,
}

impl SignInOutcome {
    pub fn from_result(result: Result<LoginResponse, ApiError>) -> Self {
        match result {
            Ok(tokens) => Self {
                session: Some(Session::new(tokens.access_token, tokens.refresh_token)),
                title: "Sign In Successful",
                message: "Welcome back!".to_string(),
                next: SignInNext::Dashboard,
            },
            Err(e) => {
                let failure = SignInFailure::from_error(&e);
                let next = if failure.redirects_to_sign_up() {
                    SignInNext::SignUpAfter {
                        delay_ms: UNKNOWN_ACCOUNT_REDIRECT_MS,
                    }
                } else {
                    SignInNext::Stay
                };
                Self {
                    session: None,
                    title: "Problem",
                    message: failure.message(),
                    next,
                }
            }
        }
    }

    /// The tokens arrived but could not be written.
    pub fn storage_failed() -> Self {
        Self {
            session: None,
            title: "Problem",
            message: SignInFailure::Other.message(),
            next: SignInNext::Stay,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignUpForm {
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub phone_country: PhoneCountry,
    pub password: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignUpField {
    CompanyName,
    Email,
    Phone,
    Password,
}

impl SignUpForm {
    pub fn set(&mut self, field: SignUpField, value: String) {
        match field {
            SignUpField::CompanyName => self.company_name = value,
            SignUpField::Email => self.email = value,
            SignUpField::Phone => self.phone = value,
            SignUpField::Password => self.password = value,
        }
    }

    /// Checks phone, then email, then password.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_phone_exact(&self.phone, SIGN_UP_PHONE_DIGITS)?;
        validate_email(self.email.trim())?;
        validate_password(&self.password)
    }

    pub fn to_request(&self, role: PostType, logo: Option<&str>) -> Result<RegisterRequest, ValidationError> {
        self.validate()?;
        Ok(RegisterRequest {
            company_name: self.company_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone_country.international(&self.phone),
            phone_country: self.phone_country,
            password: self.password.clone(),
            logo: logo.unwrap_or_default().to_string(),
            user_type: role,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostForm {
    pub company_name: String,
    pub email: String,
    pub description: String,
    /// Comma separated, as typed.
    pub keywords: String,
    pub phone: String,
    pub phone_country: PhoneCountry,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostField {
    CompanyName,
    Email,
    Description,
    Keywords,
    Phone,
}

impl PostForm {
    pub fn set(&mut self, field: PostField, value: String) {
        match field {
            PostField::CompanyName => self.company_name = value,
            PostField::Email => self.email = value,
            PostField::Description => self.description = value,
            PostField::Keywords => self.keywords = value,
            PostField::Phone => self.phone = value,
        }
    }

    /// Checks phone, email and keywords in that order, then tags the post with the author's role.
    pub fn to_new_post(&self, post_type: Option<PostType>, image: Option<&str>) -> Result<NewPost, ValidationError> {
        validate_phone_range(&self.phone, POST_PHONE_MIN_DIGITS, POST_PHONE_MAX_DIGITS)?;
        validate_email(self.email.trim())?;
        let keywords = require_keywords(&self.keywords)?;
        let post_type = post_type.ok_or(ValidationError::PostTypeUnknown)?;

        Ok(NewPost {
            company_name: self.company_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone_country.international(&self.phone),
            phone_country: self.phone_country,
            keywords,
            description: self.description.trim().to_string(),
            image: image.unwrap_or_default().to_string(),
            post_type,
        })
    }
}

/// localStorage key holding the access token
pub const STORAGE_KEY_ACCESS_TOKEN: &str = "token";
/// localStorage key holding the refresh token
pub const STORAGE_KEY_REFRESH_TOKEN: &str = "refresh";

/// Posts requested per dashboard page
pub const POSTS_PAGE_SIZE: u32 = 7;

/// Delay before an unknown account is sent to sign-up
pub const UNKNOWN_ACCOUNT_REDIRECT_MS: u32 = 2_000;

/// Upper bound accepted for a server-provided retry delay (one year)
pub const MAX_RETRY_AFTER_MS: f64 = 31_536_000_000.0;

pub const DEFAULT_TOAST_DURATION_MS: u32 = 4_000;

pub const SIGN_UP_PHONE_DIGITS: usize = 9;
pub const POST_PHONE_MIN_DIGITS: usize = 9;
pub const POST_PHONE_MAX_DIGITS: usize = 15;

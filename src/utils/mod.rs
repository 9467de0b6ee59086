// Shared helpers

pub mod constants;
pub mod file_reader;
pub mod retry_format;
pub mod storage;
pub mod validation;

pub use constants::*;
pub use retry_format::format_retry_after;

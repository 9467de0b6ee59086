use web_sys::{window, Storage};

use crate::error::StorageError;

/// `None` when there is no window or the browser denies access to localStorage.
pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn read_item(key: &str) -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(key).ok()?
}

pub fn write_item(key: &str, value: &str) -> Result<(), StorageError> {
    let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .set_item(key, value)
        .map_err(|_| StorageError::WriteFailed(key.to_string()))
}

pub fn remove_item(key: &str) -> Result<(), StorageError> {
    let storage = get_local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .remove_item(key)
        .map_err(|_| StorageError::WriteFailed(key.to_string()))
}

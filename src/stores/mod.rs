pub mod session_store;

pub use session_store::{LocalStorageBackend, MemoryStorage, SessionStore, StorageBackend};

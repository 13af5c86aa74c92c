pub mod files;
pub mod store;

pub use files::{atomic_write, init_local_dir, resolve_data_dir};
pub use store::{PersistedState, StorageKey, Store};

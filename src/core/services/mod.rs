pub mod logging;
pub mod storage;
pub mod sync;

pub use storage::{BrowserStore, KeyValueStore, MemoryStore, StoreHandle};

#![forbid(unsafe_code)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
mod paths;
pub mod service;
pub mod storage;
pub mod telemetry;

pub use error::{Effect, Error, Transience};
pub type Result<T> = std::result::Result<T, Error>;

// Re-export core types at crate root for convenience
pub use crate::core::{
    Classification, CounterKey, CounterStore, CoreError, Ledger, Letter, LetterId, LetterStatus,
    RegisterState, SeqNo, Timestamp, display_number,
};
pub use crate::service::Register;
pub use crate::storage::{JsonFileStore, MemoryStore, StateStore, StorageError};

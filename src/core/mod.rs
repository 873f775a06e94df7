//! Core domain types for the letter register (Layers 0-7)
//!
//! Module hierarchy follows type dependency order:
//! - time: Timestamp, date formats (Layer 0)
//! - identity: LetterId (Layer 1)
//! - domain: Classification, LetterStatus (Layer 2)
//! - format: display-number formatter (Layer 3)
//! - counter: SeqNo, CounterKey, CounterStore (Layer 4)
//! - letter: Letter (Layer 5)
//! - ledger: Ledger (Layer 6)
//! - state: RegisterState (Layer 7)

pub mod counter;
pub mod domain;
pub mod error;
pub mod format;
pub mod identity;
pub mod ledger;
pub mod letter;
pub mod state;
pub mod time;

pub use counter::{CounterKey, CounterStore, SeqNo};
pub use domain::{Classification, LetterStatus};
pub use error::{CoreError, InvalidId, InvalidSnapshot, ValidationError};
pub use format::display_number;
pub use identity::LetterId;
pub use ledger::Ledger;
pub use letter::Letter;
pub use state::RegisterState;
pub use self::time::{Timestamp, today};

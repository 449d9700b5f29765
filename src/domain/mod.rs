//! Pure domain models (Profile, Transaction, Goal).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod goal;
pub mod profile;
pub mod transaction;

pub use goal::*;
pub use profile::*;
pub use transaction::*;

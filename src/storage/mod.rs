pub mod json_backend;

use crate::{domain::Profile, errors::PocketError};

pub type Result<T> = std::result::Result<T, PocketError>;

/// Abstraction over persistence backends holding the full profile
/// collection in a single slot.
///
/// `load` never fails: missing, unreadable, or corrupt data yields an
/// empty collection. `save` overwrites the slot unconditionally; a save
/// followed by a load returns a value deep-equal to what was saved.
pub trait StorageBackend: Send + Sync {
    fn load(&self) -> Vec<Profile>;
    fn save(&self, profiles: &[Profile]) -> Result<()>;
}

pub use json_backend::JsonStorage;

//! Persisted key-value storage for the cookbook client.
//!
//! A [`KeyValueStore`] holds string values under string keys, each write an
//! atomic single-key replace. It backs the persisted session record and the
//! saved recipe lists ([`SavedRecipes`]).

mod error;
mod file_store;
mod key_value_store;
mod memory_store;
mod saved_recipes;


pub use error::{Result as StoreResult, StoreError};
pub use file_store::FileStore;
pub use key_value_store::{KeyValueStore, validate_key};
pub use memory_store::MemoryStore;
pub use saved_recipes::{SavedListKind, SavedRecipes};

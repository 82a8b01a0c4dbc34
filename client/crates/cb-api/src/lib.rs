//! cb-api library
//!
//! Authenticated REST client for the recipe, comment and assistant endpoints.

pub(crate) mod client;
pub(crate) mod error;

#[cfg(test)]
mod tests;

pub use client::{Client, SavedLookup};
pub use error::{ClientError, Result as ClientResult};

//! Domain models
//!
//! `Alias` is what the store persists and lists; `SaveAlias` is the
//! strictly-decoded request body it is saved from.

pub mod alias;

pub use alias::{Alias, SaveAlias};

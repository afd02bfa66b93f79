//! Kanji cards
//!
//! This module provides:
//! - The card model (kanji, meaning, reading, example phrase)
//! - CSV import with hex codepoint and romaji decoding
//! - A read-only, key-indexed card store

pub mod import;
pub mod models;
pub mod store;

pub use import::{load_cards, CardImportError};
pub use models::*;
pub use store::CardStore;

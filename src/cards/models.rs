//! Data models for kanji cards

use serde::{Deserialize, Serialize};

/// Example phrase attached to a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    /// Phrase as written (kanji and kana)
    pub text: String,
    /// Phrase reading in kana
    pub reading: String,
    pub meaning: String,
}

/// A kanji card. Cards never change after they are loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Stable key (current edition frame number)
    pub key: String,
    pub kanji: String,
    pub meaning: String,
    pub strokes: u32,
    /// On-reading in katakana
    pub reading: String,
    /// Frame number in the older edition
    pub legacy_rank: String,
    pub phrase: Phrase,
}

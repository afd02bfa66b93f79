//! Romaji to kana transliteration
//!
//! Tables are plain immutable values; callers build a [`KanaTables`] once
//! and pass the table they need into [`transliterate`].

pub mod convert;
pub mod table;

pub use convert::{to_kana, transliterate, Transliteration, TransliterationError};
pub use table::{KanaTables, Script, Syllable, SyllableTable};

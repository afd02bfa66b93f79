//! Card source import
//!
//! The card source is a CSV file with a header row and nine columns:
//!
//! ```text
//! rank, kanji (hex), meaning, strokes, on-reading (romaji), legacy rank,
//! phrase (hex list), phrase reading (romaji or hex list), phrase meaning
//! ```
//!
//! Hex lists are comma separated code points inside one quoted field.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::models::{Card, Phrase};
use super::store::CardStore;
use crate::romaji::{to_kana, KanaTables, TransliterationError};

#[derive(Error, Debug)]
pub enum CardImportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: expected {expected} columns, found {found}")]
    ColumnCount { row: u64, expected: usize, found: usize },

    #[error("Row {row}: invalid codepoint '{value}'")]
    InvalidCodepoint { row: u64, value: String },

    #[error("Row {row}: invalid stroke count '{value}'")]
    InvalidStrokes { row: u64, value: String },

    #[error("Row {row}: cannot transliterate {field}: {source}")]
    Transliteration {
        row: u64,
        field: &'static str,
        source: TransliterationError,
    },
}

type Result<T> = std::result::Result<T, CardImportError>;

const COLUMNS: usize = 9;

/// Decode a single hex code point ("6F22" -> '漢')
pub fn decode_codepoint(hex: &str) -> Option<char> {
    u32::from_str_radix(hex.trim(), 16).ok().and_then(char::from_u32)
}

/// Decode a comma separated list of hex code points into one string
pub fn decode_codepoints(list: &str) -> Option<String> {
    list.split(',').map(decode_codepoint).collect()
}

/// Whether a field is a hex code point list rather than romaji.
///
/// Romaji words made only of the letters a-f parse as hex too, but always
/// land above U+A000, outside the ranges a kana or kanji can live in.
fn is_codepoint_list(field: &str) -> bool {
    field.split(',').all(|part| {
        let part = part.trim();
        (4..=5).contains(&part.len())
            && part.chars().all(|c| c.is_ascii_hexdigit())
            && decode_codepoint(part).map_or(false, is_japanese)
    })
}

fn is_japanese(c: char) -> bool {
    matches!(c as u32, 0x3000..=0x9FFF | 0xFF00..=0xFFEF | 0x20000..=0x2FFFF)
}

/// Read cards from the CSV file at `path`
pub fn load_cards(path: &Path, tables: &KanaTables) -> Result<CardStore> {
    let file = File::open(path)?;
    let store = parse_cards(file, tables)?;
    log::info!("Loaded {} cards from {:?}", store.len(), path);
    Ok(store)
}

/// Read cards from any CSV source
pub fn parse_cards<R: Read>(reader: R, tables: &KanaTables) -> Result<CardStore> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut cards = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row = record.position().map_or(0, |p| p.line());
        if record.len() != COLUMNS {
            return Err(CardImportError::ColumnCount {
                row,
                expected: COLUMNS,
                found: record.len(),
            });
        }
        cards.push(parse_row(&record, row, tables)?);
    }

    Ok(CardStore::new(cards))
}

fn parse_row(record: &csv::StringRecord, row: u64, tables: &KanaTables) -> Result<Card> {
    let field = |idx: usize| record.get(idx).unwrap_or("");

    let codepoints = |value: &str| {
        decode_codepoints(value).ok_or_else(|| CardImportError::InvalidCodepoint {
            row,
            value: value.to_string(),
        })
    };

    let kanji = codepoints(field(1))?;
    let strokes = field(3)
        .parse::<u32>()
        .map_err(|_| CardImportError::InvalidStrokes { row, value: field(3).to_string() })?;
    let reading = to_kana(field(4), &tables.katakana).map_err(|source| {
        CardImportError::Transliteration { row, field: "on-reading", source }
    })?;
    let phrase_text = codepoints(field(6))?;

    let phrase_reading = if is_codepoint_list(field(7)) {
        codepoints(field(7))?
    } else {
        to_kana(field(7), &tables.hiragana).map_err(|source| {
            CardImportError::Transliteration { row, field: "phrase reading", source }
        })?
    };

    Ok(Card {
        key: field(0).to_string(),
        kanji,
        meaning: field(2).to_string(),
        strokes,
        reading,
        legacy_rank: field(5).to_string(),
        phrase: Phrase {
            text: phrase_text,
            reading: phrase_reading,
            meaning: field(8).to_string(),
        },
    })
}

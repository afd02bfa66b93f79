//! Romaji → kana scanner
//!
//! Characters are accumulated into a buffer until the buffer names a table
//! key. The bare nasal `n` is held back until the next character shows
//! whether it starts a syllable (`na`, `nya`) or stands alone (`kan`, `kin'en`).

use serde::Serialize;
use thiserror::Error;

use super::table::{SyllableTable, NASAL, NASAL_MARKER, SOKUON};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransliterationError {
    #[error("'{buffer}' at position {position} is not a romaji syllable")]
    Unresolved { buffer: String, position: usize },

    #[error("input ends with incomplete syllable '{buffer}'")]
    Leftover { buffer: String },
}

pub type Result<T> = std::result::Result<T, TransliterationError>;

/// Output of a conversion: the kana string and its raw code points
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transliteration {
    pub text: String,
    pub codes: Vec<u32>,
}

impl Transliteration {
    fn push(&mut self, c: char) {
        self.text.push(c);
        self.codes.push(c as u32);
    }

    fn emit(&mut self, key: &str, table: &SyllableTable, position: usize) -> Result<()> {
        let kana = table
            .resolve(key)
            .ok_or_else(|| TransliterationError::Unresolved {
                buffer: key.to_string(),
                position,
            })?;
        for c in kana.chars() {
            self.push(c);
        }
        Ok(())
    }
}

/// Characters after a held `n` that keep it inside a syllable
fn continues_nasal(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o' | 'y')
}

/// `kk`, `tt`, `pp`... but never `nn`, plus Hepburn `tch`
fn is_sokuon(buffer: &str) -> bool {
    let mut chars = buffer.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('t'), Some('c'), None) => true,
        (Some(a), Some(b), None) => {
            a == b && a.is_ascii_lowercase() && !continues_nasal(a) && a != 'n'
        }
        _ => false,
    }
}

/// Convert romaji to kana using `table`, keeping the code list
pub fn transliterate(input: &str, table: &SyllableTable) -> Result<Transliteration> {
    let mut out = Transliteration::default();
    let mut buffer = String::new();
    let mut start = 0;

    for (position, c) in input.chars().map(|c| c.to_ascii_lowercase()).enumerate() {
        if buffer == NASAL && !continues_nasal(c) {
            out.emit(NASAL, table, start)?;
            buffer.clear();
            if c == NASAL_MARKER {
                continue;
            }
        }

        if c == ' ' {
            if !buffer.is_empty() {
                return Err(TransliterationError::Unresolved { buffer, position: start });
            }
            out.push(' ');
            continue;
        }

        if buffer.is_empty() {
            start = position;
        }
        buffer.push(c);

        if buffer == NASAL {
            continue;
        }

        if table.get(&buffer).is_some() {
            out.emit(&buffer, table, start)?;
            buffer.clear();
        } else if is_sokuon(&buffer) {
            out.emit(SOKUON, table, start)?;
            buffer.remove(0);
            start = position;
        } else if !table.is_prefix(&buffer) {
            return Err(TransliterationError::Unresolved { buffer, position: start });
        }
    }

    if buffer == NASAL {
        out.emit(NASAL, table, start)?;
    } else if !buffer.is_empty() {
        return Err(TransliterationError::Leftover { buffer });
    }

    Ok(out)
}

/// Convert romaji to a kana string
pub fn to_kana(input: &str, table: &SyllableTable) -> Result<String> {
    transliterate(input, table).map(|t| t.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::romaji::KanaTables;

    fn hira(input: &str) -> Result<String> {
        to_kana(input, &SyllableTable::hiragana())
    }

    fn kata(input: &str) -> Result<String> {
        to_kana(input, &SyllableTable::katakana())
    }

    #[test]
    fn test_curated_round_trips() {
        let pairs = [
            ("ひと", "hito"),
            ("やま", "yama"),
            ("かんじ", "kanji"),
            ("こんにちは", "konnichiha"),
            ("にほん", "nihon"),
            ("きょう", "kyou"),
            ("しゃしん", "shashin"),
            ("おちゃ", "ocha"),
            ("がっこう", "gakkou"),
            ("きっぷ", "kippu"),
            ("きんえん", "kin'en"),
            ("ほんや", "hon'ya"),
            ("つき", "tsuki"),
            ("じゅう", "juu"),
            ("まっちゃ", "matcha"),
            ("いっち", "itchi"),
        ];
        for (kana, romaji) in pairs {
            assert_eq!(hira(romaji).unwrap(), kana, "romaji {}", romaji);
        }
        assert_eq!(kata("kan").unwrap(), "カン");
        assert_eq!(kata("ko-hi-").unwrap(), "コーヒー");
        assert_eq!(kata("shou").unwrap(), "ショウ");
    }

    #[test]
    fn test_deterministic() {
        let table = SyllableTable::hiragana();
        let first = transliterate("tomodachi", &table).unwrap();
        for _ in 0..10 {
            assert_eq!(transliterate("tomodachi", &table).unwrap(), first);
        }
    }

    #[test]
    fn test_final_nasal() {
        assert_eq!(hira("n").unwrap(), "ん");
        assert_eq!(hira("san").unwrap(), "さん");
        assert_eq!(kata("n").unwrap(), "ン");
    }

    #[test]
    fn test_nasal_followed_by_vowel_class_is_not_split() {
        assert_eq!(hira("nya").unwrap(), "にゃ");
        assert_eq!(hira("konnyaku").unwrap(), "こんにゃく");
        assert_eq!(hira("kana").unwrap(), "かな");
        assert_ne!(hira("nyu").unwrap(), "んゆ");
    }

    #[test]
    fn test_nasal_marker_is_swallowed() {
        assert_eq!(hira("n'a").unwrap(), "んあ");
        assert_eq!(hira("shin'you").unwrap(), "しんよう");
    }

    #[test]
    fn test_leftover_buffer_fails() {
        assert_eq!(
            hira("kak"),
            Err(TransliterationError::Leftover { buffer: "k".to_string() })
        );
        assert_eq!(
            hira("ts"),
            Err(TransliterationError::Leftover { buffer: "ts".to_string() })
        );
    }

    #[test]
    fn test_unresolvable_buffer_fails_early() {
        let err = hira("kaqa").unwrap_err();
        assert_eq!(
            err,
            TransliterationError::Unresolved { buffer: "q".to_string(), position: 2 }
        );
        assert!(hira("hello").is_err());
        assert!(hira("かな").is_err());
    }

    #[test]
    fn test_codes_match_text() {
        let result = transliterate("kya", &SyllableTable::hiragana()).unwrap();
        assert_eq!(result.text, "きゃ");
        assert_eq!(result.codes, vec![0x304D, 0x3083]);
    }

    #[test]
    fn test_uppercase_and_spaces() {
        assert_eq!(hira("Hi To").unwrap(), "ひ と");
        assert_eq!(hira("hon desu").unwrap(), "ほん です");
        assert!(hira("k a").is_err());
    }

    #[test]
    fn test_tables_share_algorithm() {
        let tables = KanaTables::new();
        let h = transliterate("kanji", &tables.hiragana).unwrap();
        let k = transliterate("kanji", &tables.katakana).unwrap();
        let shifted: Vec<u32> = h.codes.iter().map(|c| c + 0x60).collect();
        assert_eq!(k.codes, shifted);
    }
}

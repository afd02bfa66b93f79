//! The three drill variants
//!
//! Each variant shows one side of a card, collects an answer through the
//! [`Prompter`] and returns whether it was right. They never touch records;
//! the scheduler does that.

use super::models::DrillType;
use super::prompt::Prompter;
use super::storage::Result;
use crate::cards::Card;
use crate::romaji::{to_kana, KanaTables, Script};

/// Shown in place of the typed reading when it is not valid romaji
pub const INVALID_MARKER: &str = "<invalid>";

pub trait Drill {
    fn drill_type(&self) -> DrillType;

    /// Review one card and report whether it was answered correctly
    fn check(&self, card: &Card, prompter: &mut dyn Prompter) -> Result<bool>;
}

/// Meaning shown, kanji recalled and self-graded
pub struct MeaningToKanji;

impl Drill for MeaningToKanji {
    fn drill_type(&self) -> DrillType {
        DrillType::MeaningToKanji
    }

    fn check(&self, card: &Card, prompter: &mut dyn Prompter) -> Result<bool> {
        prompter.render_line(&format!("Meaning: {}", card.meaning))?;
        prompter.pause("Write the kanji, then press any key")?;
        prompter.render_line(&format!("Kanji: {}  ({} strokes)", card.kanji, card.strokes))?;
        Ok(prompter.confirm("Correct? [y/n]")?)
    }
}

/// Kanji shown, meaning typed. The comparison is exact and case-sensitive.
pub struct KanjiToMeaning;

impl Drill for KanjiToMeaning {
    fn drill_type(&self) -> DrillType {
        DrillType::KanjiToMeaning
    }

    fn check(&self, card: &Card, prompter: &mut dyn Prompter) -> Result<bool> {
        prompter.render_line(&format!("Kanji: {}", card.kanji))?;
        let answer = prompter.ask_text("Meaning: ")?;
        let passed = answer == card.meaning;
        if passed {
            prompter.render_line("Correct")?;
        } else {
            prompter.render_line(&format!("Wrong, it is: {}", card.meaning))?;
        }
        Ok(passed)
    }
}

/// Kanji and example phrase shown, reading typed in romaji
pub struct KanjiToReading<'a> {
    tables: &'a KanaTables,
}

impl<'a> KanjiToReading<'a> {
    pub fn new(tables: &'a KanaTables) -> Self {
        Self { tables }
    }
}

impl Drill for KanjiToReading<'_> {
    fn drill_type(&self) -> DrillType {
        DrillType::KanjiToReading
    }

    fn check(&self, card: &Card, prompter: &mut dyn Prompter) -> Result<bool> {
        prompter.render_line(&format!("Kanji: {}   Phrase: {}", card.kanji, card.phrase.text))?;
        let typed = prompter.ask_text("Reading (romaji): ")?;

        let table = self.tables.for_script(Script::of(&card.reading));
        let (shown, passed) = match to_kana(&typed, table) {
            Ok(kana) => {
                let passed = kana == card.reading;
                (kana, passed)
            }
            Err(e) => {
                log::debug!("Typed reading {:?} is not romaji: {}", typed, e);
                (INVALID_MARKER.to_string(), false)
            }
        };

        let verdict = if passed { "Correct" } else { "Wrong" };
        prompter.render_line(&format!("{}: {} (expected {})", verdict, shown, card.reading))?;
        prompter.render_line(&format!(
            "{} {} - {}",
            card.phrase.text, card.phrase.reading, card.phrase.meaning
        ))?;
        Ok(passed)
    }
}

/// Pick the drill variant for a drill type
pub fn drill_for(drill_type: DrillType, tables: &KanaTables) -> Box<dyn Drill + '_> {
    match drill_type {
        DrillType::MeaningToKanji => Box::new(MeaningToKanji),
        DrillType::KanjiToMeaning => Box::new(KanjiToMeaning),
        DrillType::KanjiToReading => Box::new(KanjiToReading::new(tables)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Phrase;
    use crate::flashcards::prompt::testing::{Answer, ScriptedPrompter};

    fn fire() -> Card {
        Card {
            key: "2".to_string(),
            kanji: "火".to_string(),
            meaning: "fire".to_string(),
            strokes: 4,
            reading: "カ".to_string(),
            legacy_rank: "3".to_string(),
            phrase: Phrase {
                text: "火山".to_string(),
                reading: "かざん".to_string(),
                meaning: "volcano".to_string(),
            },
        }
    }

    fn text(s: &str) -> Answer {
        Answer::Text(s.to_string())
    }

    #[test]
    fn test_meaning_to_kanji_is_self_graded() {
        let mut prompter = ScriptedPrompter::new([Answer::Yes, Answer::No]);
        assert!(MeaningToKanji.check(&fire(), &mut prompter).unwrap());
        assert!(!MeaningToKanji.check(&fire(), &mut prompter).unwrap());
        assert!(prompter.lines.iter().any(|l| l.contains("火") && l.contains("4 strokes")));
    }

    #[test]
    fn test_kanji_to_meaning_is_case_sensitive() {
        let mut prompter = ScriptedPrompter::new([text("fire"), text("Fire"), text("fire ")]);
        assert!(KanjiToMeaning.check(&fire(), &mut prompter).unwrap());
        assert!(!KanjiToMeaning.check(&fire(), &mut prompter).unwrap());
        assert!(!KanjiToMeaning.check(&fire(), &mut prompter).unwrap());
    }

    #[test]
    fn test_kanji_to_reading_uses_katakana_table() {
        let tables = KanaTables::new();
        let drill = KanjiToReading::new(&tables);
        let mut prompter = ScriptedPrompter::new([text("ka"), text("ki")]);
        assert!(drill.check(&fire(), &mut prompter).unwrap());
        assert!(!drill.check(&fire(), &mut prompter).unwrap());
    }

    #[test]
    fn test_invalid_romaji_is_a_mismatch() {
        let tables = KanaTables::new();
        let drill = KanjiToReading::new(&tables);
        let mut prompter = ScriptedPrompter::new([text("kq")]);
        assert!(!drill.check(&fire(), &mut prompter).unwrap());
        assert!(prompter.lines.iter().any(|l| l.contains(INVALID_MARKER)));
    }

    #[test]
    fn test_drill_for_matches_type() {
        let tables = KanaTables::new();
        for drill_type in DrillType::ALL {
            assert_eq!(drill_for(drill_type, &tables).drill_type(), drill_type);
        }
    }
}

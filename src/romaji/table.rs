//! Romaji syllable tables for hiragana and katakana
//!
//! Both tables are built from one hiragana listing. Katakana sits exactly
//! 0x60 code points above hiragana for the whole syllabary, so the katakana
//! table is the hiragana table shifted, plus the long vowel mark.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// The held nasal token
pub const NASAL: &str = "n";

/// Marker that ends a held nasal explicitly (`kin'en`)
pub const NASAL_MARKER: char = '\'';

/// Key of the small tsu emitted for doubled consonants
pub const SOKUON: &str = "xtsu";

const KATAKANA_OFFSET: u32 = 0x60;

/// Target writing system of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Hiragana,
    Katakana,
}

impl Script {
    /// Guess the script of a kana string. Anything containing katakana is
    /// treated as katakana.
    pub fn of(text: &str) -> Script {
        if text.chars().any(is_katakana) {
            Script::Katakana
        } else {
            Script::Hiragana
        }
    }
}

pub fn is_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30A1}'..='\u{30FA}').contains(&c) || c == '\u{30FC}'
}

/// A table entry: a single kana, or two sub-syllables resolved in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syllable {
    Kana(char),
    Digraph(&'static str, &'static str),
}

use Syllable::{Digraph, Kana};

const HIRAGANA: &[(&str, Syllable)] = &[
    ("a", Kana('あ')),
    ("i", Kana('い')),
    ("u", Kana('う')),
    ("e", Kana('え')),
    ("o", Kana('お')),
    ("ka", Kana('か')),
    ("ki", Kana('き')),
    ("ku", Kana('く')),
    ("ke", Kana('け')),
    ("ko", Kana('こ')),
    ("ga", Kana('が')),
    ("gi", Kana('ぎ')),
    ("gu", Kana('ぐ')),
    ("ge", Kana('げ')),
    ("go", Kana('ご')),
    ("sa", Kana('さ')),
    ("shi", Kana('し')),
    ("si", Kana('し')),
    ("su", Kana('す')),
    ("se", Kana('せ')),
    ("so", Kana('そ')),
    ("za", Kana('ざ')),
    ("ji", Kana('じ')),
    ("zi", Kana('じ')),
    ("zu", Kana('ず')),
    ("ze", Kana('ぜ')),
    ("zo", Kana('ぞ')),
    ("ta", Kana('た')),
    ("chi", Kana('ち')),
    ("ti", Kana('ち')),
    ("tsu", Kana('つ')),
    ("tu", Kana('つ')),
    ("te", Kana('て')),
    ("to", Kana('と')),
    ("da", Kana('だ')),
    ("di", Kana('ぢ')),
    ("du", Kana('づ')),
    ("de", Kana('で')),
    ("do", Kana('ど')),
    ("na", Kana('な')),
    ("ni", Kana('に')),
    ("nu", Kana('ぬ')),
    ("ne", Kana('ね')),
    ("no", Kana('の')),
    ("n", Kana('ん')),
    ("ha", Kana('は')),
    ("hi", Kana('ひ')),
    ("fu", Kana('ふ')),
    ("hu", Kana('ふ')),
    ("he", Kana('へ')),
    ("ho", Kana('ほ')),
    ("ba", Kana('ば')),
    ("bi", Kana('び')),
    ("bu", Kana('ぶ')),
    ("be", Kana('べ')),
    ("bo", Kana('ぼ')),
    ("pa", Kana('ぱ')),
    ("pi", Kana('ぴ')),
    ("pu", Kana('ぷ')),
    ("pe", Kana('ぺ')),
    ("po", Kana('ぽ')),
    ("ma", Kana('ま')),
    ("mi", Kana('み')),
    ("mu", Kana('む')),
    ("me", Kana('め')),
    ("mo", Kana('も')),
    ("ya", Kana('や')),
    ("yu", Kana('ゆ')),
    ("yo", Kana('よ')),
    ("ra", Kana('ら')),
    ("ri", Kana('り')),
    ("ru", Kana('る')),
    ("re", Kana('れ')),
    ("ro", Kana('ろ')),
    ("wa", Kana('わ')),
    ("wo", Kana('を')),
    ("vu", Kana('ゔ')),
    // Small forms
    ("xa", Kana('ぁ')),
    ("xi", Kana('ぃ')),
    ("xu", Kana('ぅ')),
    ("xe", Kana('ぇ')),
    ("xo", Kana('ぉ')),
    ("xya", Kana('ゃ')),
    ("xyu", Kana('ゅ')),
    ("xyo", Kana('ょ')),
    ("xtsu", Kana('っ')),
    ("xtu", Kana('っ')),
    ("xwa", Kana('ゎ')),
    // Yoon
    ("kya", Digraph("ki", "xya")),
    ("kyu", Digraph("ki", "xyu")),
    ("kyo", Digraph("ki", "xyo")),
    ("gya", Digraph("gi", "xya")),
    ("gyu", Digraph("gi", "xyu")),
    ("gyo", Digraph("gi", "xyo")),
    ("sha", Digraph("shi", "xya")),
    ("shu", Digraph("shi", "xyu")),
    ("sho", Digraph("shi", "xyo")),
    ("sya", Digraph("shi", "xya")),
    ("syu", Digraph("shi", "xyu")),
    ("syo", Digraph("shi", "xyo")),
    ("ja", Digraph("ji", "xya")),
    ("ju", Digraph("ji", "xyu")),
    ("jo", Digraph("ji", "xyo")),
    ("zya", Digraph("ji", "xya")),
    ("zyu", Digraph("ji", "xyu")),
    ("zyo", Digraph("ji", "xyo")),
    ("cha", Digraph("chi", "xya")),
    ("chu", Digraph("chi", "xyu")),
    ("cho", Digraph("chi", "xyo")),
    ("tya", Digraph("chi", "xya")),
    ("tyu", Digraph("chi", "xyu")),
    ("tyo", Digraph("chi", "xyo")),
    ("nya", Digraph("ni", "xya")),
    ("nyu", Digraph("ni", "xyu")),
    ("nyo", Digraph("ni", "xyo")),
    ("hya", Digraph("hi", "xya")),
    ("hyu", Digraph("hi", "xyu")),
    ("hyo", Digraph("hi", "xyo")),
    ("bya", Digraph("bi", "xya")),
    ("byu", Digraph("bi", "xyu")),
    ("byo", Digraph("bi", "xyo")),
    ("pya", Digraph("pi", "xya")),
    ("pyu", Digraph("pi", "xyu")),
    ("pyo", Digraph("pi", "xyo")),
    ("mya", Digraph("mi", "xya")),
    ("myu", Digraph("mi", "xyu")),
    ("myo", Digraph("mi", "xyo")),
    ("rya", Digraph("ri", "xya")),
    ("ryu", Digraph("ri", "xyu")),
    ("ryo", Digraph("ri", "xyo")),
    // Loanword sounds
    ("fa", Digraph("fu", "xa")),
    ("fi", Digraph("fu", "xi")),
    ("fe", Digraph("fu", "xe")),
    ("fo", Digraph("fu", "xo")),
];

/// Immutable romaji → kana mapping for one script
#[derive(Debug, Clone)]
pub struct SyllableTable {
    script: Script,
    entries: HashMap<&'static str, Syllable>,
    prefixes: HashSet<String>,
}

impl SyllableTable {
    fn from_entries(script: Script, entries: HashMap<&'static str, Syllable>) -> Self {
        let mut prefixes = HashSet::new();
        for key in entries.keys() {
            for (idx, _) in key.char_indices().skip(1) {
                prefixes.insert(key[..idx].to_string());
            }
        }
        Self { script, entries, prefixes }
    }

    pub fn hiragana() -> Self {
        Self::from_entries(Script::Hiragana, HIRAGANA.iter().copied().collect())
    }

    pub fn katakana() -> Self {
        let mut entries: HashMap<&'static str, Syllable> = HIRAGANA
            .iter()
            .map(|&(key, syllable)| {
                let shifted = match syllable {
                    Kana(c) => Kana(
                        char::from_u32(c as u32 + KATAKANA_OFFSET).unwrap_or(c),
                    ),
                    digraph => digraph,
                };
                (key, shifted)
            })
            .collect();
        entries.insert("-", Kana('ー'));
        Self::from_entries(Script::Katakana, entries)
    }

    pub fn script(&self) -> Script {
        self.script
    }

    pub fn get(&self, key: &str) -> Option<Syllable> {
        self.entries.get(key).copied()
    }

    /// Whether `partial` can still grow into a key
    pub fn is_prefix(&self, partial: &str) -> bool {
        self.prefixes.contains(partial)
    }

    /// Resolve a key to its kana, following digraphs
    pub fn resolve(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Kana(c) => Some(c.to_string()),
            Digraph(first, second) => {
                let mut out = self.resolve(first)?;
                out.push_str(&self.resolve(second)?);
                Some(out)
            }
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

/// Both syllable tables, built once and passed to whoever transliterates
#[derive(Debug, Clone)]
pub struct KanaTables {
    pub hiragana: SyllableTable,
    pub katakana: SyllableTable,
}

impl KanaTables {
    pub fn new() -> Self {
        Self {
            hiragana: SyllableTable::hiragana(),
            katakana: SyllableTable::katakana(),
        }
    }

    pub fn for_script(&self, script: Script) -> &SyllableTable {
        match script {
            Script::Hiragana => &self.hiragana,
            Script::Katakana => &self.katakana,
        }
    }
}

impl Default for KanaTables {
    fn default() -> Self {
        Self::new()
    }
}

use anyhow::{Context, Result};

use kanji_lib::romaji::transliterate;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, romaji: &str, katakana: bool, codes: bool, format: &OutputFormat) -> Result<()> {
    let table = if katakana { &app.tables.katakana } else { &app.tables.hiragana };
    let result = transliterate(romaji, table)
        .with_context(|| format!("'{}' is not valid romaji", romaji))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Plain => {
            println!("{}", result.text);
            if codes {
                let list = result
                    .codes
                    .iter()
                    .map(|c| format!("U+{:04X}", c))
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("{}", list);
            }
        }
    }

    Ok(())
}

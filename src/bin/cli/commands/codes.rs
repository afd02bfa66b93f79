use anyhow::Result;

use crate::OutputFormat;

const COLUMNS: usize = 8;

/// Lines listing every character in `start..=end`, `COLUMNS` per line
fn range_lines(start: u32, end: u32) -> Vec<String> {
    let entries: Vec<String> = (start..=end)
        .filter_map(|code| char::from_u32(code).map(|c| format!("{} {:04X}", c, code)))
        .collect();
    entries.chunks(COLUMNS).map(|row| row.join(" | ")).collect()
}

pub fn run(text: Option<&str>, format: &OutputFormat) -> Result<()> {
    match (text, format) {
        (Some(text), OutputFormat::Json) => {
            let output: Vec<_> = text
                .chars()
                .map(|c| serde_json::json!({ "char": c.to_string(), "code": c as u32 }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        (Some(text), OutputFormat::Plain) => {
            for c in text.chars() {
                println!("{} U+{:04X}", c, c as u32);
            }
        }
        (None, _) => {
            println!("---hiragana---");
            for line in range_lines(0x3041, 0x3096) {
                println!("{}", line);
            }
            println!("---katakana---");
            for line in range_lines(0x30A1, 0x30FA) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

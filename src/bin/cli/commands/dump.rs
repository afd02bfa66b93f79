use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{self, pad, paint};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let cards = app.load_cards()?;

    match format {
        OutputFormat::Json => {
            let output: Vec<_> = cards.iter().collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for card in cards.iter() {
                println!(
                    "{} {} {} {} {} {} {}",
                    paint(&pad(&card.key, 4), terminal::Color::GRAY, use_color),
                    paint(&card.kanji, terminal::Color::BOLD, use_color),
                    pad(&card.meaning, 12),
                    pad(&card.reading, 8),
                    pad(&card.phrase.text, 8),
                    pad(&card.phrase.reading, 10),
                    card.phrase.meaning,
                );
            }
            if cards.is_empty() {
                println!("(no cards)");
            }
        }
    }

    Ok(())
}

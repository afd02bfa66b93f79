use anyhow::Result;

use kanji_lib::flashcards::algorithm::{compute_stats, format_interval, is_due, next_due};
use kanji_lib::DrillType;

use crate::app::App;
use crate::render::terminal::{self, paint};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let today = App::today();
    let cards = app.load_cards()?;
    let store = app.load_session(&cards, today);
    let retained = store.iter().filter(|(key, _)| !cards.contains(key.as_str())).count();

    let stats: Vec<_> = DrillType::ALL
        .iter()
        .map(|&drill_type| compute_stats(&store, &cards, drill_type, today))
        .collect();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "cards": cards.len(),
                "retainedRecords": retained,
                "drills": stats,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{} cards", cards.len());
            if retained > 0 {
                println!("{} records kept for removed cards", retained);
            }

            for s in &stats {
                println!();
                println!("{}", paint(s.drill_type.label(), terminal::Color::BOLD, use_color));
                println!(
                    "  due {}  fresh {}  reviewed today {}",
                    paint(&s.due_cards.to_string(), terminal::Color::YELLOW, use_color),
                    s.fresh_cards,
                    s.reviewed_today
                );
                println!(
                    "  longest streak {}  mean streak {:.1}",
                    s.longest_streak, s.mean_streak
                );

                // Soonest card that is not due yet
                let upcoming = store
                    .iter()
                    .filter(|(key, _)| cards.contains(key.as_str()))
                    .map(|(_, record)| record.get(s.drill_type))
                    .filter(|record| !is_due(record, today))
                    .filter_map(next_due)
                    .map(|date| (date - today).num_days())
                    .min();
                if let Some(days) = upcoming {
                    println!("  next card in {}", format_interval(days));
                }
            }
        }
    }

    Ok(())
}

use anyhow::{Context, Result};

use kanji_lib::flashcards::drill_for;
use kanji_lib::{DrillScheduler, DrillType};

use crate::app::App;
use crate::render::terminal::{self, paint, TerminalPrompter};

pub fn run(app: &App, drill_type: DrillType, limit: Option<usize>, use_color: bool) -> Result<()> {
    let today = App::today();
    let cards = app.load_cards()?;
    let mut store = app.load_session(&cards, today);

    let drill = drill_for(drill_type, &app.tables);
    let mut prompter = TerminalPrompter::new(use_color);
    let scheduler = DrillScheduler::new(&cards, today).with_limit(app.batch_limit(limit));

    let summary = scheduler
        .run(&mut store, drill.as_ref(), &mut prompter, &mut rand::thread_rng())
        .context("Drill aborted, progress not saved")?;

    if summary.drilled > 0 {
        let missed = summary.failed.to_string();
        println!(
            "{} drilled, {} missed",
            summary.drilled,
            paint(&missed, terminal::Color::RED, use_color && summary.failed > 0)
        );
    }

    app.save_session(&store)
}

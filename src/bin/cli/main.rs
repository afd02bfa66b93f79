mod app;
mod commands;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kanji_lib::DrillType;

#[derive(Parser)]
#[command(name = "kanji-cli", about = "Kanji drills with spaced repetition", version)]
struct Cli {
    /// Card source CSV file
    #[arg(long, global = true)]
    cards: Option<PathBuf>,

    /// Session file holding drill progress
    #[arg(long, global = true)]
    session: Option<PathBuf>,

    /// Config file (default: config.toml in the data directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum DrillKind {
    /// Recall the kanji from its meaning
    Write,
    /// Type the meaning of the kanji
    Meaning,
    /// Type the reading of the kanji in romaji
    Reading,
}

impl From<DrillKind> for DrillType {
    fn from(kind: DrillKind) -> Self {
        match kind {
            DrillKind::Write => DrillType::MeaningToKanji,
            DrillKind::Meaning => DrillType::KanjiToMeaning,
            DrillKind::Reading => DrillType::KanjiToReading,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List all cards
    Dump,

    /// Show drill statistics
    Stats,

    /// Drill the cards that are due
    Drill {
        /// Drill direction
        #[arg(value_enum)]
        kind: DrillKind,
        /// Maximum cards to drill this run (0 for no limit)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Convert romaji to kana
    Convert {
        /// Romaji text
        romaji: String,
        /// Convert to katakana instead of hiragana
        #[arg(long)]
        katakana: bool,
        /// Also print the code points
        #[arg(long)]
        codes: bool,
    },

    /// Show code points of characters, or the kana tables without TEXT
    Codes {
        /// Characters to inspect
        text: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app = app::App::new(cli.config, cli.cards, cli.session)?;
    let use_color = !cli.no_color && app.color_enabled() && std::io::stdout().is_terminal();

    match cli.command {
        Command::Dump => {
            commands::dump::run(&app, &cli.format, use_color)?;
        }
        Command::Stats => {
            commands::stats::run(&app, &cli.format, use_color)?;
        }
        Command::Drill { kind, limit } => {
            commands::drill::run(&app, kind.into(), limit, use_color)?;
        }
        Command::Convert { romaji, katakana, codes } => {
            commands::convert::run(&app, &romaji, katakana, codes, &cli.format)?;
        }
        Command::Codes { text } => {
            commands::codes::run(text.as_deref(), &cli.format)?;
        }
    }

    Ok(())
}

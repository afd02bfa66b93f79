use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use kanji_lib::cards::load_cards;
use kanji_lib::{CardStore, Config, KanaTables, SessionStorage, SessionStore};

/// Shared application state for CLI commands
pub struct App {
    pub config: Config,
    pub tables: KanaTables,
    pub cards_path: PathBuf,
    pub session: SessionStorage,
}

impl App {
    /// Resolve paths from flags and the config file
    pub fn new(
        config_path: Option<PathBuf>,
        cards_flag: Option<PathBuf>,
        session_flag: Option<PathBuf>,
    ) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => Config::default_config_path().context("Failed to get data directory")?,
        };
        let config = Config::load(&config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;

        let cards_path = config.cards_path(cards_flag);
        let session_path = config
            .session_path(session_flag)
            .context("Failed to get data directory")?;

        Ok(Self {
            config,
            tables: KanaTables::new(),
            cards_path,
            session: SessionStorage::new(session_path),
        })
    }

    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    pub fn color_enabled(&self) -> bool {
        self.config.color.unwrap_or(true)
    }

    pub fn batch_limit(&self, flag: Option<usize>) -> Option<usize> {
        self.config.batch_limit(flag)
    }

    pub fn load_cards(&self) -> Result<CardStore> {
        load_cards(&self.cards_path, &self.tables)
            .with_context(|| format!("Failed to load cards from {}", self.cards_path.display()))
    }

    /// Load the session store with a record for every current card
    pub fn load_session(&self, cards: &CardStore, today: NaiveDate) -> SessionStore {
        let mut store = self.session.load();
        let added = store.reconcile(cards.keys(), today);
        if added > 0 {
            log::info!("Added {} new cards to the session", added);
        }
        store
    }

    pub fn save_session(&self, store: &SessionStore) -> Result<()> {
        self.session
            .save(store)
            .with_context(|| format!("Failed to save session to {}", self.session.path().display()))
    }
}

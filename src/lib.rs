pub mod cards;
pub mod config;
pub mod flashcards;
pub mod romaji;

pub use cards::{Card, CardStore};
pub use config::Config;
pub use flashcards::{DrillScheduler, DrillType, SessionStorage, SessionStore};
pub use romaji::{KanaTables, Script};

//! Spaced repetition drills
//!
//! This module provides:
//! - Per-card, per-drill streak records and the session store
//! - The streak-based due schedule
//! - Session file persistence
//! - The three drill variants and the scheduler that runs them

pub mod algorithm;
pub mod drills;
pub mod models;
pub mod prompt;
pub mod scheduler;
pub mod storage;

pub use drills::{drill_for, Drill};
pub use models::*;
pub use prompt::Prompter;
pub use scheduler::{DrillScheduler, SessionSummary};
pub use storage::{FlashcardError, SessionStorage};

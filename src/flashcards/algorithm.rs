//! Streak-based review schedule
//!
//! A card that has been answered correctly `streak` times in a row waits
//! `streak` days before it comes back:
//! - streak 0: due immediately
//! - streak 3, reviewed 2 days ago: not due
//! - streak 3, reviewed 3 days ago: due
//!
//! Any failure resets the streak to 0.

use chrono::{Days, NaiveDate};

use super::models::{DrillRecord, DrillType, ReviewStats, SessionStore};
use crate::cards::CardStore;

/// Whole days between the last review and `today` (negative if the record
/// is dated in the future)
pub fn elapsed_days(record: &DrillRecord, today: NaiveDate) -> i64 {
    (today - record.last_reviewed).num_days()
}

/// Check if a card is due for review
pub fn is_due(record: &DrillRecord, today: NaiveDate) -> bool {
    record.streak == 0 || elapsed_days(record, today) >= i64::from(record.streak)
}

/// Date on which the card becomes due again, `None` past the calendar's end
pub fn next_due(record: &DrillRecord) -> Option<NaiveDate> {
    record
        .last_reviewed
        .checked_add_days(Days::new(u64::from(record.streak)))
}

/// Record a scored review
pub fn apply_verdict(record: &mut DrillRecord, passed: bool, today: NaiveDate) {
    if passed {
        record.streak += 1;
    } else {
        record.streak = 0;
    }
    record.last_reviewed = today;
}

/// Calculate statistics for one drill type over the cards that still exist
pub fn compute_stats(
    store: &SessionStore,
    cards: &CardStore,
    drill_type: DrillType,
    today: NaiveDate,
) -> ReviewStats {
    let mut stats = ReviewStats::new(drill_type);
    let mut streak_total: u64 = 0;

    for (key, record) in store.iter() {
        if !cards.contains(key) {
            continue;
        }
        let drill = record.get(drill_type);
        stats.total_cards += 1;
        streak_total += u64::from(drill.streak);
        stats.longest_streak = stats.longest_streak.max(drill.streak);
        if is_due(drill, today) {
            stats.due_cards += 1;
        }
        if drill.streak == 0 {
            stats.fresh_cards += 1;
        }
        if drill.last_reviewed == today {
            stats.reviewed_today += 1;
        }
    }

    if stats.total_cards > 0 {
        stats.mean_streak = streak_total as f32 / stats.total_cards as f32;
    }
    stats
}

/// Format an interval in days to a human-readable string
pub fn format_interval(days: i64) -> String {
    if days <= 0 {
        "now".to_string()
    } else if days == 1 {
        "1d".to_string()
    } else if days < 7 {
        format!("{}d", days)
    } else if days < 30 {
        let weeks = days / 7;
        if weeks == 1 {
            "1w".to_string()
        } else {
            format!("{}w", weeks)
        }
    } else if days < 365 {
        let months = days / 30;
        if months == 1 {
            "1mo".to_string()
        } else {
            format!("{}mo", months)
        }
    } else {
        let years = days / 365;
        if years == 1 {
            "1y".to_string()
        } else {
            format!("{}y", years)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use crate::cards::{Card, Phrase};
    use crate::flashcards::models::CardRecord;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn record(streak: u32, days_ago: i64) -> DrillRecord {
        DrillRecord {
            streak,
            last_reviewed: today() - Duration::days(days_ago),
        }
    }

    fn card(key: &str) -> Card {
        Card {
            key: key.to_string(),
            kanji: "火".to_string(),
            meaning: "fire".to_string(),
            strokes: 4,
            reading: "カ".to_string(),
            legacy_rank: key.to_string(),
            phrase: Phrase {
                text: "火山".to_string(),
                reading: "かざん".to_string(),
                meaning: "volcano".to_string(),
            },
        }
    }

    #[test]
    fn test_fresh_card_is_always_due() {
        assert!(is_due(&record(0, 0), today()));
        assert!(is_due(&record(0, 30), today()));
        assert!(is_due(&record(0, -2), today()));
    }

    #[test]
    fn test_due_law() {
        for streak in 1..6u32 {
            for days_ago in 0..8i64 {
                assert_eq!(
                    is_due(&record(streak, days_ago), today()),
                    days_ago >= i64::from(streak),
                    "streak {} reviewed {} days ago",
                    streak,
                    days_ago
                );
            }
        }
    }

    #[test]
    fn test_correct_answer_extends_streak() {
        let mut r = record(3, 5);
        apply_verdict(&mut r, true, today());
        assert_eq!(r.streak, 4);
        assert_eq!(r.last_reviewed, today());
        assert_eq!(next_due(&r), Some(today() + Duration::days(4)));
    }

    #[test]
    fn test_huge_streak_has_no_next_date() {
        let r = DrillRecord {
            streak: 4_000_000_000,
            last_reviewed: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert!(!is_due(&r, today()));
        assert_eq!(next_due(&r), None);
    }

    #[test]
    fn test_wrong_answer_resets_streak() {
        let mut r = record(9, 12);
        apply_verdict(&mut r, false, today());
        assert_eq!(r.streak, 0);
        assert_eq!(r.last_reviewed, today());
    }

    #[test]
    fn test_compute_stats() {
        let cards = CardStore::new(vec![card("1"), card("2"), card("3")]);
        let mut store = SessionStore::new();
        store.reconcile(cards.keys(), today());

        let mut long = CardRecord::new(today() - Duration::days(1));
        long.get_mut(DrillType::KanjiToMeaning).streak = 6;
        store.insert("2".to_string(), long);
        store.insert("removed".to_string(), long);

        let stats = compute_stats(&store, &cards, DrillType::KanjiToMeaning, today());
        assert_eq!(stats.total_cards, 3);
        assert_eq!(stats.due_cards, 2);
        assert_eq!(stats.fresh_cards, 2);
        assert_eq!(stats.reviewed_today, 2);
        assert_eq!(stats.longest_streak, 6);
        assert!((stats.mean_streak - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_format_interval() {
        assert_eq!(format_interval(0), "now");
        assert_eq!(format_interval(-3), "now");
        assert_eq!(format_interval(1), "1d");
        assert_eq!(format_interval(5), "5d");
        assert_eq!(format_interval(7), "1w");
        assert_eq!(format_interval(14), "2w");
        assert_eq!(format_interval(30), "1mo");
        assert_eq!(format_interval(90), "3mo");
        assert_eq!(format_interval(365), "1y");
        assert_eq!(format_interval(730), "2y");
    }
}

use std::collections::HashMap;

use super::models::Card;

/// Read-only card collection, kept in source order and indexed by key
#[derive(Debug, Clone, Default)]
pub struct CardStore {
    cards: Vec<Card>,
    index: HashMap<String, usize>,
}

impl CardStore {
    /// Build a store. A later card with a duplicate key replaces the earlier
    /// one in the index.
    pub fn new(cards: Vec<Card>) -> Self {
        let index = cards
            .iter()
            .enumerate()
            .map(|(idx, card)| (card.key.clone(), idx))
            .collect();
        Self { cards, index }
    }

    pub fn get(&self, key: &str) -> Option<&Card> {
        self.index.get(key).map(|&idx| &self.cards[idx])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|c| c.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

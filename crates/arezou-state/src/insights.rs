//! Review insights panel state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::disclosure::Disclosure;
use crate::error::StateError;

/// The explorable insight cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightId {
    Rating,
    Community,
    Verified,
    Recent,
    Sentiment,
    Trending,
}

impl Choice for InsightId {
    const ALL: &'static [Self] = &[
        InsightId::Rating,
        InsightId::Community,
        InsightId::Verified,
        InsightId::Recent,
        InsightId::Sentiment,
        InsightId::Trending,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            InsightId::Rating => "rating",
            InsightId::Community => "community",
            InsightId::Verified => "verified",
            InsightId::Recent => "recent",
            InsightId::Sentiment => "sentiment",
            InsightId::Trending => "trending",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            InsightId::Rating => "Rating",
            InsightId::Community => "Community",
            InsightId::Verified => "Verified",
            InsightId::Recent => "Recent",
            InsightId::Sentiment => "Sentiment",
            InsightId::Trending => "Trending",
        }
    }
}

impl FromStr for InsightId {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| StateError::UnknownInsight(s.to_string()))
    }
}

/// Insights side panel.
///
/// Visibility belongs to the page; any section may open it. The expanded
/// card is kept while the panel is closed, so reopening shows the same card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InsightsPanel {
    pub open: bool,
    pub cards: Disclosure<InsightId>,
}

impl InsightsPanel {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn toggle_card(&mut self, id: InsightId) {
        self.cards.toggle(id);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_returns_to_closed() {
        let mut panel = InsightsPanel::default();
        panel.toggle();
        assert!(panel.is_open());
        panel.toggle();
        assert!(!panel.is_open());
    }

    #[test]
    fn test_open_and_close_are_idempotent() {
        let mut panel = InsightsPanel::default();
        panel.open();
        panel.open();
        assert!(panel.is_open());
        panel.close();
        panel.close();
        assert!(!panel.is_open());
    }

    #[test]
    fn test_card_expansion_survives_close() {
        let mut panel = InsightsPanel::default();
        panel.open();
        panel.toggle_card(InsightId::Sentiment);
        panel.close();
        panel.open();
        assert!(panel.cards.is_expanded(InsightId::Sentiment));
    }

    #[test]
    fn test_single_card_expanded() {
        let mut panel = InsightsPanel::default();
        panel.toggle_card(InsightId::Rating);
        panel.toggle_card(InsightId::Trending);
        assert_eq!(panel.cards.expanded(), Some(InsightId::Trending));
        panel.toggle_card(InsightId::Trending);
        assert_eq!(panel.cards.expanded(), None);
    }
}

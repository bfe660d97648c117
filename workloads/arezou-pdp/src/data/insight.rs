//! Insight card data for the review insights panel.

use arezou_sdk::arezou_state::InsightId;
use serde::Serialize;

/// Decorative figure shown in an expanded insight card.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InsightVisual {
    /// Bar per star rating, 5 down to 1, as percentages.
    RatingBars { percents: [u8; 5] },
    /// Single horizontal progress bar.
    Progress { percent: u8 },
    /// Daily activity, each value out of 5.
    Sparkline { values: &'static [u8] },
    /// Labeled sentiment rows.
    Sentiment { rows: &'static [(&'static str, u8)] },
    /// Theme chips.
    Themes { chips: &'static [&'static str] },
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightCard {
    pub id: InsightId,
    pub prompt: &'static str,
    pub teaser: &'static str,
    pub stat: Option<&'static str>,
    pub detail: &'static str,
    pub visual: Option<InsightVisual>,
}

pub static INSIGHT_CARDS: &[InsightCard] = &[
    InsightCard {
        id: InsightId::Rating,
        prompt: "How do people rate this?",
        teaser: "Overwhelmingly positive",
        stat: Some("4.8"),
        detail: "out of 5 stars. 89% gave 4 stars or higher",
        visual: Some(InsightVisual::RatingBars {
            percents: [70, 20, 5, 5, 5],
        }),
    },
    InsightCard {
        id: InsightId::Community,
        prompt: "Who's sharing their experience?",
        teaser: "262 real stories",
        stat: Some("262"),
        detail: "customers have shared their journey with this product",
        visual: None,
    },
    InsightCard {
        id: InsightId::Verified,
        prompt: "Are these reviews genuine?",
        teaser: "83% verified purchases",
        stat: Some("83%"),
        detail: "of reviews are from verified purchases. Real people, real results",
        visual: Some(InsightVisual::Progress { percent: 83 }),
    },
    InsightCard {
        id: InsightId::Recent,
        prompt: "What's the latest feedback?",
        teaser: "13 reviews this month",
        stat: Some("13"),
        detail: "new reviews in the last 30 days. This community stays active",
        visual: Some(InsightVisual::Sparkline {
            values: &[3, 2, 4, 3, 5, 4, 3, 4, 5, 3, 4, 5, 4],
        }),
    },
    InsightCard {
        id: InsightId::Sentiment,
        prompt: "What's the overall sentiment?",
        teaser: "Mostly delighted",
        stat: None,
        detail: "Here's what the community feels:",
        visual: Some(InsightVisual::Sentiment {
            rows: &[("Loved it", 89), ("Neutral", 7), ("Critical", 4)],
        }),
    },
    InsightCard {
        id: InsightId::Trending,
        prompt: "What do people mention most?",
        teaser: "Glow, hydration, texture",
        stat: None,
        detail: "Top themes from customer stories:",
        visual: Some(InsightVisual::Themes {
            chips: &[
                "✨ Radiant glow",
                "💧 Deep hydration",
                "🌿 Natural feel",
                "😊 Gentle on skin",
                "🌸 Lovely scent",
            ],
        }),
    },
];

pub fn insight_card(id: InsightId) -> Option<&'static InsightCard> {
    INSIGHT_CARDS.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arezou_sdk::arezou_state::Choice;

    #[test]
    fn test_one_card_per_insight() {
        assert_eq!(INSIGHT_CARDS.len(), InsightId::ALL.len());
        for id in InsightId::ALL {
            assert!(insight_card(*id).is_some(), "{:?}", id);
        }
    }

    #[test]
    fn test_sentiment_adds_up() {
        let card = insight_card(InsightId::Sentiment).unwrap();
        match &card.visual {
            Some(InsightVisual::Sentiment { rows }) => {
                let total: u32 = rows.iter().map(|(_, p)| *p as u32).sum();
                assert_eq!(total, 100);
            }
            other => panic!("unexpected visual {:?}", other),
        }
    }

    #[test]
    fn test_visual_serializes_with_kind_tag() {
        let card = insight_card(InsightId::Verified).unwrap();
        let json = serde_json::to_value(card).unwrap();
        assert_eq!(json["id"], "verified");
        assert_eq!(json["visual"]["kind"], "progress");
        assert_eq!(json["visual"]["percent"], 83);
    }
}

//! Review insights side panel.
//!
//! Emitted only while the panel is open. The backdrop, the close button and
//! "Browse all reviews" all link to the closed state.

use arezou_sdk::arezou_state::{Choice, PageAction, PageState};

use crate::data::{InsightCard, InsightVisual, INSIGHT_CARDS};

use super::html::{action_href, action_link, class_if, classes, escape_html};

/// Render the open panel, or nothing when it is closed.
pub fn render_insights(state: &PageState) -> String {
    if !state.insights.is_open() {
        return String::new();
    }

    let cards: String = INSIGHT_CARDS
        .iter()
        .map(|card| render_card(state, card))
        .collect();

    format!(
        r#"<div class="insights-overlay is-open" data-section="insights">
    <a class="insights-backdrop" href="{close_href}" data-action="insights:close" rel="nofollow" aria-label="Close insights panel"></a>
    <aside class="insights-panel" role="dialog" aria-modal="true" aria-labelledby="insights-title">
        <header class="insights-header">
            <span class="eyebrow">✨ Community Insights</span>
            <h2 id="insights-title">See what the community thinks</h2>
            {close}
        </header>
        <div class="insight-cards">{cards}</div>
        <footer class="insights-footer">
            <p>Ready to explore real customer stories?</p>
            {browse}
        </footer>
    </aside>
</div>"#,
        close_href = action_href(state, PageAction::CloseInsights),
        close = action_link(state, PageAction::CloseInsights, "insights-close", "✕"),
        cards = cards,
        browse = action_link(
            state,
            PageAction::CloseInsights,
            "insights-browse",
            "Browse all reviews →"
        ),
    )
}

fn render_card(state: &PageState, card: &InsightCard) -> String {
    let expanded = state.insights.cards.is_expanded(card.id);

    let summary = format!(
        r#"<span class="insight-prompt">{}</span><span class="insight-teaser">{}</span>"#,
        escape_html(card.prompt),
        escape_html(card.teaser)
    );

    let body = if expanded {
        let stat = card
            .stat
            .map(|s| format!(r#"<p class="insight-stat">{}</p>"#, escape_html(s)))
            .unwrap_or_default();
        let visual = card.visual.as_ref().map(render_visual).unwrap_or_default();
        format!(
            r#"<div class="insight-body">{}<p class="insight-detail">{}</p>{}</div>"#,
            stat,
            escape_html(card.detail),
            visual
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="{class}" id="insight-{id}">{toggle}{body}</div>"#,
        class = classes(&["insight-card", class_if(expanded, "is-expanded")]),
        id = card.id.as_str(),
        toggle = action_link(state, PageAction::ToggleInsight(card.id), "insight-toggle", &summary),
        body = body
    )
}

fn render_visual(visual: &InsightVisual) -> String {
    match visual {
        InsightVisual::RatingBars { percents } => {
            let bars: String = percents
                .iter()
                .zip((1..=5).rev())
                .map(|(pct, stars)| {
                    format!(
                        r#"<div class="rating-column"><div class="rating-column-track"><div class="rating-column-fill stars-{stars}" style="height: {pct}%"></div></div><span>{stars}★</span></div>"#,
                        stars = stars,
                        pct = pct
                    )
                })
                .collect();
            format!(r#"<div class="insight-visual rating-columns">{}</div>"#, bars)
        }
        InsightVisual::Progress { percent } => format!(
            r#"<div class="insight-visual progress-track"><div class="progress-fill" style="width: {}%"></div></div>"#,
            percent
        ),
        InsightVisual::Sparkline { values } => {
            let bars: String = values
                .iter()
                .map(|v| {
                    format!(
                        r#"<span class="spark-bar" style="height: {}%"></span>"#,
                        u32::from(*v) * 100 / 5
                    )
                })
                .collect();
            format!(r#"<div class="insight-visual sparkline">{}</div>"#, bars)
        }
        InsightVisual::Sentiment { rows } => {
            let rows: String = rows
                .iter()
                .map(|(label, pct)| {
                    format!(
                        r#"<div class="sentiment-row"><span class="sentiment-label">{label}</span><div class="progress-track"><div class="progress-fill" style="width: {pct}%"></div></div><span class="sentiment-value">{pct}%</span></div>"#,
                        label = escape_html(label),
                        pct = pct
                    )
                })
                .collect();
            format!(r#"<div class="insight-visual sentiment">{}</div>"#, rows)
        }
        InsightVisual::Themes { chips } => {
            let chips: String = chips
                .iter()
                .map(|c| format!(r#"<span class="theme-chip">{}</span>"#, escape_html(c)))
                .collect();
            format!(r#"<div class="insight-visual themes">{}</div>"#, chips)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arezou_sdk::arezou_state::InsightId;

    #[test]
    fn test_closed_panel_renders_nothing() {
        assert_eq!(render_insights(&PageState::default()), "");
    }

    #[test]
    fn test_open_panel_lists_cards_collapsed() {
        let state = PageState::default().after(PageAction::OpenInsights);
        let html = render_insights(&state);
        assert_eq!(html.matches(r#"class="insight-card""#).count(), 6);
        assert!(!html.contains("insight-body"));
        // backdrop, close button and browse link all close the panel
        assert_eq!(html.matches(r#"href="?""#).count(), 3);
        assert!(html.contains(r#"href="?insights=1&amp;card=rating""#));
    }

    #[test]
    fn test_expanded_card_shows_visual() {
        let state = PageState::default()
            .after(PageAction::OpenInsights)
            .after(PageAction::ToggleInsight(InsightId::Sentiment));
        let html = render_insights(&state);
        assert!(html.contains(r#"insight-card is-expanded" id="insight-sentiment""#));
        assert!(html.contains("Loved it"));
        assert!(html.contains("width: 89%"));
        assert_eq!(html.matches("insight-body").count(), 1);
    }

    #[test]
    fn test_close_keeps_card_in_links() {
        let state = PageState::default()
            .after(PageAction::OpenInsights)
            .after(PageAction::ToggleInsight(InsightId::Recent));
        let html = render_insights(&state);
        assert!(html.contains(r#"href="?card=recent""#));
        assert_eq!(html.matches("spark-bar").count(), 13);
    }

    #[test]
    fn test_rating_bars_order() {
        let html = render_visual(&InsightVisual::RatingBars {
            percents: [70, 20, 5, 5, 5],
        });
        let five = html.find("stars-5").unwrap();
        let one = html.find("stars-1").unwrap();
        assert!(five < one);
        assert!(html.contains(r#"stars-5" style="height: 70%""#));
    }

    #[test]
    fn test_card_anchor_uses_insight_slug() {
        let state = PageState::default().after(PageAction::OpenInsights);
        let html = render_insights(&state);
        for id in InsightId::ALL {
            assert!(html.contains(&format!(r#"id="insight-{}""#, id.as_str())), "{:?}", id);
        }
    }
}

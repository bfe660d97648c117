//! "The Trust Journey" section: customer stories with a featured lead story.

use arezou_sdk::arezou_state::{Choice, PageAction, PageState, TrustFilter};

use crate::data::{STORIES, TRUST_STATS};

use super::cards::{render_story_card, CardVariant};
use super::html::{action_link, class_if, classes, escape_html, render_stars};

/// Render the trust journey section.
///
/// Filters mark the active pill; every story is listed.
pub fn render_trust_journey(state: &PageState) -> String {
    let filter = state.trust.filter;

    let listing = match STORIES.split_first() {
        Some((lead, rest)) => {
            let grid: String = rest
                .iter()
                .map(|story| render_story_card(story, CardVariant::Default))
                .collect();
            format!(
                r#"<div class="story-featured">{}</div>
    <div class="story-grid">{}</div>"#,
                render_story_card(lead, CardVariant::Warm),
                grid
            )
        }
        None => String::new(),
    };

    let pills: String = TrustFilter::PILLS
        .iter()
        .map(|pill| {
            let class = classes(&["filter-pill", class_if(*pill == filter, "is-active")]);
            action_link(
                state,
                PageAction::SetTrustFilter(*pill),
                &class,
                &escape_html(pill.label()),
            )
        })
        .collect();

    let new_this_month = TRUST_STATS
        .new_this_month
        .map(|n| {
            format!(
                r#"<div class="stat"><span class="stat-value">{}</span><span class="stat-label">New this month</span></div>"#,
                n
            )
        })
        .unwrap_or_default();

    format!(
        r#"<section class="trust-journey" data-section="trust-journey" id="trust-journey">
    <header class="section-header">
        <span class="eyebrow">The Trust Journey</span>
        <h2>Stories from Real Users</h2>
        <p>{total} customers have shared their skincare transformation. Here is what makes them come back.</p>
        {insights}
    </header>
    <div class="trust-summary">
        <div class="trust-rating">
            <span class="stat-value">{average:.1}</span>
            {stars}
            <span class="stat-label">{total} reviews</span>
        </div>
        <div class="trust-stats">
            <div class="stat"><span class="stat-value">{recommend}%</span><span class="stat-label">Would recommend</span></div>
            <div class="stat"><span class="stat-value">{verified}%</span><span class="stat-label">Verified purchases</span></div>
            {new_this_month}
        </div>
        <nav class="filter-pills" aria-label="Filter stories">{pills}</nav>
    </div>
    {listing}
    <div class="reviews-actions">{view_all}</div>
</section>"#,
        total = TRUST_STATS.total,
        insights = action_link(state, PageAction::OpenInsights, "btn btn-outline insights-link", "View Insights"),
        average = TRUST_STATS.average,
        stars = render_stars(TRUST_STATS.average, false),
        recommend = TRUST_STATS.recommend_percent,
        verified = TRUST_STATS.verified_percent,
        new_this_month = new_this_month,
        pills = pills,
        listing = listing,
        view_all = format!(
            r#"<button type="button" class="btn btn-outline">View all {} reviews ›</button>"#,
            TRUST_STATS.total
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shows_lead_and_grid() {
        let html = render_trust_journey(&PageState::default());
        assert_eq!(html.matches("review-card--warm").count(), 1);
        assert_eq!(html.matches("<article class=\"review-card").count(), 6);
        assert!(html.contains("My morning skin is unbelievable now"));
        assert!(html.contains("262 customers have shared"));
        assert!(html.contains(r#"<span class="stat-value">13</span>"#));
    }

    #[test]
    fn test_only_first_four_filters_as_pills() {
        let html = render_trust_journey(&PageState::default());
        let pills = html.matches(r#"class="filter-pill""#).count()
            + html.matches(r#"class="filter-pill is-active""#).count();
        assert_eq!(pills, 4);
        assert!(html.contains(r#"href="?trust=excellent""#));
        assert!(!html.contains("Dry Skin"));
    }

    #[test]
    fn test_hidden_filter_lists_every_story() {
        let state = PageState::default().after(PageAction::SetTrustFilter(TrustFilter::OilySkin));
        let html = render_trust_journey(&state);
        assert_eq!(html.matches("<article class=\"review-card").count(), 6);
        assert!(html.contains("Love at first application"));
        assert!(!html.contains("is-active"));
    }

    #[test]
    fn test_view_all_is_inert() {
        let html = render_trust_journey(&PageState::default());
        assert!(html.contains(r#"<button type="button" class="btn btn-outline">View all 262 reviews ›</button>"#));
        assert_eq!(html.matches(r#"data-action="trust:show-all""#).count(), 1);
    }
}

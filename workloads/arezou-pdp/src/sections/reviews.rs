//! Community reviews section.

use arezou_sdk::arezou_state::{Choice, PageAction, PageState, ReviewFilter, ViewMode};

use crate::data::{ReviewStats, COMMUNITY_STATS, REVIEWS};

use super::cards::{render_review_card, CardVariant};
use super::html::{action_link, class_if, classes, escape_html, render_stars};

/// Render the "What Our Community Says" section.
///
/// The filter pills only mark the active filter; every review is listed.
pub fn render_reviews(state: &PageState) -> String {
    let browser = &state.reviews;
    let reviews = REVIEWS;
    let compact = browser.view_mode == ViewMode::List;

    let cards: String = reviews
        .iter()
        .take(browser.visible_count(reviews.len()))
        .enumerate()
        .map(|(i, review)| {
            let variant = if i == 0 {
                CardVariant::Featured
            } else {
                CardVariant::Default
            };
            render_review_card(review, variant, compact)
        })
        .collect();

    let layout = match browser.view_mode {
        ViewMode::Grid => "reviews-grid",
        ViewMode::List => "reviews-list",
    };
    let listing = format!(r#"<div class="{}">{}</div>"#, layout, cards);

    let show_all = if browser.offers_show_all(reviews.len()) {
        let label = if browser.show_all {
            "Show Less".to_string()
        } else {
            format!("View All {} Reviews", COMMUNITY_STATS.total)
        };
        action_link(state, PageAction::ToggleShowAll, "btn btn-outline show-all", &label)
    } else {
        String::new()
    };

    format!(
        r#"<section class="community-reviews" data-section="reviews" id="reviews">
    <header class="section-header">
        <h2>What Our Community Says</h2>
        <p>Join thousands who've discovered their glow with Are-zōu</p>
        {insights}
    </header>
    {stats}
    <div class="reviews-controls">
        {filters}
        {views}
    </div>
    {listing}
    <div class="reviews-actions">{show_all}</div>
</section>"#,
        insights = action_link(state, PageAction::OpenInsights, "insights-link", "✨ View Insights"),
        stats = render_stats_bar(&COMMUNITY_STATS),
        filters = render_filter_pills(state),
        views = render_view_toggle(state),
        listing = listing,
        show_all = show_all,
    )
}

fn render_stats_bar(stats: &ReviewStats) -> String {
    format!(
        r#"<div class="stats-bar">
        <div class="stat"><span class="stat-value">{average:.1}</span>{stars}<span class="stat-label">Average Rating</span></div>
        <div class="stat"><span class="stat-value">{total}</span><span class="stat-label">Total Reviews</span></div>
        <div class="stat"><span class="stat-value">{verified}%</span><span class="stat-label">Verified Purchases</span></div>
        <div class="stat"><span class="stat-value">{recommend}%</span><span class="stat-label">Would Recommend</span></div>
    </div>"#,
        average = stats.average,
        stars = render_stars(stats.average, false),
        total = stats.total,
        verified = stats.verified_percent,
        recommend = stats.recommend_percent,
    )
}

fn render_filter_pills(state: &PageState) -> String {
    let pills: String = ReviewFilter::ALL
        .iter()
        .map(|filter| {
            let class = classes(&["filter-pill", class_if(*filter == state.reviews.filter, "is-active")]);
            action_link(
                state,
                PageAction::SetReviewFilter(*filter),
                &class,
                &escape_html(filter.label()),
            )
        })
        .collect();
    format!(r#"<nav class="filter-pills" aria-label="Filter reviews">{}</nav>"#, pills)
}

fn render_view_toggle(state: &PageState) -> String {
    let buttons: String = ViewMode::ALL
        .iter()
        .map(|mode| {
            let class = classes(&["view-toggle", class_if(*mode == state.reviews.view_mode, "is-active")]);
            action_link(
                state,
                PageAction::SetViewMode(*mode),
                &class,
                &escape_html(mode.label()),
            )
        })
        .collect();
    format!(r#"<div class="view-toggles">{}</div>"#, buttons)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_count(html: &str) -> usize {
        html.matches("<article class=\"review-card").count()
    }

    #[test]
    fn test_grid_shows_six_without_show_all() {
        let html = render_reviews(&PageState::default());
        assert!(html.contains(r#"<div class="reviews-grid">"#));
        assert_eq!(card_count(&html), 6);
        assert_eq!(html.matches("TOP REVIEW").count(), 1);
        assert!(!html.contains("View All 198 Reviews"));
    }

    #[test]
    fn test_list_shows_four_and_offers_show_all() {
        let state = PageState::default().after(PageAction::SetViewMode(ViewMode::List));
        let html = render_reviews(&state);
        assert!(html.contains(r#"<div class="reviews-list">"#));
        assert_eq!(card_count(&html), 4);
        assert!(html.contains("View All 198 Reviews"));
        assert!(html.contains(r#"href="?view=list&amp;all=1""#));

        let expanded = state.after(PageAction::ToggleShowAll);
        let html = render_reviews(&expanded);
        assert_eq!(card_count(&html), 6);
        assert!(html.contains("Show Less"));
    }

    #[test]
    fn test_filter_only_highlights_pill() {
        let state = PageState::default().after(PageAction::SetReviewFilter(ReviewFilter::FourStar));
        let grid = render_reviews(&state);
        let list = render_reviews(&state.after(PageAction::SetViewMode(ViewMode::List)));
        assert_eq!(card_count(&grid), 6);
        assert_eq!(card_count(&list), 4);
        assert!(grid.contains("Sneha R."));
        assert!(grid.contains(r#"class="filter-pill is-active" href="?filter=4-star""#));
        assert_eq!(grid.matches("filter-pill is-active").count(), 1);
    }

    #[test]
    fn test_with_photos_lists_every_review() {
        let state = PageState::default().after(PageAction::SetReviewFilter(ReviewFilter::WithPhotos));
        let html = render_reviews(&state);
        assert_eq!(card_count(&html), 6);
        assert!(!html.contains("reviews-empty"));
        assert!(html.contains(r#"class="filter-pill is-active" href="?filter=with-photos""#));
    }

    #[test]
    fn test_stats_bar() {
        let html = render_reviews(&PageState::default());
        for figure in ["4.9", "198", "94%", "97%"] {
            assert!(html.contains(&format!(r#"<span class="stat-value">{}</span>"#, figure)));
        }
    }
}

//! Review card markup shared by the community and trust journey sections.

use crate::data::{Review, Story};

use super::html::{class_if, classes, escape_html, render_stars};

/// Visual treatment of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    Default,
    /// First card of the community section.
    Featured,
    /// Lead story of the trust journey.
    Warm,
}

impl CardVariant {
    fn class(&self) -> &'static str {
        match self {
            CardVariant::Default => "",
            CardVariant::Featured => "review-card--featured",
            CardVariant::Warm => "review-card--warm",
        }
    }
}

/// Compact cards show at most this many tags.
const COMPACT_TAGS: usize = 2;

/// Render a community review card, full or compact.
pub fn render_review_card(review: &Review, variant: CardVariant, compact: bool) -> String {
    if compact {
        render_compact(review, variant)
    } else {
        render_full(review, variant, None)
    }
}

/// Render a trust journey story card.
pub fn render_story_card(story: &Story, variant: CardVariant) -> String {
    render_full(&story.review, variant, Some(story))
}

fn card_open(variant: CardVariant, compact: bool) -> String {
    let class = classes(&[
        "review-card",
        variant.class(),
        class_if(compact, "review-card--compact"),
    ]);
    let badge = if variant == CardVariant::Featured {
        r#"<span class="top-review-badge">⭐ TOP REVIEW</span>"#
    } else {
        ""
    };
    format!(r#"<article class="{}">{}"#, class, badge)
}

fn render_tags(tags: &[&str], limit: usize, prefix: &str) -> String {
    if tags.is_empty() {
        return String::new();
    }
    let items: String = tags
        .iter()
        .take(limit)
        .map(|t| format!(r#"<li class="review-tag">{}{}</li>"#, prefix, escape_html(t)))
        .collect();
    format!(r#"<ul class="review-tags">{}</ul>"#, items)
}

fn render_full(review: &Review, variant: CardVariant, story: Option<&Story>) -> String {
    let byline = match story {
        Some(story) => format!(
            "{} · {}",
            escape_html(review.date),
            escape_html(story.location)
        ),
        None => escape_html(review.date),
    };
    let second_box = match story {
        Some(story) => ("Customer", story.customer_type.as_str()),
        None => ("Using For", review.usage_duration),
    };
    let verified = if review.verified {
        r#"<span class="verified-badge">✓ Verified Purchase</span>"#
    } else {
        ""
    };
    let helpful = if review.helpful > 0 {
        format!(
            r#"<span class="helpful-count">👍 {} found helpful</span>"#,
            review.helpful
        )
    } else {
        String::new()
    };

    format!(
        r#"{open}
    <header class="review-card-header">
        <h4 class="review-headline">"{headline}"</h4>
        {stars}
    </header>
    <p class="review-body">{body}</p>
    <div class="review-author">
        <span class="avatar">{initial}</span>
        <div>
            <p class="author-name">{author}</p>
            <p class="review-date">{byline}</p>
        </div>
    </div>
    <dl class="review-meta">
        <div class="meta-box"><dt>Skin Type</dt><dd>{skin}</dd></div>
        <div class="meta-box"><dt>{box_label}</dt><dd>{box_value}</dd></div>
    </dl>
    {tags}
    <footer class="review-card-footer">{verified}{helpful}</footer>
</article>"#,
        open = card_open(variant, false),
        headline = escape_html(review.headline),
        stars = render_stars(f32::from(review.rating), false),
        body = escape_html(review.body),
        initial = escape_html(&review.initial().to_string()),
        author = escape_html(review.author),
        byline = byline,
        skin = escape_html(review.skin_type),
        box_label = second_box.0,
        box_value = escape_html(second_box.1),
        tags = render_tags(review.tags, usize::MAX, "✨ "),
        verified = verified,
        helpful = helpful,
    )
}

fn render_compact(review: &Review, variant: CardVariant) -> String {
    format!(
        r#"{open}
    <span class="avatar">{initial}</span>
    <div class="review-compact-body">
        <header class="review-card-header">
            <div>
                <p class="author-name">{author}</p>
                <p class="review-date">{date} • {skin}</p>
            </div>
            {stars}
        </header>
        <h4 class="review-headline">"{headline}"</h4>
        <p class="review-body">{body}</p>
        {tags}
    </div>
</article>"#,
        open = card_open(variant, true),
        initial = escape_html(&review.initial().to_string()),
        author = escape_html(review.author),
        date = escape_html(review.date),
        skin = escape_html(review.skin_type),
        stars = render_stars(f32::from(review.rating), false),
        headline = escape_html(review.headline),
        body = escape_html(review.body),
        tags = render_tags(review.tags, COMPACT_TAGS, ""),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{REVIEWS, STORIES};

    #[test]
    fn test_full_card() {
        let html = render_review_card(&REVIEWS[0], CardVariant::Featured, false);
        assert!(html.contains("review-card review-card--featured"));
        assert!(html.contains("TOP REVIEW"));
        assert!(html.contains(r#""My skin has never felt softer""#));
        assert!(html.contains("<dt>Using For</dt><dd>2 weeks</dd>"));
        assert!(html.contains("Verified Purchase"));
        assert!(html.contains("24 found helpful"));
    }

    #[test]
    fn test_compact_card_limits_tags() {
        let review = Review {
            tags: &["One", "Two", "Three"],
            ..REVIEWS[1].clone()
        };
        let html = render_review_card(&review, CardVariant::Default, true);
        assert!(html.contains("review-card--compact"));
        assert_eq!(html.matches(r#"class="review-tag""#).count(), COMPACT_TAGS);
        assert!(!html.contains("Three"));
    }

    #[test]
    fn test_story_card_shows_location_and_customer() {
        let html = render_story_card(&STORIES[1], CardVariant::Warm);
        assert!(html.contains("review-card--warm"));
        assert!(html.contains("Bangalore"));
        assert!(html.contains("<dt>Customer</dt><dd>Returning</dd>"));
        assert!(!html.contains("TOP REVIEW"));
    }
}

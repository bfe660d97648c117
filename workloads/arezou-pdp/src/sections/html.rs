//! Shared markup helpers.

use arezou_sdk::arezou_state::{PageAction, PageState};
pub use arezou_sdk::arezou_streaming::escape_html;

/// Escaped `href` of the state reached by `action`.
pub fn action_href(state: &PageState, action: PageAction) -> String {
    escape_html(&state.after(action).href())
}

/// A control rendered as a link to the successor state.
///
/// `label` is inserted as-is so callers can pass markup; escape text first.
pub fn action_link(state: &PageState, action: PageAction, class: &str, label: &str) -> String {
    format!(
        r#"<a class="{class}" href="{href}" data-action="{action}" rel="nofollow">{label}</a>"#,
        class = class,
        href = action_href(state, action),
        action = escape_html(&action.to_string()),
        label = label
    )
}

/// Join class names, skipping empty ones.
pub fn classes(names: &[&str]) -> String {
    names
        .iter()
        .filter(|n| !n.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// `name` when `on`, otherwise empty.
pub fn class_if(on: bool, name: &'static str) -> &'static str {
    if on {
        name
    } else {
        ""
    }
}

/// Five stars: full below the integer part, half up to the rating, empty after.
pub fn render_stars(rating: f32, show_value: bool) -> String {
    let whole = rating.floor();
    let stars: String = (0..5)
        .map(|i| {
            let i = i as f32;
            if i < whole {
                r#"<span class="star star-full">★</span>"#
            } else if i < rating {
                r#"<span class="star star-half">★</span>"#
            } else {
                r#"<span class="star star-empty">☆</span>"#
            }
        })
        .collect();

    let value = if show_value {
        format!(r#"<span class="rating-value">{:.1}</span>"#, rating)
    } else {
        String::new()
    };

    format!(
        r#"<span class="star-rating" aria-label="{:.1} out of 5">{}{}</span>"#,
        rating, stars, value
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use arezou_sdk::arezou_state::SizeOption;

    #[test]
    fn test_stars_full_half_empty() {
        let html = render_stars(4.5, false);
        assert_eq!(html.matches("star-full").count(), 4);
        assert_eq!(html.matches("star-half").count(), 1);
        assert_eq!(html.matches("star-empty").count(), 0);

        let html = render_stars(3.0, true);
        assert_eq!(html.matches("star-full").count(), 3);
        assert_eq!(html.matches("star-half").count(), 0);
        assert_eq!(html.matches("star-empty").count(), 2);
        assert!(html.contains(r#"<span class="rating-value">3.0</span>"#));
    }

    #[test]
    fn test_any_fraction_shows_half_star() {
        let html = render_stars(4.1, false);
        assert_eq!(html.matches("star-full").count(), 4);
        assert_eq!(html.matches("star-half").count(), 1);
    }

    #[test]
    fn test_action_link_points_to_next_state() {
        let state = PageState::default();
        let link = action_link(
            &state,
            PageAction::SelectSize(SizeOption::Ml50),
            "size-option",
            "50ml",
        );
        assert!(link.contains(r#"href="?size=50ml""#));
        assert!(link.contains(r#"data-action="size:50ml""#));
    }

    #[test]
    fn test_href_escapes_ampersand() {
        let state = PageState::default().after(PageAction::ToggleWishlist);
        let href = action_href(&state, PageAction::ToggleZoom);
        assert_eq!(href, "?wish=1&amp;zoom=1");
    }

    #[test]
    fn test_classes() {
        assert_eq!(classes(&["a", "", "b"]), "a b");
        assert_eq!(class_if(false, "is-open"), "");
    }
}

//! Page assembly: routes, shell and the streaming order of sections.

use arezou_sdk::arezou_core::{
    PageError, PageManifest, QueryParams, RenderConfig, RouteConfig,
};
use arezou_sdk::arezou_observability::{MetricsCollector, StructuredLogger};
use arezou_sdk::arezou_state::{PageAction, PageState, StateError};
use arezou_sdk::arezou_streaming::{HeadContent, Shell, StreamingSink};
use futures::Sink;

use crate::data::PRODUCT;
use crate::sections::*;
use crate::styles::PDP_STYLES;

/// Name used in logs, metrics and the manifest.
pub const PAGE_NAME: &str = "arezou-pdp";

/// Path of the product page.
pub const PRODUCT_PATH: &str = "/products/radiance-glow-face-oil";

/// Query parameter carrying a single action to apply before rendering.
pub const ACTION_PARAM: &str = "action";

/// Routes served by this page.
pub fn manifest() -> PageManifest {
    PageManifest::new(PAGE_NAME, env!("CARGO_PKG_VERSION"))
        .with_route(RouteConfig::new("/", "pdp"))
        .with_route(RouteConfig::new(PRODUCT_PATH, "pdp"))
}

/// Sections streamed after the shell, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSection {
    Gallery,
    Details,
    Ingredients,
    Reviews,
    TrustJourney,
    Ritual,
    Recommendations,
    Insights,
}

impl PageSection {
    pub const ORDER: &'static [PageSection] = &[
        PageSection::Gallery,
        PageSection::Details,
        PageSection::Ingredients,
        PageSection::Reviews,
        PageSection::TrustJourney,
        PageSection::Ritual,
        PageSection::Recommendations,
        PageSection::Insights,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PageSection::Gallery => "gallery",
            PageSection::Details => "details",
            PageSection::Ingredients => "ingredients",
            PageSection::Reviews => "reviews",
            PageSection::TrustJourney => "trust-journey",
            PageSection::Ritual => "ritual",
            PageSection::Recommendations => "recommendations",
            PageSection::Insights => "insights",
        }
    }

    pub fn render(&self, state: &PageState) -> String {
        match self {
            PageSection::Gallery => render_gallery(state, &PRODUCT),
            PageSection::Details => render_details(state, &PRODUCT),
            PageSection::Ingredients => render_ingredients(),
            PageSection::Reviews => render_reviews(state),
            PageSection::TrustJourney => render_trust_journey(state),
            PageSection::Ritual => render_ritual(),
            PageSection::Recommendations => render_recommendations(),
            PageSection::Insights => render_insights(state),
        }
    }
}

/// Sections that produce markup for this state.
///
/// The insights panel is left out entirely while closed.
pub fn visible_sections(state: &PageState) -> Vec<PageSection> {
    PageSection::ORDER
        .iter()
        .copied()
        .filter(|s| *s != PageSection::Insights || state.insights.is_open())
        .collect()
}

/// State resolved from a request's query string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedState {
    pub state: PageState,
    /// Query fields that were ignored, plus an unparseable action.
    pub rejected: Vec<StateError>,
    /// The action applied on top of the decoded state, if any.
    pub applied: Option<PageAction>,
}

/// Decode the state carried by the query and apply its `action` parameter.
pub fn resolve_state(params: &QueryParams) -> ResolvedState {
    let decoded = PageState::from_query(params);
    let mut resolved = ResolvedState {
        state: decoded.state,
        rejected: decoded.rejected,
        applied: None,
    };

    if let Some(raw) = params.get(ACTION_PARAM) {
        match raw.parse::<PageAction>() {
            Ok(action) => {
                resolved.state.apply(action);
                resolved.applied = Some(action);
            }
            Err(e) => resolved.rejected.push(e),
        }
    }

    resolved
}

/// Build the page shell: head, chrome and the opening of the main grid.
pub fn build_shell(config: &RenderConfig) -> Shell {
    Shell::new(
        HeadContent::new(&config.title)
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_meta("description", PRODUCT.tagline)
            .with_canonical(&config.canonical_path)
            .with_style(PDP_STYLES),
    )
    .with_body_start(format!(
        "<body>\n{}\n{}\n{}\n<main class=\"pdp\">\n",
        render_notification(),
        render_header(),
        render_breadcrumb()
    ))
    .with_body_end(format!("</main>\n{}\n</body>\n</html>", render_footer()))
}

/// Stream the full page for `state` into `sink`.
///
/// The shell goes first, then each visible section, then the footer.
pub async fn stream_page<S, E>(
    state: &PageState,
    config: &RenderConfig,
    sink: &mut StreamingSink<S, E>,
    logger: &StructuredLogger,
    metrics: &mut MetricsCollector,
) -> Result<(), PageError>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: std::fmt::Display,
{
    let shell = build_shell(config);

    let opening = shell.render_opening();
    sink.send_shell(&opening).await?;
    metrics.record_shell_sent(opening.len());
    logger.debug("Shell sent");

    for section in visible_sections(state) {
        let name = section.name();
        metrics.record_section_start(name);
        let html = section.render(state);
        sink.send_section(name, &html).await?;
        metrics.record_section_sent(name, html.len());
        logger
            .debug_builder("Section sent")
            .field("section", name)
            .field_i64("bytes", html.len() as i64)
            .emit();
    }

    sink.finish(&shell.render_closing()).await?;
    logger
        .info_builder("Page streamed")
        .field("state", state.to_query())
        .field_i64("sections", sink.sections_sent().len() as i64)
        .field_i64("bytes", sink.bytes_sent() as i64)
        .emit();

    Ok(())
}

/// Body of the 404 page.
pub fn render_not_found(path: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Page not found | Are-zōu</title>
<style>{styles}</style>
</head>
<body>
{header}
<main class="not-found">
    <h1>Page not found</h1>
    <p>Nothing lives at <code>{path}</code>.</p>
    <a class="btn btn-primary" href="{product}">Shop Radiance &amp; Glow Face Oil</a>
</main>
{footer}
</body>
</html>"#,
        styles = PDP_STYLES,
        header = render_header(),
        path = escape_html(path),
        product = PRODUCT_PATH,
        footer = render_footer(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use arezou_sdk::arezou_core::parse_query;
    use arezou_sdk::arezou_state::{InsightId, SizeOption};

    #[test]
    fn test_manifest_routes() {
        let manifest = manifest();
        assert!(manifest.route_for("/").is_some());
        assert!(manifest.route_for(PRODUCT_PATH).is_some());
        assert!(manifest.route_for("/products/radiance-glow-face-oil/").is_some());
        assert!(manifest.route_for("/cart").is_none());
    }

    #[test]
    fn test_insights_section_only_when_open() {
        let mut state = PageState::default();
        let names: Vec<_> = visible_sections(&state).iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec![
                "gallery",
                "details",
                "ingredients",
                "reviews",
                "trust-journey",
                "ritual",
                "recommendations"
            ]
        );

        state.apply(PageAction::OpenInsights);
        assert_eq!(visible_sections(&state).last(), Some(&PageSection::Insights));
    }

    #[test]
    fn test_resolve_applies_action() {
        let resolved = resolve_state(&parse_query("size=50ml&action=qty%3Ainc"));
        assert_eq!(resolved.state.options.size, SizeOption::Ml50);
        assert_eq!(resolved.state.options.quantity.get(), 2);
        assert_eq!(resolved.applied, Some(PageAction::IncrementQuantity));
        assert!(resolved.rejected.is_empty());
    }

    #[test]
    fn test_resolve_reports_bad_action_and_fields() {
        let resolved = resolve_state(&parse_query("qty=0&action=dance"));
        assert_eq!(resolved.state, PageState::default());
        let fields: Vec<_> = resolved.rejected.iter().map(|e| e.field()).collect();
        assert_eq!(fields, vec!["qty", "action"]);
        assert_eq!(resolved.applied, None);
    }

    #[test]
    fn test_resolve_card_action() {
        let resolved = resolve_state(&parse_query("insights=1&action=insight:recent"));
        assert!(resolved.state.insights.cards.is_expanded(InsightId::Recent));
    }

    #[test]
    fn test_shell_carries_chrome() {
        let shell = build_shell(&RenderConfig::default());
        let opening = shell.render_opening();
        assert!(opening.contains("<title>Radiance &amp; Glow Face Oil | Are-zōu</title>"));
        assert!(opening.contains(r#"rel="canonical" href="/products/radiance-glow-face-oil""#));
        assert!(opening.contains("notification-bar"));
        assert!(opening.ends_with("<main class=\"pdp\">\n"));

        let closing = shell.render_closing();
        assert!(closing.starts_with("</main>"));
        assert!(closing.contains("site-footer"));
        assert!(closing.ends_with("</html>"));
    }

    #[test]
    fn test_not_found_escapes_path() {
        let html = render_not_found("/<script>");
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(PRODUCT_PATH));
    }
}

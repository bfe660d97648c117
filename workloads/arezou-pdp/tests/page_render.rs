//! End-to-end rendering of the product page through the streaming sink.

use std::convert::Infallible;

use arezou_pdp::{render_not_found, resolve_state, stream_page, PAGE_NAME};
use arezou_sdk::prelude::*;
use futures::executor::block_on;

struct Rendered {
    chunks: Vec<String>,
    sections: Vec<String>,
    metrics: RequestMetrics,
}

impl Rendered {
    fn html(&self) -> String {
        self.chunks.concat()
    }
}

fn render(query: &str) -> Rendered {
    let state = resolve_state(&parse_query(query)).state;
    let request_id = RequestId::from_string("req-test");
    let logger = StructuredLogger::new(request_id.clone())
        .with_page(PAGE_NAME)
        .with_target(LogTarget::Off);
    let mut metrics = MetricsCollector::new(request_id);
    let mut sink: StreamingSink<Vec<Vec<u8>>, Infallible> =
        StreamingSink::new(Vec::new(), TimingContext::new());

    block_on(stream_page(
        &state,
        &RenderConfig::default(),
        &mut sink,
        &logger,
        &mut metrics,
    ))
    .unwrap();

    let sections = sink.sections_sent().to_vec();
    let chunks = sink
        .into_inner()
        .into_iter()
        .map(|bytes| String::from_utf8(bytes).unwrap())
        .collect();

    Rendered {
        chunks,
        sections,
        metrics: metrics.finalize(Some(200)),
    }
}

#[test]
fn test_shell_streams_before_sections() {
    let page = render("");
    let first = &page.chunks[0];
    assert!(first.starts_with("<!DOCTYPE html>"));
    assert!(first.contains("<style>"));
    assert!(first.contains("site-header"));
    assert!(!first.contains("data-section="));

    let last = page.chunks.last().unwrap();
    assert!(last.contains("site-footer"));
    assert!(last.ends_with("</html>"));
}

#[test]
fn test_default_section_order() {
    let page = render("");
    assert_eq!(
        page.sections,
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
    assert_eq!(page.chunks.len(), page.sections.len() + 2);
    assert_eq!(page.metrics.section_order(), page.sections);

    let html = page.html();
    let mut last = 0;
    for name in &page.sections {
        let pos = html.find(&format!(r#"data-section="{}""#, name)).unwrap();
        assert!(pos > last, "{} out of order", name);
        last = pos;
    }
}

#[test]
fn test_insights_panel_only_when_open() {
    let closed = render("");
    assert!(!closed.html().contains(r#"class="insights-overlay"#));

    let open = render("insights=1");
    assert_eq!(open.sections.last().map(String::as_str), Some("insights"));
    assert!(open.html().contains(r#"class="insights-overlay is-open""#));

    let toggled_twice = render("insights=1&action=insights:toggle");
    assert!(!toggled_twice.html().contains(r#"class="insights-overlay"#));
}

#[test]
fn test_actions_change_the_page() {
    let page = render("action=size:50ml");
    let html = page.html();
    assert!(html.contains(r#"class="size-option is-selected" href="?size=50ml""#));

    let page = render("qty=2&action=qty:inc");
    assert!(page.html().contains(r#"<span class="qty-value">3</span>"#));

    let page = render("action=wishlist");
    assert!(page.html().contains("wishlist-toggle is-wishlisted"));

    let page = render("action=zoom");
    assert!(page.html().contains("gallery-frame is-zoomed"));
}

#[test]
fn test_view_mode_keeps_review_set() {
    let grid = render("filter=5-star");
    let list = render("filter=5-star&view=list");

    let count = |html: &str| html.matches(r#"<article class="review-card"#).count();
    assert!(grid.html().contains(r#"<div class="reviews-grid">"#));
    assert!(list.html().contains(r#"<div class="reviews-list">"#));
    assert_eq!(count(&grid.html()), 6);
    assert_eq!(count(&list.html()), 4);
    assert!(grid.html().contains("Sneha R."));
    assert!(grid.html().contains(r#"class="filter-pill is-active" href="?filter=5-star""#));
}

#[test]
fn test_malformed_query_still_renders() {
    let page = render("qty=-4&size=100ml&view=mosaic");
    assert!(page.html().contains(r#"<span class="qty-value">1</span>"#));
    assert_eq!(page.sections.len(), 7);
}

#[test]
fn test_bytes_add_up() {
    let page = render("all=1");
    let total: usize = page.chunks.iter().map(String::len).sum();
    let closing = page.chunks.last().unwrap().len();
    assert_eq!(page.metrics.total_bytes + closing, total);
}

#[test]
fn test_not_found_page() {
    let html = render_not_found("/cart");
    assert!(html.contains("Page not found"));
    assert!(html.contains("<code>/cart</code>"));
    assert!(!html.contains("data-section="));
}

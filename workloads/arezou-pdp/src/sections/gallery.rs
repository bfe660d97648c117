//! Product gallery section.

use arezou_sdk::arezou_state::{PageAction, PageState};

use crate::data::Product;

use super::html::{action_link, class_if, classes, escape_html, render_stars};

/// Render the gallery: main image, zoom control, trust overlay and the
/// review shortcut that opens the insights panel.
pub fn render_gallery(state: &PageState, product: &Product) -> String {
    let zoomed = state.gallery.zoomed;
    let zoom_label = if zoomed { "Zoom out" } else { "Zoom in" };

    format!(
        r#"<section class="product-gallery" data-section="gallery">
    <figure class="{figure_class}">
        <img src="{image}" alt="{alt}" class="product-image">
        <div class="trust-overlay">
            {stars}
            <p>{customers} Happy Customers</p>
        </div>
        {zoom}
        {reviews}
    </figure>
</section>"#,
        figure_class = classes(&["gallery-frame", class_if(zoomed, "is-zoomed")]),
        image = escape_html(product.image),
        alt = escape_html(product.image_alt),
        stars = render_stars(product.rating, false),
        customers = escape_html(product.happy_customers),
        zoom = action_link(state, PageAction::ToggleZoom, "zoom-toggle", zoom_label),
        reviews = action_link(
            state,
            PageAction::OpenInsights,
            "gallery-reviews-link",
            &format!("View {} Reviews →", product.review_count)
        ),
    )
}

//! "You May Also Like" section.

use crate::data::{format_rupees, RecommendedProduct, RECOMMENDATIONS};

use super::html::{escape_html, render_stars};

/// Render the recommendations section.
pub fn render_recommendations() -> String {
    let items: String = RECOMMENDATIONS
        .iter()
        .map(render_recommendation_card)
        .collect();

    format!(
        r#"<section class="product-recommendations" data-section="recommendations">
    <h2>You May Also Like</h2>
    <div class="recommendations-grid">
        {items}
    </div>
</section>"#,
        items = items
    )
}

fn render_recommendation_card(product: &RecommendedProduct) -> String {
    format!(
        r#"<article class="recommendation-card">
        <div class="recommendation-media">
            <span class="discount-badge">{discount}% OFF</span>
            <img src="{image}" alt="{name}" class="recommendation-image">
        </div>
        <h3 class="recommendation-name">{name}</h3>
        <p class="recommendation-rating">{stars} <span>({reviews})</span></p>
        <p class="recommendation-price">
            <span class="price-current">{price}</span>
            <span class="price-original">{original}</span>
        </p>
    </article>"#,
        discount = product.discount_percent,
        image = escape_html(product.image),
        name = escape_html(product.name),
        stars = render_stars(product.rating, true),
        reviews = product.review_count,
        price = format_rupees(product.price),
        original = format_rupees(product.original_price),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendations_render_all_products() {
        let html = render_recommendations();
        assert_eq!(html.matches("recommendation-card").count(), 3);
        assert!(html.contains("₹1,099"));
        assert!(html.contains("₹599"));
        assert!(html.contains("25% OFF"));
    }
}

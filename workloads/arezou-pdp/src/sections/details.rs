//! Product details column: title, price, options, trust badges and the
//! detail accordion.

use arezou_sdk::arezou_state::{Choice, PageAction, PageState};

use crate::data::{format_rupees, DetailSection, Product};

use super::html::{action_link, class_if, classes, escape_html, render_stars};

/// Render the product details section.
pub fn render_details(state: &PageState, product: &Product) -> String {
    format!(
        r#"<section class="product-details" data-section="details">
    <span class="product-badge">✨ {badge}</span>
    <h1 class="product-name">{name}</h1>
    <p class="product-tagline">{tagline}</p>
    <div class="product-rating">
        {stars}
        {reviews_link}
    </div>
    {price}
    {sizes}
    {quantity}
    <div class="product-cta">
        <button class="btn btn-primary add-to-cart" type="button">Add to Cart</button>
        {wishlist}
    </div>
    {badges}
    {payments}
    {accordion}
</section>"#,
        badge = escape_html(product.badge),
        name = escape_html(product.name),
        tagline = escape_html(product.tagline),
        stars = render_stars(product.rating, true),
        reviews_link = action_link(
            state,
            PageAction::OpenInsights,
            "rating-reviews-link",
            &format!("Based on {} Reviews", product.review_count)
        ),
        price = render_price(product),
        sizes = render_sizes(state, product),
        quantity = render_quantity(state),
        wishlist = render_wishlist(state),
        badges = render_trust_badges(product),
        payments = render_payment_methods(product),
        accordion = render_accordion(state, product),
    )
}

fn render_price(product: &Product) -> String {
    let discount = product.discount_percent();
    let savings = if discount > 0 {
        format!(
            r#"<span class="price-original">{}</span>
        <span class="price-discount">{}% OFF</span>"#,
            format_rupees(product.original_price),
            discount
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class="product-price">
        <span class="price-current">{}</span>
        {}
    </div>"#,
        format_rupees(product.price),
        savings
    )
}

fn render_sizes(state: &PageState, product: &Product) -> String {
    let selected = state.options.size;
    let buttons: String = product
        .sizes
        .iter()
        .map(|size| {
            let class = classes(&["size-option", class_if(*size == selected, "is-selected")]);
            action_link(
                state,
                PageAction::SelectSize(*size),
                &class,
                &escape_html(size.label()),
            )
        })
        .collect();

    format!(
        r#"<div class="option-group size-selector">
        <p class="option-label">SIZE: {}</p>
        <div class="size-options">{}</div>
    </div>"#,
        escape_html(selected.label()),
        buttons
    )
}

fn render_quantity(state: &PageState) -> String {
    let quantity = state.options.quantity;
    let at_min = quantity.get() <= 1;
    let dec_class = classes(&["qty-step qty-dec", class_if(at_min, "is-disabled")]);

    format!(
        r#"<div class="option-group quantity-stepper">
        <p class="option-label">QUANTITY</p>
        <div class="qty-controls">
            {dec}
            <span class="qty-value">{value}</span>
            {inc}
        </div>
    </div>"#,
        dec = action_link(state, PageAction::DecrementQuantity, &dec_class, "−"),
        value = quantity,
        inc = action_link(state, PageAction::IncrementQuantity, "qty-step qty-inc", "+"),
    )
}

fn render_wishlist(state: &PageState) -> String {
    let on = state.options.wishlisted;
    let class = classes(&["wishlist-toggle", class_if(on, "is-wishlisted")]);
    let label = if on {
        "♥ Wishlisted"
    } else {
        "♡ Add to Wishlist"
    };
    action_link(state, PageAction::ToggleWishlist, &class, label)
}

fn render_trust_badges(product: &Product) -> String {
    let badges: String = product
        .trust_badges
        .iter()
        .map(|b| format!(r#"<li class="trust-badge">{}</li>"#, escape_html(b)))
        .collect();
    format!(r#"<ul class="trust-badges">{}</ul>"#, badges)
}

fn render_payment_methods(product: &Product) -> String {
    let methods: String = product
        .payment_methods
        .iter()
        .map(|m| format!(r#"<li class="payment-method">{}</li>"#, escape_html(m)))
        .collect();
    format!(
        r#"<div class="payment-methods">
        <p class="payment-heading">We Accept</p>
        <ul>{}</ul>
    </div>"#,
        methods
    )
}

fn render_accordion(state: &PageState, product: &Product) -> String {
    let items: String = product
        .sections
        .iter()
        .map(|section| render_accordion_item(state, section))
        .collect();
    format!(r#"<div class="detail-accordion">{}</div>"#, items)
}

fn render_accordion_item(state: &PageState, section: &DetailSection) -> String {
    let expanded = state.options.sections.is_expanded(section.id);
    let header = action_link(
        state,
        PageAction::ToggleSection(section.id),
        "accordion-toggle",
        &format!(
            r#"<span class="accordion-title">▸ {}</span><span class="accordion-icon">{}</span>"#,
            escape_html(section.title()),
            if expanded { "−" } else { "+" }
        ),
    );

    let body = if expanded {
        let content = if section.lines.len() > 1 {
            let items: String = section
                .lines
                .iter()
                .map(|line| format!("<li>{}</li>", escape_html(line)))
                .collect();
            format!("<ul>{}</ul>", items)
        } else {
            let text: String = section.lines.iter().map(|l| escape_html(l)).collect();
            format!("<p>{}</p>", text)
        };
        format!(r#"<div class="accordion-body">{}</div>"#, content)
    } else {
        String::new()
    };

    format!(
        r#"<div class="{class}" id="section-{id}">{header}{body}</div>"#,
        class = classes(&["accordion-item", class_if(expanded, "is-expanded")]),
        id = section.id.as_str(),
        header = header,
        body = body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PRODUCT;
    use arezou_sdk::arezou_state::{AccordionSection, SizeOption};

    #[test]
    fn test_default_details() {
        let html = render_details(&PageState::default(), &PRODUCT);
        assert!(html.contains("SIZE: 30ml"));
        assert!(html.contains(r#"<span class="qty-value">1</span>"#));
        assert!(html.contains("qty-dec is-disabled"));
        assert!(html.contains("₹1,299"));
        assert!(html.contains("₹1,599"));
        assert!(html.contains("Based on 198 Reviews"));
        assert!(html.contains(r#"accordion-item is-expanded" id="section-features""#));
        assert!(html.contains("Cold-pressed Bergamot Oil"));
        assert!(!html.contains("Tocopherol"));
    }

    #[test]
    fn test_size_links() {
        let html = render_details(&PageState::default(), &PRODUCT);
        assert!(html.contains(r#"class="size-option is-selected" href="?""#));
        assert!(html.contains(r#"class="size-option" href="?size=50ml""#));

        let state = PageState::default().after(PageAction::SelectSize(SizeOption::Ml50));
        let html = render_details(&state, &PRODUCT);
        assert!(html.contains("SIZE: 50ml"));
    }

    #[test]
    fn test_quantity_links() {
        let state = PageState::default().after(PageAction::IncrementQuantity);
        let html = render_details(&state, &PRODUCT);
        assert!(html.contains(r#"<span class="qty-value">2</span>"#));
        assert!(html.contains(r#"href="?qty=3""#));
        assert!(!html.contains("is-disabled"));
    }

    #[test]
    fn test_accordion_follows_state() {
        let state = PageState::default().after(PageAction::ToggleSection(AccordionSection::Ingredients));
        let html = render_details(&state, &PRODUCT);
        assert!(html.contains("Tocopherol"));
        assert!(!html.contains("Cold-pressed Bergamot Oil"));
        // collapsing the open section
        assert!(html.contains(r#"href="?open=none""#));
    }

    #[test]
    fn test_wishlist_toggle() {
        let state = PageState::default().after(PageAction::ToggleWishlist);
        let html = render_details(&state, &PRODUCT);
        assert!(html.contains("wishlist-toggle is-wishlisted"));
        assert!(html.contains("♥ Wishlisted"));
    }
}

//! Inline stylesheet for the product page.

pub const PDP_STYLES: &str = r#"
:root { --sage: #5f7f6a; --sage-light: #e6efe8; --cream: #faf6ef; --rose: #f6e7e4; --gold: #c9a24a; --charcoal: #2f2f2f; --muted: #7a7a7a; --border: #e6e1d8; }
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: var(--cream); color: var(--charcoal); }
a { color: inherit; }
h1, h2, h3, h4 { font-family: Georgia, 'Times New Roman', serif; }
.notification-bar { background: var(--sage); color: white; text-align: center; padding: 0.6rem; font-size: 0.85rem; }
.site-header { display: flex; align-items: center; padding: 1rem 2rem; border-bottom: 1px solid var(--border); }
.header-spacer, .header-actions { flex: 1; }
.header-actions { display: flex; justify-content: flex-end; gap: 1rem; font-size: 0.85rem; }
.header-actions a { text-decoration: none; }
.brand { text-align: center; text-decoration: none; }
.brand-name { display: block; font-family: Georgia, serif; font-size: 1.8rem; letter-spacing: 0.05em; }
.brand-byline { display: block; font-size: 0.6rem; letter-spacing: 0.3em; text-transform: uppercase; color: var(--muted); }
.cart-count { background: var(--sage); color: white; border-radius: 999px; padding: 0 0.35rem; font-size: 0.7rem; }
.breadcrumb { max-width: 1200px; margin: 0 auto; padding: 0.75rem 2rem; font-size: 0.75rem; color: var(--muted); }
.breadcrumb ol { display: flex; gap: 0.4rem; list-style: none; margin: 0; padding: 0; }
.breadcrumb a { text-decoration: none; }
.pdp { max-width: 1200px; margin: 0 auto; padding: 1rem 2rem; display: grid; grid-template-columns: 1fr 1fr; gap: 3rem; }
.pdp > section { grid-column: 1 / -1; }
.pdp > .product-gallery, .pdp > .product-details { grid-column: auto; }

/* Gallery */
.gallery-frame { position: relative; margin: 0; aspect-ratio: 1; border-radius: 1rem; overflow: hidden; background: linear-gradient(135deg, var(--cream), #efe9df); transition: transform 0.5s; }
.gallery-frame.is-zoomed { transform: scale(1.1); z-index: 20; }
.product-image { width: 100%; height: 100%; object-fit: contain; padding: 2rem; }
.trust-overlay { position: absolute; top: 1rem; left: 1rem; background: var(--sage); color: white; padding: 0.5rem 1rem; border-radius: 0.75rem; font-size: 0.75rem; }
.trust-overlay p { margin: 0.25rem 0 0; }
.zoom-toggle { position: absolute; bottom: 1rem; left: 1rem; background: white; padding: 0.4rem 0.8rem; border-radius: 999px; font-size: 0.75rem; text-decoration: none; }
.gallery-reviews-link { position: absolute; bottom: 1rem; right: 1rem; background: white; padding: 0.5rem 1rem; border-radius: 0.75rem; font-size: 0.75rem; text-decoration: none; }

/* Details */
.product-badge { display: inline-block; background: var(--sage-light); color: var(--sage); padding: 0.25rem 0.75rem; border-radius: 999px; font-size: 0.75rem; }
.product-name { font-size: 2rem; margin: 0.75rem 0 0.25rem; }
.product-tagline { color: var(--muted); margin: 0; }
.product-rating { display: flex; align-items: center; gap: 0.75rem; margin-top: 0.75rem; font-size: 0.8rem; }
.rating-reviews-link { color: var(--sage); }
.product-price { margin: 1.25rem 0; display: flex; align-items: baseline; gap: 0.75rem; }
.price-current { font-size: 1.6rem; font-weight: 600; }
.price-original { text-decoration: line-through; color: var(--muted); }
.price-discount { background: var(--sage); color: white; padding: 0.15rem 0.5rem; border-radius: 4px; font-size: 0.75rem; }
.option-group { margin: 1.25rem 0; }
.option-label { font-size: 0.85rem; font-weight: 600; margin: 0 0 0.5rem; }
.size-options, .qty-controls { display: flex; gap: 0.5rem; align-items: center; }
.size-option, .view-toggle { padding: 0.5rem 1rem; border: 1px solid var(--border); border-radius: 0.5rem; text-decoration: none; color: var(--muted); }
.size-option.is-selected, .view-toggle.is-active { border-color: var(--sage); color: var(--sage); font-weight: 600; }
.qty-controls { border: 1px solid var(--border); border-radius: 0.5rem; width: fit-content; }
.qty-step { padding: 0.5rem 1rem; text-decoration: none; }
.qty-step.is-disabled { color: var(--border); pointer-events: none; }
.product-cta { display: flex; gap: 0.75rem; }
.btn { display: inline-block; padding: 0.9rem 1.5rem; border-radius: 0.5rem; text-decoration: none; font-size: 0.95rem; cursor: pointer; }
.btn-primary { background: var(--sage); color: white; border: none; }
.btn-outline { border: 1px solid var(--border); background: white; }
.add-to-cart { flex: 1; }
.wishlist-toggle { padding: 0.9rem; border: 1px solid var(--border); border-radius: 0.5rem; text-decoration: none; }
.wishlist-toggle.is-wishlisted { background: var(--rose); color: #b5566a; border-color: #e2b3bb; }
.trust-badges, .payment-methods ul { display: flex; flex-wrap: wrap; gap: 1rem; list-style: none; padding: 1rem 0; margin: 1rem 0; border-top: 1px solid var(--border); border-bottom: 1px solid var(--border); font-size: 0.75rem; color: var(--muted); }
.payment-methods { background: white; border: 1px solid var(--border); border-radius: 0.75rem; padding: 1rem; text-align: center; }
.payment-heading { font-family: Georgia, serif; font-size: 1.1rem; margin: 0; }
.payment-methods ul { justify-content: center; border: none; }
.payment-method { border: 1px solid var(--border); border-radius: 0.4rem; padding: 0.4rem 0.75rem; font-weight: 600; color: var(--charcoal); }
.accordion-item { border-bottom: 1px solid var(--border); }
.accordion-toggle { display: flex; justify-content: space-between; padding: 1rem 0; text-decoration: none; font-size: 0.9rem; font-weight: 500; }
.accordion-body { padding: 0 0 1rem 1.25rem; font-size: 0.85rem; color: var(--muted); }

/* Stars */
.star-rating { display: inline-flex; align-items: center; gap: 0.1rem; }
.star { color: var(--gold); }
.star-half { opacity: 0.5; }
.star-empty { color: var(--border); }
.rating-value { margin-left: 0.35rem; font-weight: 600; }

/* Reviews */
.section-header { text-align: center; margin: 3rem 0 2rem; }
.section-header h2 { font-size: 2.2rem; margin: 0.5rem 0; }
.eyebrow { font-size: 0.8rem; letter-spacing: 0.2em; text-transform: uppercase; color: var(--sage); }
.insights-link { color: var(--sage); font-size: 0.85rem; }
.stats-bar, .trust-summary { display: flex; flex-wrap: wrap; justify-content: center; gap: 2rem; padding: 1.5rem; background: white; border-radius: 1rem; border: 1px solid var(--border); margin-bottom: 2rem; }
.stat { display: flex; flex-direction: column; align-items: center; gap: 0.2rem; }
.stat-value { font-size: 1.4rem; font-weight: 700; color: var(--sage); }
.stat-label { font-size: 0.75rem; color: var(--muted); }
.trust-stats { display: flex; gap: 1.5rem; }
.reviews-controls { display: flex; justify-content: space-between; flex-wrap: wrap; gap: 1rem; margin-bottom: 1.5rem; }
.filter-pills, .view-toggles { display: flex; gap: 0.5rem; flex-wrap: wrap; align-items: center; }
.filter-pill { padding: 0.35rem 0.8rem; border-radius: 999px; background: #efeae2; color: var(--muted); font-size: 0.75rem; text-decoration: none; }
.filter-pill.is-active { background: var(--sage); color: white; }
.reviews-grid, .story-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 1rem; }
.reviews-list { display: flex; flex-direction: column; gap: 1rem; max-width: 760px; margin: 0 auto; }
.reviews-actions { display: flex; justify-content: center; margin: 2rem 0; }
.review-card { position: relative; background: white; border: 1px solid var(--border); border-radius: 1rem; padding: 1.25rem; }
.review-card--featured { border: 2px solid var(--sage); background: linear-gradient(135deg, #f1f6f2, var(--cream)); }
.review-card--warm { background: linear-gradient(135deg, #fbf1df, var(--rose)); max-width: 760px; }
.review-card--compact { display: flex; gap: 1rem; align-items: flex-start; }
.top-review-badge { position: absolute; top: 0; right: 0; background: var(--sage); color: white; font-size: 0.6rem; font-weight: 600; padding: 0.25rem 0.75rem; border-bottom-left-radius: 0.75rem; }
.review-card-header { display: flex; justify-content: space-between; gap: 0.75rem; }
.review-headline { font-style: italic; margin: 0 0 0.5rem; }
.review-body { font-size: 0.85rem; color: var(--muted); line-height: 1.6; }
.review-author { display: flex; gap: 0.75rem; align-items: center; }
.author-name { margin: 0; font-weight: 600; font-size: 0.85rem; }
.review-date { margin: 0; font-size: 0.75rem; color: var(--muted); }
.avatar { flex-shrink: 0; width: 2.5rem; height: 2.5rem; border-radius: 50%; background: var(--sage-light); color: var(--sage); display: inline-flex; align-items: center; justify-content: center; font-family: Georgia, serif; }
.review-meta { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; margin: 1rem 0; }
.meta-box { background: var(--sage-light); border-radius: 0.75rem; padding: 0.6rem; text-align: center; }
.meta-box dt { font-size: 0.6rem; text-transform: uppercase; letter-spacing: 0.1em; color: var(--sage); }
.meta-box dd { margin: 0; font-weight: 600; font-size: 0.85rem; }
.review-tags { display: flex; flex-wrap: wrap; gap: 0.4rem; list-style: none; padding: 0; margin: 0.5rem 0; }
.review-tag { background: var(--charcoal); color: white; font-size: 0.7rem; padding: 0.2rem 0.6rem; border-radius: 999px; }
.review-card--compact .review-tag { background: #efeae2; color: var(--muted); }
.review-card-footer { display: flex; justify-content: space-between; border-top: 1px solid var(--border); padding-top: 0.75rem; font-size: 0.7rem; color: var(--muted); }
.verified-badge { color: var(--sage); font-weight: 600; }
.story-featured { margin-bottom: 2rem; }

/* Ingredients */
.ingredients { padding: 4rem 0; }
.ingredient-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1.5rem; }
.ingredient-card { background: white; border: 1px solid var(--border); border-radius: 1rem; padding: 1.5rem; }
.ingredient-icon { display: inline-flex; width: 3rem; height: 3rem; border-radius: 0.75rem; align-items: center; justify-content: center; margin-bottom: 1rem; background: var(--sage-light); }
.ingredient-card--cold-pressed .ingredient-icon { background: var(--rose); }
.ingredient-kind { display: block; font-size: 0.65rem; letter-spacing: 0.1em; text-transform: uppercase; color: var(--muted); }
.ingredient-note { text-align: center; font-size: 0.75rem; color: var(--muted); max-width: 36rem; margin: 2rem auto 0; }
.ingredient-voice { max-width: 40rem; margin: 3rem auto 0; background: #fbf4ea; border-radius: 1.5rem; padding: 2rem; }
.skin-chip { font-size: 0.7rem; background: var(--rose); padding: 0.1rem 0.5rem; border-radius: 999px; }

/* Ritual */
.ritual { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; padding: 4rem 0; }
.ritual ol { list-style: none; padding: 0; }
.ritual-step { display: flex; gap: 1.25rem; margin-bottom: 1.5rem; }
.step-number { width: 2.5rem; height: 2.5rem; border-radius: 50%; background: var(--sage); color: white; display: inline-flex; align-items: center; justify-content: center; flex-shrink: 0; }
.step-time { font-size: 0.7rem; background: var(--rose); padding: 0.1rem 0.5rem; border-radius: 999px; font-family: sans-serif; }
.pro-tips { background: var(--sage-light); border-radius: 1rem; padding: 1.5rem; }
.trust-moment { background: linear-gradient(135deg, #fbf1df, var(--rose)); border-radius: 1.5rem; padding: 2rem; margin: 0; }
.trust-moment p { font-family: Georgia, serif; font-size: 1.3rem; font-style: italic; }
.trust-highlight { background: var(--sage-light); color: var(--sage); padding: 0.25rem 0.75rem; border-radius: 999px; font-size: 0.8rem; }
.review-whisper { background: white; border: 1px solid var(--border); border-radius: 1rem; padding: 1.25rem; margin: 1.5rem 0 0; font-size: 0.85rem; color: var(--muted); }

/* Recommendations */
.product-recommendations { border-top: 1px solid var(--border); padding: 3rem 0; }
.recommendations-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.recommendation-media { position: relative; aspect-ratio: 1; border-radius: 0.75rem; overflow: hidden; background: #efeae2; }
.recommendation-image { width: 100%; height: 100%; object-fit: cover; }
.discount-badge { position: absolute; top: 0.5rem; left: 0.5rem; background: var(--sage); color: white; font-size: 0.65rem; padding: 0.1rem 0.5rem; border-radius: 4px; }
.recommendation-name { font-size: 0.9rem; font-family: sans-serif; font-weight: 400; }
.recommendation-rating, .recommendation-price { margin: 0.25rem 0; font-size: 0.8rem; }

/* Insights panel */
.insights-overlay { position: fixed; inset: 0; z-index: 40; }
.insights-backdrop { position: absolute; inset: 0; background: rgba(47, 47, 47, 0.2); backdrop-filter: blur(4px); }
.insights-panel { position: absolute; top: 0; right: 0; height: 100%; width: 100%; max-width: 28rem; background: white; overflow-y: auto; box-shadow: -8px 0 30px rgba(0,0,0,0.1); }
.insights-header { position: sticky; top: 0; background: white; padding: 1.5rem; border-bottom: 1px solid var(--border); }
.insights-close { position: absolute; top: 1.5rem; right: 1.5rem; text-decoration: none; }
.insight-cards { padding: 1.5rem; display: flex; flex-direction: column; gap: 1rem; }
.insight-card { border: 1px solid var(--border); border-radius: 1rem; padding: 1rem; }
.insight-card.is-expanded { background: #f1f6f2; border-color: #c7d8cc; }
.insight-toggle { display: flex; flex-direction: column; text-decoration: none; }
.insight-prompt { font-weight: 600; font-size: 0.9rem; }
.insight-teaser { font-size: 0.75rem; color: var(--muted); }
.insight-body { border-top: 1px solid var(--border); margin-top: 1rem; padding-top: 1rem; }
.insight-stat { font-family: Georgia, serif; font-size: 2.2rem; font-weight: 700; color: var(--sage); margin: 0; }
.insight-detail { font-size: 0.85rem; color: var(--muted); }
.rating-columns { display: flex; gap: 0.25rem; }
.rating-column { flex: 1; text-align: center; font-size: 0.6rem; }
.rating-column-track { height: 3rem; background: #efeae2; border-radius: 0.3rem; display: flex; flex-direction: column; justify-content: flex-end; overflow: hidden; }
.rating-column-fill { background: var(--sage); }
.rating-column-fill.stars-3 { background: var(--gold); }
.rating-column-fill.stars-2, .rating-column-fill.stars-1 { background: #e2b3bb; }
.progress-track { flex: 1; height: 0.5rem; background: #efeae2; border-radius: 999px; overflow: hidden; }
.progress-fill { height: 100%; background: var(--sage); }
.sparkline { display: flex; align-items: flex-end; gap: 0.25rem; height: 2rem; }
.spark-bar { flex: 1; background: var(--sage); opacity: 0.6; border-radius: 2px 2px 0 0; }
.sentiment-row { display: flex; align-items: center; gap: 0.75rem; margin: 0.4rem 0; font-size: 0.75rem; }
.sentiment-label { width: 4rem; }
.themes { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.theme-chip { background: var(--sage-light); color: var(--sage); font-size: 0.75rem; padding: 0.3rem 0.75rem; border-radius: 999px; }
.insights-footer { text-align: center; padding: 1.5rem; font-size: 0.8rem; color: var(--muted); }
.insights-browse { color: var(--sage); font-weight: 600; }

.not-found { max-width: 640px; margin: 4rem auto; text-align: center; }

/* Footer */
.site-footer { background: var(--charcoal); color: white; margin-top: 3rem; }
.footer-banner { display: flex; justify-content: space-between; align-items: center; gap: 1rem; padding: 1.5rem 2rem; border-bottom: 1px solid rgba(255,255,255,0.1); }
.footer-banner p { color: rgba(255,255,255,0.7); font-size: 0.85rem; }
.footer-columns { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; padding: 3rem 2rem; }
.footer-column ul { list-style: none; padding: 0; font-size: 0.85rem; color: rgba(255,255,255,0.7); }
.footer-column a { text-decoration: none; }
.footer-copyright { text-align: center; font-size: 0.75rem; color: rgba(255,255,255,0.5); padding: 1rem; margin: 0; border-top: 1px solid rgba(255,255,255,0.1); }

@media (max-width: 900px) {
    .pdp, .ritual, .footer-columns { grid-template-columns: 1fr; }
}
"#;

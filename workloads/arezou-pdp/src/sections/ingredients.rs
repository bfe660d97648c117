//! "Nature's Finest Ingredients" spotlight.

use crate::data::{INGREDIENTS, INGREDIENT_NOTE, INGREDIENT_WHISPER};

use super::html::{escape_html, render_stars};

/// Render the ingredient cards, the batch note and a customer quote.
pub fn render_ingredients() -> String {
    let cards: String = INGREDIENTS
        .iter()
        .map(|ingredient| {
            format!(
                r#"<div class="ingredient-card ingredient-card--{kind}">
            <span class="ingredient-icon" aria-hidden="true">💧</span>
            <span class="ingredient-kind">{label}</span>
            <h3>{name}</h3>
            <p>{benefit}</p>
        </div>"#,
                kind = ingredient.kind.as_str(),
                label = ingredient.kind.label(),
                name = escape_html(ingredient.name),
                benefit = escape_html(ingredient.benefit),
            )
        })
        .collect();

    let whisper = &INGREDIENT_WHISPER;

    format!(
        r#"<section class="ingredients" data-section="ingredients" id="ingredients">
    <header class="section-header">
        <span class="eyebrow">Crafted with Care</span>
        <h2>Nature's Finest Ingredients</h2>
        <p>A synergistic blend of organic cold-pressed oils and pure essential oils, each selected for their transformative skin benefits.</p>
    </header>
    <div class="ingredient-grid">{cards}</div>
    <p class="ingredient-note">{note}</p>
    <div class="ingredient-voice">
        <span class="eyebrow">What customers say about our ingredients</span>
        <blockquote class="review-whisper">
            <p>"{quote}"</p>
            <footer>{stars} <span class="author-name">{author}</span> <span class="skin-chip">{skin}</span></footer>
        </blockquote>
    </div>
</section>"#,
        cards = cards,
        note = escape_html(INGREDIENT_NOTE),
        quote = escape_html(whisper.quote),
        stars = render_stars(whisper.rating, false),
        author = escape_html(whisper.author),
        skin = escape_html(whisper.skin_type),
    )
}

//! "How to Use" ritual section.

use crate::data::{PRO_TIPS, RITUAL_MOMENT, RITUAL_STEPS, RITUAL_WHISPER};

use super::html::{escape_html, render_stars};

/// Render the ritual steps, pro tips and the testimonial beside them.
pub fn render_ritual() -> String {
    let steps: String = RITUAL_STEPS
        .iter()
        .map(|step| {
            format!(
                r#"<li class="ritual-step">
            <span class="step-number">{}</span>
            <div>
                <h3>{} <span class="step-time">{}</span></h3>
                <p>{}</p>
            </div>
        </li>"#,
                step.step,
                escape_html(step.title),
                escape_html(step.time),
                escape_html(step.description)
            )
        })
        .collect();

    let tips: String = PRO_TIPS
        .iter()
        .map(|tip| format!("<li>{}</li>", escape_html(tip)))
        .collect();

    let moment = &RITUAL_MOMENT;
    let initial = moment.author.chars().next().unwrap_or('?');

    format!(
        r#"<section class="ritual" data-section="ritual">
    <div class="ritual-steps">
        <span class="eyebrow">Your Nightly Ritual</span>
        <h2>How to Use</h2>
        <ol>{steps}</ol>
        <div class="pro-tips">
            <h4>✨ Pro Tips</h4>
            <ul>{tips}</ul>
        </div>
    </div>
    <aside class="ritual-testimonials">
        <blockquote class="trust-moment">
            <span class="trust-highlight">✨ {highlight}</span>
            <p>"{quote}"</p>
            <footer>
                <span class="avatar">{initial}</span>
                <span class="author-name">{author}</span>
                {stars}
            </footer>
        </blockquote>
        <blockquote class="review-whisper">
            <p>"{whisper}"</p>
            <footer>{whisper_by}</footer>
        </blockquote>
    </aside>
</section>"#,
        steps = steps,
        tips = tips,
        highlight = escape_html(moment.highlight),
        quote = escape_html(moment.quote),
        initial = escape_html(&initial.to_string()),
        author = escape_html(moment.author),
        stars = render_stars(moment.rating, false),
        whisper = escape_html(RITUAL_WHISPER.0),
        whisper_by = escape_html(RITUAL_WHISPER.1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ritual_lists_steps_and_tips() {
        let html = render_ritual();
        assert_eq!(html.matches(r#"class="ritual-step""#).count(), 4);
        for title in ["Cleanse", "Warm", "Apply", "Breathe"] {
            assert!(html.contains(title));
        }
        assert!(html.contains("replacement for moisturizer"));
        assert!(html.contains("Meera A."));
    }
}

//! Static page chrome rendered into the shell.

use crate::data::{
    BRAND, BRAND_BYLINE, BREADCRUMB, CONTACT_EMAIL, CONTACT_PHONE, COPYRIGHT, FOOTER_ABOUT,
    FOOTER_ABOUT_HEADING, FOOTER_COLUMNS, NOTIFICATION,
};

use super::html::escape_html;

/// Render the promotional notification bar.
pub fn render_notification() -> String {
    format!(
        r#"<div class="notification-bar" role="note">
    <span class="notification-message">✦ {message} ✦</span>
</div>
"#,
        message = escape_html(NOTIFICATION)
    )
}

/// Render the site header with the centered logo.
pub fn render_header() -> String {
    format!(
        r#"<header class="site-header">
    <div class="header-spacer"></div>
    <a class="brand" href="/">
        <span class="brand-name">{brand}</span>
        <span class="brand-byline">{byline}</span>
    </a>
    <nav class="header-actions">
        <a class="header-action" href="/search" aria-label="Search">Search</a>
        <a class="header-action" href="/account" aria-label="Account">Account</a>
        <a class="header-action cart" href="/cart" aria-label="Cart">Bag <span class="cart-count">0</span></a>
    </nav>
</header>
"#,
        brand = escape_html(BRAND),
        byline = escape_html(BRAND_BYLINE)
    )
}

/// Render the breadcrumb trail.
pub fn render_breadcrumb() -> String {
    let items: Vec<String> = BREADCRUMB
        .iter()
        .map(|crumb| match crumb.href {
            Some(href) => format!(
                r#"<li><a href="{}">{}</a></li>"#,
                escape_html(href),
                escape_html(crumb.label)
            ),
            None => format!(
                r#"<li aria-current="page"><span>{}</span></li>"#,
                escape_html(crumb.label)
            ),
        })
        .collect();

    format!(
        r#"<nav class="breadcrumb" aria-label="Breadcrumb">
    <ol>{}</ol>
</nav>
"#,
        items.join(r#"<li class="crumb-sep" aria-hidden="true">›</li>"#)
    )
}

/// Render the footer.
pub fn render_footer() -> String {
    let columns: String = FOOTER_COLUMNS
        .iter()
        .map(|column| {
            let links: String = column
                .links
                .iter()
                .map(|label| format!(r##"<li><a href="#">{}</a></li>"##, escape_html(label)))
                .collect();
            format!(
                r#"<div class="footer-column">
            <h4>{}</h4>
            <ul>{}</ul>
        </div>"#,
                escape_html(column.heading),
                links
            )
        })
        .collect();

    format!(
        r#"<footer class="site-footer">
    <div class="footer-banner">
        <div>
            <h3>{about_heading}</h3>
            <p>{about}</p>
        </div>
        <a class="btn btn-primary" href="https://shopee.in/">Visit Shopee</a>
    </div>
    <div class="footer-columns">
        {columns}
        <div class="footer-column">
            <h4>Contact</h4>
            <ul>
                <li>{phone}</li>
                <li>{email}</li>
            </ul>
        </div>
    </div>
    <p class="footer-copyright">{copyright}</p>
</footer>
"#,
        about_heading = escape_html(FOOTER_ABOUT_HEADING),
        about = escape_html(FOOTER_ABOUT),
        columns = columns,
        phone = escape_html(CONTACT_PHONE),
        email = escape_html(CONTACT_EMAIL),
        copyright = escape_html(COPYRIGHT)
    )
}

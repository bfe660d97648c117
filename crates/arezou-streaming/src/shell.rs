//! Shell template abstraction.

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Link and style tags.
    pub links: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a canonical link.
    pub fn with_canonical(mut self, href: &str) -> Self {
        self.links.push(format!(
            r#"<link rel="canonical" href="{}">"#,
            escape_html(href)
        ));
        self
    }

    /// Add inline CSS styles.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            html.push('\n');
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        html
    }
}

/// Shell template wrapped around the streamed sections.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Document language.
    pub lang: String,
    /// Head content.
    pub head: HeadContent,
    /// HTML before sections (opening body, page chrome, wrapper divs).
    pub body_start: String,
    /// HTML after sections (footer, closing tags).
    pub body_end: String,
}

impl Shell {
    /// Create a new shell with basic structure.
    pub fn new(head: HeadContent) -> Self {
        Self {
            lang: "en".to_string(),
            head,
            body_start: "<body>\n<main>\n".to_string(),
            body_end: "</main>\n</body>\n</html>".to_string(),
        }
    }

    /// Set custom body start HTML.
    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Set custom body end HTML.
    pub fn with_body_end(mut self, html: impl Into<String>) -> Self {
        self.body_end = html.into();
        self
    }

    /// Render the opening part of the shell (before sections).
    pub fn render_opening(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n<head>\n", escape_html(&self.lang)));
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html
    }

    /// Render the closing part of the shell (after sections).
    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}

/// Escape text for element content and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_render_escapes_title() {
        let head = HeadContent::new("Radiance & Glow")
            .with_meta("viewport", "width=device-width, initial-scale=1");
        let html = head.render();
        assert!(html.contains("<title>Radiance &amp; Glow</title>"));
        assert!(html.contains(r#"<meta name="viewport""#));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape_html("Are-zōu"), "Are-zōu");
    }

    #[test]
    fn test_meta_content_escaped() {
        let html = HeadContent::new("PDP")
            .with_meta("description", r#"Say "glow" & <shine>"#)
            .render();
        assert!(html.contains(r#"content="Say &quot;glow&quot; &amp; &lt;shine&gt;""#));
    }

    #[test]
    fn test_shell_opening_and_closing() {
        let shell = Shell::new(HeadContent::new("PDP").with_style("body{}"))
            .with_body_start("<body><main>")
            .with_body_end("</main></body></html>");

        let opening = shell.render_opening();
        assert!(opening.starts_with("<!DOCTYPE html>"));
        assert!(opening.contains("<html lang=\"en\">"));
        assert!(opening.contains("<style>body{}</style>"));
        assert!(opening.ends_with("<body><main>"));
        assert_eq!(shell.render_closing(), "</main></body></html>");
    }
}

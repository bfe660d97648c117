//! Small closed sets of options with stable slugs.

/// A closed set of options that the page renders as buttons or pills.
///
/// `as_str` is the slug used in URLs and action text; `label` is what the
/// page shows.
pub trait Choice: Copy + Eq + 'static {
    /// Every option, in display order.
    const ALL: &'static [Self];

    /// URL slug.
    fn as_str(&self) -> &'static str;

    /// Display label.
    fn label(&self) -> &'static str;

    /// Look up an option by slug or label, ignoring ASCII case.
    fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s) || c.label().eq_ignore_ascii_case(s))
    }
}

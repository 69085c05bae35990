//! HTML rendering for the results dropdown.
//!
//! Everything the widget writes into `innerHTML` is built here, and every
//! dynamic value passes through [`escape_html`] first - article fields come
//! from a fetched JSON file and are untrusted. The escape set covers both
//! element text and double-quoted attribute values, so the same function
//! guards `href="..."` and `<div>...</div>` positions alike.
//!
//! Excerpts are truncated to [`EXCERPT_MAX_CHARS`] characters before
//! escaping, so an entity can never be cut in half, and always end with a
//! literal `...` suffix.

use crate::query::PlaceholderKind;
use crate::types::Article;

/// The href used for inert placeholder rows. Clicking one navigates nowhere.
pub const PLACEHOLDER_HREF: &str = "#";

/// Excerpts are cut to this many characters (Unicode scalars) in the
/// dropdown.
pub const EXCERPT_MAX_CHARS: usize = 100;

/// Escape a string for interpolation into HTML.
///
/// Replaces `&`, `<`, `>`, `"`, and `'`. The quote entities are what make
/// this safe inside double-quoted attributes, not just element text.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// One row of the dropdown, ready to serialize. Both real results and
/// placeholder rows flatten into this before rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEntry {
    pub href: String,
    pub title: String,
    /// Rendered as a channel badge when present; `None` and empty-string
    /// channels both omit the badge element entirely.
    pub channel: Option<String>,
    pub excerpt: String,
    /// Placeholder rows get an extra CSS class and an inert href.
    pub placeholder: bool,
}

impl RenderEntry {
    /// A row for a real article.
    pub fn from_article(article: &Article) -> Self {
        RenderEntry {
            href: article.url.clone(),
            title: article.title.clone(),
            channel: article
                .channel
                .as_deref()
                .filter(|c| !c.is_empty())
                .map(String::from),
            excerpt: article.excerpt.clone(),
            placeholder: article.url == PLACEHOLDER_HREF,
        }
    }

    /// An inert status row (loading, unavailable, no matches).
    pub fn placeholder(kind: PlaceholderKind) -> Self {
        RenderEntry {
            href: PLACEHOLDER_HREF.to_string(),
            title: kind.title().to_string(),
            channel: None,
            excerpt: kind.excerpt().to_string(),
            placeholder: true,
        }
    }
}

/// Serialize entries into the dropdown's inner HTML.
///
/// The returned fragment is the complete `innerHTML` payload: a single
/// `.search-results-inner` wrapper holding one `<a>` per entry.
pub fn render_entries(entries: &[RenderEntry]) -> String {
    let mut html = String::from("<div class=\"search-results-inner\">");
    for entry in entries {
        render_entry(&mut html, entry);
    }
    html.push_str("</div>");
    html
}

fn render_entry(html: &mut String, entry: &RenderEntry) {
    let class = if entry.placeholder {
        "search-result-item search-result-placeholder"
    } else {
        "search-result-item"
    };

    html.push_str("<a href=\"");
    html.push_str(&escape_html(&entry.href));
    html.push_str("\" class=\"");
    html.push_str(class);
    html.push_str("\">");

    html.push_str("<div class=\"result-title\">");
    html.push_str(&escape_html(&entry.title));
    html.push_str("</div>");

    if let Some(channel) = &entry.channel {
        html.push_str("<div class=\"result-channel\">");
        html.push_str(&escape_html(channel));
        html.push_str("</div>");
    }

    html.push_str("<div class=\"result-excerpt\">");
    let clipped: String = entry.excerpt.chars().take(EXCERPT_MAX_CHARS).collect();
    html.push_str(&escape_html(&clipped));
    html.push_str("...");
    html.push_str("</div>");

    html.push_str("</a>");
}

//! Escaping and emphasis for prose segments.

use crate::render::escape_html;
use crate::BulletStyle;
use regex::Regex;
use std::sync::LazyLock;

static STRONG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static EMPHASIS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

// Delimiters must hug text, so `* item` never opens a span.
static STRICT_STRONG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^\s*](?:.*?[^\s*])?)\*\*").unwrap());
static STRICT_EMPHASIS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^\s*](?:.*?[^\s*])?)\*").unwrap());

/// Escapes `prose`, then applies strong emphasis, then emphasis.
///
/// Spans never cross a line break.
pub fn transform_inline(prose: &str, style: BulletStyle) -> String {
    let (strong, emphasis) = match style {
        BulletStyle::Strict => (&*STRICT_STRONG_RE, &*STRICT_EMPHASIS_RE),
        BulletStyle::Lenient => (&*STRONG_RE, &*EMPHASIS_RE),
    };

    let escaped = escape_html(prose);
    let with_strong = strong.replace_all(&escaped, "<strong>$1</strong>");
    emphasis
        .replace_all(&with_strong, "<em>$1</em>")
        .into_owned()
}

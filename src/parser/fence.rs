//! Fenced code block extraction.
//!
//! Fence bodies are pulled out of the message before anything else runs, so
//! escaping, emphasis and bullet handling never see code.

use regex::Regex;
use std::sync::LazyLock;

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());
static LANGUAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A([A-Za-z0-9_+.#-]+)\r?\n").unwrap());

/// A slice of the input message, either prose or the body of a fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Prose(&'a str),
    Code {
        language: Option<&'a str>,
        code: &'a str,
    },
}

/// Splits `text` into prose and code segments in input order.
///
/// Each opening fence pairs with the nearest following fence. A fence with no
/// closer stays in the prose. Input without any fence comes back as a single
/// prose segment, even when empty.
pub fn split_fences(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    let mut after_fence = false;

    for caps in FENCE_RE.captures_iter(text) {
        let (Some(whole), Some(body)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_prose(&mut segments, &text[last..whole.start()], after_fence, true);
        segments.push(code_segment(body.as_str()));
        last = whole.end();
        after_fence = true;
    }

    if !after_fence {
        return vec![Segment::Prose(text)];
    }
    push_prose(&mut segments, &text[last..], true, false);
    segments
}

// The line break that separates prose from an adjacent fence belongs to the fence.
fn push_prose<'a>(
    segments: &mut Vec<Segment<'a>>,
    mut prose: &'a str,
    after_fence: bool,
    before_fence: bool,
) {
    if after_fence {
        prose = strip_leading_newline(prose);
    }
    if before_fence {
        prose = strip_trailing_newline(prose);
    }
    if !prose.is_empty() {
        segments.push(Segment::Prose(prose));
    }
}

fn code_segment(body: &str) -> Segment<'_> {
    let (language, rest) = match LANGUAGE_RE.captures(body) {
        Some(caps) => {
            let end = caps.get(0).map_or(0, |m| m.end());
            (caps.get(1).map(|m| m.as_str()), &body[end..])
        }
        None => (None, strip_leading_newline(body)),
    };
    Segment::Code {
        language,
        code: strip_trailing_newline(rest),
    }
}

fn strip_leading_newline(s: &str) -> &str {
    s.strip_prefix("\r\n")
        .or_else(|| s.strip_prefix('\n'))
        .unwrap_or(s)
}

fn strip_trailing_newline(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_fence_is_single_prose_segment() {
        assert_eq!(split_fences(""), vec![Segment::Prose("")]);
        assert_eq!(split_fences("a\nb"), vec![Segment::Prose("a\nb")]);
    }

    #[test]
    fn test_inline_fence() {
        assert_eq!(
            split_fences("```code<x>```"),
            vec![Segment::Code {
                language: None,
                code: "code<x>"
            }]
        );
    }

    #[test]
    fn test_fence_with_language_and_surrounding_prose() {
        assert_eq!(
            split_fences("before\n```rust\nfn main() {}\n```\nafter"),
            vec![
                Segment::Prose("before"),
                Segment::Code {
                    language: Some("rust"),
                    code: "fn main() {}"
                },
                Segment::Prose("after"),
            ]
        );
    }

    #[test]
    fn test_bare_fence_drops_boundary_newlines() {
        assert_eq!(
            split_fences("```\nline one\nline two\n```"),
            vec![Segment::Code {
                language: None,
                code: "line one\nline two"
            }]
        );
    }

    #[test]
    fn test_fences_pair_non_greedily() {
        assert_eq!(
            split_fences("```a``` mid ```b```"),
            vec![
                Segment::Code {
                    language: None,
                    code: "a"
                },
                Segment::Prose(" mid "),
                Segment::Code {
                    language: None,
                    code: "b"
                },
            ]
        );
    }

    #[test]
    fn test_unterminated_fence_stays_prose() {
        assert_eq!(
            split_fences("```a``` then ```open"),
            vec![
                Segment::Code {
                    language: None,
                    code: "a"
                },
                Segment::Prose(" then ```open"),
            ]
        );
        assert_eq!(split_fences("```open"), vec![Segment::Prose("```open")]);
    }

    #[test]
    fn test_blank_line_before_fence_is_kept() {
        assert_eq!(
            split_fences("text\n\n```x```"),
            vec![
                Segment::Prose("text\n"),
                Segment::Code {
                    language: None,
                    code: "x"
                },
            ]
        );
    }
}

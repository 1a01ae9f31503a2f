//! Bracket-depth scanner for locating JSON-looking spans in free text.
//!
//! Tracks nesting of `[]` and `{}` and skips over string literals
//! (including escaped quotes), so a `]` or `}` inside a string value
//! never closes a span.

/// Kind of container a span starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    Array,
    Object,
}

impl SpanKind {
    fn from_opener(byte: u8) -> Option<Self> {
        match byte {
            b'[' => Some(SpanKind::Array),
            b'{' => Some(SpanKind::Object),
            _ => None,
        }
    }
}

/// A balanced `[...]` or `{...}` region of the input, as byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub kind: SpanKind,
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl Span {
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Finds the balanced span opening at `start`.
///
/// Returns `None` when `start` is not an opener, when a closer does not
/// match the innermost opener, or when the text ends first.
pub fn balanced_span(text: &str, start: usize) -> Option<Span> {
    let bytes = text.as_bytes();
    let kind = SpanKind::from_opener(*bytes.get(start)?)?;

    let mut stack: Vec<u8> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'[' => stack.push(b']'),
            b'{' => stack.push(b'}'),
            b']' | b'}' => {
                if stack.pop() != Some(byte) {
                    return None;
                }
                if stack.is_empty() {
                    return Some(Span {
                        kind,
                        start,
                        end: start + offset + 1,
                    });
                }
            }
            _ => {}
        }
    }

    None
}

/// Walks `text` left to right and yields every outermost span accepted by
/// `accept`.
///
/// When a balanced span is rejected, scanning resumes one byte after its
/// opener so spans nested inside it can still be found. Accepted spans are
/// skipped as a whole.
pub fn outermost_spans<F>(text: &str, mut accept: F) -> Vec<Span>
where
    F: FnMut(&str) -> bool,
{
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut cursor = 0;

    while cursor < bytes.len() {
        let Some(offset) = bytes[cursor..]
            .iter()
            .position(|b| matches!(b, b'[' | b'{'))
        else {
            break;
        };
        let start = cursor + offset;

        match balanced_span(text, start) {
            Some(span) if accept(span.slice(text)) => {
                cursor = span.end;
                spans.push(span);
            }
            _ => cursor = start + 1,
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_simple_array() {
        let text = "xx [1, 2] yy";
        let span = balanced_span(text, 3).unwrap();
        assert_eq!(span.kind, SpanKind::Array);
        assert_eq!(span.slice(text), "[1, 2]");
    }

    #[test]
    fn respects_nesting() {
        let text = r#"{"a": [{"b": 1}], "c": {}} tail"#;
        let span = balanced_span(text, 0).unwrap();
        assert_eq!(span.kind, SpanKind::Object);
        assert_eq!(span.slice(text), r#"{"a": [{"b": 1}], "c": {}}"#);
    }

    #[test]
    fn ignores_brackets_inside_strings() {
        let text = r#"[{"keyword": "a]b}c"}] rest ]"#;
        let span = balanced_span(text, 0).unwrap();
        assert_eq!(span.slice(text), r#"[{"keyword": "a]b}c"}]"#);
    }

    #[test]
    fn handles_escaped_quotes() {
        let text = r#"["say \"]\" now"]"#;
        let span = balanced_span(text, 0).unwrap();
        assert_eq!(span.slice(text), text);
    }

    #[test]
    fn mismatched_closer_is_rejected() {
        assert!(balanced_span("[1, 2}", 0).is_none());
    }

    #[test]
    fn unterminated_span_is_rejected() {
        assert!(balanced_span("[1, [2, 3]", 0).is_none());
    }

    #[test]
    fn non_opener_start_is_rejected() {
        assert!(balanced_span("abc", 0).is_none());
        assert!(balanced_span("", 0).is_none());
    }

    #[test]
    fn outermost_spans_skip_accepted_regions() {
        let text = r#"a {"x": [1]} b [2]"#;
        let spans = outermost_spans(text, |_| true);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].slice(text), r#"{"x": [1]}"#);
        assert_eq!(spans[1].slice(text), "[2]");
    }

    #[test]
    fn outermost_spans_descend_into_rejected_regions() {
        let text = r#"[note: {"x": 1}]"#;
        let spans = outermost_spans(text, |s| s.starts_with('{'));
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].slice(text), r#"{"x": 1}"#);
    }

    #[test]
    fn multibyte_text_around_spans_is_safe() {
        let text = "검색어 순위: [\"뉴스\"] 끝";
        let spans = outermost_spans(text, |_| true);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].slice(text), "[\"뉴스\"]");
    }
}

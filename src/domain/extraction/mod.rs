//! Extraction of structured payloads from free-text oracle replies.

mod payload;
mod scanner;

pub use payload::{extract_structured_payload, ExtractionError};
pub use scanner::{balanced_span, outermost_spans, Span, SpanKind};

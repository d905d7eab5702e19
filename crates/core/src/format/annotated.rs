//! Annotated text: plain segments carrying spoken-form metadata.
//!
//! The host UI toolkit turns these into its own rich-text type (for example
//! an accessibility span over the amount).

use std::ops::Range;

use purse_shared::CurrencyCode;
use serde::Serialize;

/// Locale-invariant reading of an amount for assistive technology.
///
/// `decimal` always uses "." as the decimal separator and has no grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SpokenForm {
    /// Alphabetic currency code.
    pub currency: CurrencyCode,
    /// Plain decimal string, e.g. "-1234.50".
    pub decimal: String,
}

impl SpokenForm {
    /// Creates a spoken form.
    #[must_use]
    pub fn new(currency: CurrencyCode, decimal: impl Into<String>) -> Self {
        Self {
            currency,
            decimal: decimal.into(),
        }
    }
}

impl std::fmt::Display for SpokenForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.decimal, self.currency)
    }
}

/// A byte range of the text annotated with a spoken form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedSpan {
    /// Byte range into the text; always on char boundaries.
    pub range: Range<usize>,
    /// Reading of the covered text.
    pub spoken: SpokenForm,
}

/// Text plus non-overlapping annotated spans, in order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AnnotatedText {
    text: String,
    spans: Vec<AnnotatedSpan>,
}

impl AnnotatedText {
    /// Text with no annotations.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Text annotated as a whole with `spoken`.
    #[must_use]
    pub fn annotated(text: impl Into<String>, spoken: SpokenForm) -> Self {
        let text = text.into();
        let range = 0..text.len();
        Self {
            text,
            spans: vec![AnnotatedSpan { range, spoken }],
        }
    }

    /// The plain text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// All annotated spans.
    #[must_use]
    pub fn spans(&self) -> &[AnnotatedSpan] {
        &self.spans
    }

    /// The text split into `(segment, annotation)` pairs covering every byte.
    #[must_use]
    pub fn segments(&self) -> Vec<(&str, Option<&SpokenForm>)> {
        let mut out = Vec::with_capacity(self.spans.len() * 2 + 1);
        let mut cursor = 0;
        for span in &self.spans {
            if span.range.start > cursor {
                out.push((&self.text[cursor..span.range.start], None));
            }
            out.push((&self.text[span.range.clone()], Some(&span.spoken)));
            cursor = span.range.end;
        }
        if cursor < self.text.len() {
            out.push((&self.text[cursor..], None));
        }
        out
    }
}

impl std::fmt::Display for AnnotatedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

//! Coreference-resolution output: mention spans grouped into clusters.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One mention: a contiguous token range within the document.
///
/// `begin` and `end` index the flattened document token sequence; `end` is
/// exclusive. The wire format is the `[form, begin, end]` triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SpanRepr", into = "SpanRepr")]
pub struct Span {
    /// Surface form of the mention.
    pub form: String,
    /// Index of the first token of the mention.
    pub begin: usize,
    /// Index one past the last token of the mention.
    pub end: usize,
}

impl Span {
    /// Create a span covering tokens `begin..end`.
    pub fn new(form: impl Into<String>, begin: usize, end: usize) -> Self {
        Self {
            form: form.into(),
            begin,
            end,
        }
    }

    /// Number of tokens the mention covers.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.begin)
    }

    /// Whether the span covers no tokens.
    pub fn is_empty(&self) -> bool {
        self.end <= self.begin
    }
}

#[derive(Serialize, Deserialize)]
struct SpanRepr(String, usize, usize);

impl From<SpanRepr> for Span {
    fn from(repr: SpanRepr) -> Self {
        Self {
            form: repr.0,
            begin: repr.1,
            end: repr.2,
        }
    }
}

impl From<Span> for SpanRepr {
    fn from(span: Span) -> Self {
        Self(span.form, span.begin, span.end)
    }
}

/// Clusters of coreferent mentions.
///
/// Each set denotes one entity; membership has no intrinsic order and
/// cluster order is not guaranteed by the server.
pub type CoreferenceClusters = Vec<HashSet<Span>>;

/// Output of coreference resolution over raw text.
///
/// Span offsets index into `tokens`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoreferenceOutput {
    /// Coreferent entity clusters.
    pub clusters: CoreferenceClusters,
    /// Flattened document tokens, as segmented by the server.
    pub tokens: Vec<String>,
}

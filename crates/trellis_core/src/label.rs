//! Button labels, literal or deferred.
//!
//! A label is either known up front or produced by a [`TextProvider`] the
//! first time it is needed (construction-time lookups are not always
//! possible, e.g. when the text comes from a resource bundle). Deferred
//! labels are resolved once and cached for the lifetime of the label.
//!
//! A label may resolve to `None`. That is a legal state for comparison
//! purposes; it only becomes an error when the label has to be rendered.

use std::fmt;
use std::sync::{Arc, OnceLock};

/// Deferred text source
pub type TextProvider = Arc<dyn Fn() -> Option<String> + Send + Sync>;

/// Immutable label text with lazy resolution
#[derive(Clone)]
pub struct Label {
    resolved: OnceLock<Option<String>>,
    provider: Option<TextProvider>,
}

impl Label {
    /// Create a label from known text
    pub fn literal(text: impl Into<String>) -> Self {
        Self::resolved(Some(text.into()))
    }

    /// Create a label that resolves to no text
    pub fn null() -> Self {
        Self::resolved(None)
    }

    /// Create a label resolved from `provider` on first access
    pub fn deferred<F>(provider: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        Self {
            resolved: OnceLock::new(),
            provider: Some(Arc::new(provider)),
        }
    }

    fn resolved(text: Option<String>) -> Self {
        let label = Self {
            resolved: OnceLock::new(),
            provider: None,
        };
        // Pre-populate the cache
        let _ = label.resolved.set(text);
        label
    }

    /// Get the label text, resolving the provider on first call
    pub fn text(&self) -> Option<&str> {
        self.resolved
            .get_or_init(|| match &self.provider {
                Some(provider) => {
                    let text = provider();
                    tracing::trace!(resolved = text.is_some(), "resolved deferred label");
                    text
                }
                None => None,
            })
            .as_deref()
    }

    /// Whether the text has been resolved yet
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Null-safe exact comparison against `text`.
    ///
    /// Two missing values are equal; a missing value never equals a present
    /// one. No case folding or trimming is applied.
    pub fn matches(&self, text: Option<&str>) -> bool {
        self.text() == text
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other.text())
    }
}

impl Eq for Label {}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.resolved.get() {
            Some(text) => write!(f, "Label({:?})", text),
            None => write!(f, "Label(<deferred>)"),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text().unwrap_or_default())
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Self::literal(text)
    }
}

impl From<Option<String>> for Label {
    fn from(text: Option<String>) -> Self {
        Self::resolved(text)
    }
}

impl From<Option<&str>> for Label {
    fn from(text: Option<&str>) -> Self {
        Self::resolved(text.map(str::to_owned))
    }
}

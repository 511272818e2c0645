//! Phrase list for the typewriter.

use unicode_segmentation::UnicodeSegmentation;

/// A single phrase, indexed by extended grapheme cluster.
///
/// "Characters" here are graphemes, so an emoji with modifiers or a letter
/// with combining marks is revealed in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    text: String,
    /// Byte offset where each grapheme ends.
    ends: Vec<usize>,
}

impl Phrase {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let ends = text
            .grapheme_indices(true)
            .map(|(start, g)| start + g.len())
            .collect();
        Self { text, ends }
    }

    /// Number of reveal steps (graphemes).
    pub fn len(&self) -> usize {
        self.ends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ends.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the first `count` graphemes. Saturates at the full phrase.
    pub fn prefix(&self, count: usize) -> &str {
        match count.min(self.len()) {
            0 => "",
            n => &self.text[..self.ends[n - 1]],
        }
    }
}

/// Ordered, non-empty, cyclic list of phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseList {
    phrases: Vec<Phrase>,
}

impl PhraseList {
    /// Builds a phrase list. Returns `None` if `phrases` is empty.
    pub fn new<I, S>(phrases: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<Phrase> = phrases.into_iter().map(Phrase::new).collect();
        (!phrases.is_empty()).then_some(Self { phrases })
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the phrase at `index`, wrapping modulo the list length.
    pub fn get(&self, index: usize) -> &Phrase {
        &self.phrases[index % self.phrases.len()]
    }

    /// Index that follows `index` in the cycle.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.phrases.len()
    }
}

//! Ordered label-to-accession collector.
//!
//! The archive references samples and reference sequences as repeated
//! `label`/`accession` pairs whose order in the document matters, so the
//! collector preserves insertion order and never deduplicates.

/// An ordered list of `(label, accession)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    pairs: Vec<(String, String)>,
}

impl Mapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one pair, keeping insertion order.
    pub fn add(&mut self, label: impl Into<String>, accession: impl Into<String>) {
        self.pairs.push((label.into(), accession.into()));
    }

    /// Builder-style append, for chained construction.
    #[must_use]
    pub fn pair(mut self, label: impl Into<String>, accession: impl Into<String>) -> Self {
        self.add(label, accession);
        self
    }

    /// Iterate pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(l, a)| (l.as_str(), a.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Move the pairs of `other` onto the end of this mapping.
    pub fn extend(&mut self, other: Mapping) {
        self.pairs.extend(other.pairs);
    }
}

impl<L: Into<String>, A: Into<String>> FromIterator<(L, A)> for Mapping {
    fn from_iter<T: IntoIterator<Item = (L, A)>>(iter: T) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(l, a)| (l.into(), a.into()))
                .collect(),
        }
    }
}

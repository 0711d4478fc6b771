//! Insertion-ordered sets of labels
//!
//! Categories, accounts and expense types are discovered from imported data.
//! A [`Vocabulary`] keeps each distinct non-empty label once, in the order it
//! was first seen, so positions are stable and can index the colour palette.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Ordered collection of distinct, non-empty labels
///
/// Serialized as a plain list; the lookup index is rebuilt on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl Vocabulary {
    /// Create an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label if it is non-empty and not yet present
    ///
    /// Returns `true` when the label was added.
    pub fn insert(&mut self, label: &str) -> bool {
        if label.is_empty() || self.contains(label) {
            return false;
        }
        self.index.insert(label.to_string(), self.labels.len());
        self.labels.push(label.to_string());
        true
    }

    /// Check whether a label is present
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// First-seen position of a label
    pub fn position(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// First label, if any
    pub fn first(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate labels in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// View the labels as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}

impl<'a> FromIterator<&'a str> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut vocabulary = Vocabulary::new();
        for label in iter {
            vocabulary.insert(label);
        }
        vocabulary
    }
}

impl From<Vec<String>> for Vocabulary {
    fn from(labels: Vec<String>) -> Self {
        labels.iter().map(String::as_str).collect()
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.labels
    }
}

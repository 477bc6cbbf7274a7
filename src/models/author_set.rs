use std::collections::BTreeSet;
use std::fmt;

/// Sorted, deduplicated set of `Name <email>` author strings.
///
/// Built fresh for every file from its history; an empty set means no
/// authors are known (new or untracked file).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthorSet(BTreeSet<String>);

impl AuthorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an author, ignoring blank entries.
    pub fn insert(&mut self, author: impl Into<String>) {
        let author = author.into();
        let trimmed = author.trim();
        if trimmed.is_empty() {
            return;
        }
        if trimmed.len() == author.len() {
            self.0.insert(author);
        } else {
            self.0.insert(trimmed.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates authors in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for AuthorSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for author in iter {
            set.insert(author);
        }
        set
    }
}

impl fmt::Display for AuthorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self.iter().collect::<Vec<_>>().join(", ");
        f.write_str(&joined)
    }
}

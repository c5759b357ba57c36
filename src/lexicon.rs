// Copyright (C) 2020-2026 Andy Kurnia.

use std::collections::HashSet;

/// Injected word oracle. Membership is case-insensitive; the engine never
/// fetches, parses, or caches dictionaries itself.
pub trait Lexicon {
    fn contains(&self, word: &str) -> bool;
}

/// Set-backed oracle. Words are folded to uppercase on construction and on
/// lookup.
pub struct SetLexicon {
    words: HashSet<String>,
}

impl SetLexicon {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_ascii_uppercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for SetLexicon {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }
}

use std::fmt;

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Finds which characters of a candidate match the typed query
///
/// Used for emphasis only; candidate order always stays as the service
/// returned it.
pub struct SymbolMatcher {
    matcher: SkimMatcherV2,
}

impl fmt::Debug for SymbolMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolMatcher").finish_non_exhaustive()
    }
}

impl Default for SymbolMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolMatcher {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default().ignore_case(),
        }
    }

    /// Character indices of `candidate` matched by `query`, sorted
    pub fn match_indices(&self, candidate: &str, query: &str) -> Vec<usize> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.matcher.fuzzy_indices(candidate, query) {
            Some((_, mut indices)) => {
                indices.sort_unstable();
                indices
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;

//! Filter-string matching against tokenized labels

use crate::tokens::tokenize;

/// A parsed filter string.
///
/// Matching asks whether every query token is a prefix of at least one
/// document token (AND across query tokens, OR within the document).
/// Token order and multiplicity are irrelevant; a single document token
/// may satisfy several query tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    tokens: Vec<String>,
}

impl Query {
    /// Parse a raw filter string into query tokens.
    pub fn new(filter: &str) -> Self {
        Self {
            tokens: tokenize(filter),
        }
    }

    /// True when the filter string produced no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Decide whether a label's token sequence satisfies this query.
    ///
    /// An empty query matches everything, and an empty document matches
    /// any query. Blank or unparseable labels stay visible under every
    /// filter; tightening that would change visible filtering behavior.
    pub fn matches(&self, document_tokens: &[String]) -> bool {
        if self.tokens.is_empty() || document_tokens.is_empty() {
            return true;
        }
        self.tokens
            .iter()
            .all(|q| document_tokens.iter().any(|d| d.starts_with(q.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = Query::new("");
        assert!(query.is_empty());
        assert!(query.matches(&docs(&["anything"])));
        assert!(query.matches(&[]));
    }

    #[test]
    fn test_empty_document_matches_any_query() {
        let query = Query::new("needle");
        assert!(query.matches(&[]));
    }

    #[test]
    fn test_every_query_token_must_prefix_some_document_token() {
        let query = Query::new("op fi");
        assert!(query.matches(&docs(&["open", "file"])));
        assert!(!query.matches(&docs(&["open", "window"])));
    }

    #[test]
    fn test_prefix_not_substring() {
        let query = Query::new("pen");
        assert!(!query.matches(&docs(&["open"])));
        assert!(query.matches(&docs(&["pencil"])));
    }

    #[test]
    fn test_token_order_is_irrelevant() {
        let query = Query::new("file open");
        assert!(query.matches(&docs(&["open", "file"])));
    }

    #[test]
    fn test_one_document_token_can_satisfy_multiple_query_tokens() {
        let query = Query::new("op ope");
        assert!(query.matches(&docs(&["open"])));
    }

    #[test]
    fn test_query_is_case_normalized() {
        let query = Query::new("OPEN");
        assert!(query.matches(&docs(&["open"])));
    }
}

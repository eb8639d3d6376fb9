//! Shared tokenization rule for labels and filter strings

/// Split a label or filter string into lowercase word tokens.
///
/// Words are maximal runs of alphanumeric characters; whitespace and
/// punctuation are delimiters. Labels and filter strings go through the
/// same rule so prefix comparison works on equal footing.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_whitespace_and_punctuation() {
        assert_eq!(
            tokenize("Send Text: Hello, world"),
            vec!["send", "text", "hello", "world"]
        );
    }

    #[test]
    fn test_lowercases_tokens() {
        assert_eq!(tokenize("OPEN File"), vec!["open", "file"]);
    }

    #[test]
    fn test_blank_and_punctuation_only_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("-- // ::").is_empty());
    }

    #[test]
    fn test_digits_are_word_characters() {
        assert_eq!(tokenize("Profile 2"), vec!["profile", "2"]);
    }

    #[test]
    fn test_collapses_repeated_delimiters() {
        assert_eq!(tokenize("a  -  b"), vec!["a", "b"]);
    }
}

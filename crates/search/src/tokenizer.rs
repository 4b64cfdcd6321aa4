//! Basic tokenizer for sieve
//!
//! Words are maximal runs of non-whitespace characters. There is no case
//! folding, stemming or punctuation stripping: `Cat` and `cat,` are
//! distinct words.

/// Split text into words, left to right
///
/// # Example
///
/// ```
/// use sieve_search::tokenizer::split_into_words;
///
/// let words: Vec<_> = split_into_words("  white cat\tand\nfancy collar ").collect();
/// assert_eq!(words, vec!["white", "cat", "and", "fancy", "collar"]);
/// ```
pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split_whitespace()
}

/// Whether a word is free of control characters
///
/// Any byte below 0x20 makes a word invalid.
///
/// # Example
///
/// ```
/// use sieve_search::tokenizer::is_valid_word;
///
/// assert!(is_valid_word("collar"));
/// assert!(!is_valid_word("col\u{12}lar"));
/// ```
pub fn is_valid_word(word: &str) -> bool {
    !word.bytes().any(|b| b < 0x20)
}

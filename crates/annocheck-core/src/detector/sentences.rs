//! Sentence segmentation for reference texts.

/// Split `text` into sentences on `delimiter`.
///
/// Surrounding whitespace is ignored and a sentence-final delimiter does
/// not produce an extra empty sentence. Empty segments in the middle
/// (doubled delimiters) are kept.
pub fn split_sentences(text: &str, delimiter: char) -> Vec<&str> {
    let mut sentences: Vec<&str> = text.trim().split(delimiter).collect();
    if sentences.last() == Some(&"") {
        sentences.pop();
    }
    sentences
}

/// Number of sentences in `text`.
pub fn count_sentences(text: &str, delimiter: char) -> usize {
    split_sentences(text, delimiter).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_delimiter_is_not_a_sentence() {
        assert_eq!(split_sentences("A。B。", '。'), vec!["A", "B"]);
        assert_eq!(count_sentences("A。B", '。'), 2);
    }

    #[test]
    fn test_whitespace_is_trimmed_first() {
        assert_eq!(count_sentences("  今天天气很好。\n", '。'), 1);
    }

    #[test]
    fn test_empty_text_has_no_sentences() {
        assert_eq!(count_sentences("", '。'), 0);
        assert_eq!(count_sentences("   ", '。'), 0);
        assert_eq!(count_sentences("。", '。'), 1);
    }

    #[test]
    fn test_doubled_delimiter_keeps_inner_empty_segment() {
        assert_eq!(split_sentences("A。。B。", '。'), vec!["A", "", "B"]);
    }

    #[test]
    fn test_other_delimiters() {
        assert_eq!(count_sentences("One. Two. Three.", '.'), 3);
    }
}

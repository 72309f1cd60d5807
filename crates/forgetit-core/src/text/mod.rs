//! Text utilities shared by the condensers

/// Sentence delimiter used by the extractive sampler
const SENTENCE_DELIMITER: &str = ". ";

/// Texts with this many sentences or fewer are returned as-is
const MIN_SAMPLED_SENTENCES: usize = 3;

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Keep the first `n` whitespace-separated words, joined by single spaces
pub fn first_words(text: &str, n: usize) -> String {
    text.split_whitespace()
        .take(n)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Scale a count by a ratio, truncating toward zero
pub fn scaled(count: usize, ratio: f64) -> usize {
    (count as f64 * ratio) as usize
}

/// Positional extractive summary.
///
/// Splits on `". "` and keeps evenly spaced sentences starting with the
/// first, so that roughly `target_len / len(text)` of the sentences remain.
/// Returns the input unchanged when the target already covers the text or
/// when there are too few sentences to sample.
pub fn extract_key_sentences(text: &str, target_len: usize) -> String {
    let total_len = text.chars().count();
    if target_len >= total_len {
        return text.to_string();
    }

    let flattened = text.replace('\n', " ");
    let sentences: Vec<&str> = flattened.split(SENTENCE_DELIMITER).collect();
    let count = sentences.len();
    if count <= MIN_SAMPLED_SENTENCES {
        return text.to_string();
    }

    let wanted = (count as f64 * target_len as f64 / total_len as f64).round() as usize;
    let keep = wanted.clamp(1, count);
    if keep == count {
        return sentences.join(SENTENCE_DELIMITER);
    }

    let step = count / keep;
    let selected: Vec<&str> = sentences
        .iter()
        .step_by(step)
        .take(keep)
        .copied()
        .collect();

    format!("{}.", selected.join(SENTENCE_DELIMITER))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEN: &str = "S0 alpha. S1 beta. S2 gamma. S3 delta. S4 epsilon. S5 zeta. S6 eta. S7 theta. S8 iota. S9 kappa";

    #[test]
    fn test_word_helpers() {
        assert_eq!(word_count("  one two\nthree  "), 3);
        assert_eq!(first_words("a b c d", 2), "a b");
        assert_eq!(first_words("a b", 10), "a b");
        assert_eq!(scaled(7, 0.8), 5);
        assert_eq!(scaled(10, 0.6), 6);
    }

    #[test]
    fn test_target_covers_text() {
        assert_eq!(extract_key_sentences(TEN, TEN.len()), TEN);
        assert_eq!(extract_key_sentences(TEN, usize::MAX), TEN);
    }

    #[test]
    fn test_short_text_unchanged() {
        let text = "One. Two. Three";
        for target in [0, 1, 5, 100] {
            assert_eq!(extract_key_sentences(text, target), text);
        }
    }

    #[test]
    fn test_short_text_keeps_newlines() {
        let text = "First line.\nSecond line";
        assert_eq!(extract_key_sentences(text, 2), text);
    }

    #[test]
    fn test_half_target_takes_every_other_sentence() {
        let out = extract_key_sentences(TEN, TEN.len() / 2);
        assert_eq!(out, "S0 alpha. S2 gamma. S4 epsilon. S6 eta. S8 iota.");
    }

    #[test]
    fn test_tiny_target_keeps_first_sentence() {
        assert_eq!(extract_key_sentences(TEN, 1), "S0 alpha.");
        assert_eq!(extract_key_sentences(TEN, 0), "S0 alpha.");
    }

    #[test]
    fn test_uneven_step() {
        // 10 sentences, keep 3 -> step 3 -> indices 0, 3, 6
        let target = (TEN.len() as f64 * 0.3) as usize;
        let out = extract_key_sentences(TEN, target);
        assert_eq!(out, "S0 alpha. S3 delta. S6 eta.");
    }

    #[test]
    fn test_newlines_flattened_when_sampling() {
        let text = "A one.\nB two. C three. D four. E five";
        let out = extract_key_sentences(text, 1);
        assert_eq!(out, "A one.");
    }
}

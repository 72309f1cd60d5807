use super::CondensationLevel;
use crate::text::{extract_key_sentences, scaled, word_count};

/// Share of the original word count kept at levels 1 through 4
const KEEP_RATIOS: [f64; 4] = [0.8, 0.5, 0.25, 0.1];

pub(super) fn condense(content: &str, level: CondensationLevel) -> String {
    let words = word_count(content);
    let ratio = match level {
        CondensationLevel::Original => return content.to_string(),
        CondensationLevel::Light => KEEP_RATIOS[0],
        CondensationLevel::Medium => KEEP_RATIOS[1],
        CondensationLevel::Heavy => KEEP_RATIOS[2],
        CondensationLevel::Severe => KEEP_RATIOS[3],
        CondensationLevel::Maximum => return format!("[Document summary - {} words]", words),
    };

    // The sampler measures its target against the text's character length.
    extract_key_sentences(content, scaled(words, ratio))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximum_reports_word_count() {
        assert_eq!(
            condense("one two three. four", CondensationLevel::Maximum),
            "[Document summary - 4 words]"
        );
    }

    #[test]
    fn test_short_document_unchanged_below_maximum() {
        let doc = "Executive summary. Background.\nConclusion";
        for level in &CondensationLevel::ALL[..5] {
            assert_eq!(condense(doc, *level), doc);
        }
    }

    #[test]
    fn test_long_document_sampled() {
        let doc = "Alpha one two. Beta three four. Gamma five six. Delta seven eight. Epsilon nine ten. Zeta eleven twelve";
        // 18 words -> light target 14 of 103 chars -> round(6 * 14 / 103) = 1 sentence
        assert_eq!(condense(doc, CondensationLevel::Light), "Alpha one two.");
        assert_eq!(condense(doc, CondensationLevel::Severe), "Alpha one two.");
    }
}

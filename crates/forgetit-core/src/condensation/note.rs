use super::CondensationLevel;
use crate::text::{first_words, scaled, word_count};

/// Word cap for severely condensed notes
const SEVERE_WORD_CAP: usize = 10;

pub(super) fn condense(content: &str, level: CondensationLevel) -> String {
    let words = word_count(content);
    let keep = match level {
        CondensationLevel::Original => return content.to_string(),
        CondensationLevel::Light => scaled(words, 0.8),
        CondensationLevel::Medium => scaled(words, 0.6),
        CondensationLevel::Heavy => scaled(words, 0.4),
        // Never longer than the heavy cut, so short notes do not grow back.
        CondensationLevel::Severe => SEVERE_WORD_CAP.min(scaled(words, 0.4)),
        CondensationLevel::Maximum => return "[Note reference]".to_string(),
    };

    first_words(content, keep)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: &str = "w1 w2 w3 w4 w5 w6 w7 w8 w9 w10 w11 w12 w13 w14 w15 w16 w17 w18 w19 w20 w21 w22 w23 w24 w25 w26 w27 w28 w29 w30";

    #[test]
    fn test_truncation_ratios() {
        assert_eq!(word_count(&condense(LONG, CondensationLevel::Light)), 24);
        assert_eq!(word_count(&condense(LONG, CondensationLevel::Medium)), 18);
        assert_eq!(word_count(&condense(LONG, CondensationLevel::Heavy)), 12);
        assert_eq!(
            condense(LONG, CondensationLevel::Severe),
            "w1 w2 w3 w4 w5 w6 w7 w8 w9 w10"
        );
        assert_eq!(condense(LONG, CondensationLevel::Maximum), "[Note reference]");
    }

    #[test]
    fn test_severe_never_exceeds_heavy_cut() {
        let twenty: Vec<String> = (1..=20).map(|i| format!("w{i}")).collect();
        let note = twenty.join(" ");
        // 40% of 20 words is 8, below the cap of 10
        assert_eq!(word_count(&condense(&note, CondensationLevel::Heavy)), 8);
        assert_eq!(word_count(&condense(&note, CondensationLevel::Severe)), 8);

        let eleven = twenty[..11].join(" ");
        assert_eq!(condense(&eleven, CondensationLevel::Severe), "w1 w2 w3 w4");
    }

    #[test]
    fn test_shopping_list() {
        let note = "Milk, eggs, bread, cheese, apples";
        assert_eq!(condense(note, CondensationLevel::Light), "Milk, eggs, bread, cheese,");
        assert_eq!(condense(note, CondensationLevel::Medium), "Milk, eggs, bread,");
        assert_eq!(condense(note, CondensationLevel::Heavy), "Milk, eggs,");
        assert_eq!(condense(note, CondensationLevel::Severe), "Milk, eggs,");
    }

    #[test]
    fn test_empty_note() {
        assert_eq!(condense("", CondensationLevel::Light), "");
        assert_eq!(condense("   ", CondensationLevel::Severe), "");
    }
}

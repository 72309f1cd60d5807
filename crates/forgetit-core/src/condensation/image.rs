use super::CondensationLevel;

/// Images are never condensed textually; each level stands for a reduced rendition.
pub(super) fn condense(content: &str, level: CondensationLevel) -> String {
    match level {
        CondensationLevel::Original => content.to_string(),
        CondensationLevel::Light => "[Image: 80% resolution]".to_string(),
        CondensationLevel::Medium => "[Image: 50% resolution]".to_string(),
        CondensationLevel::Heavy => "[Image: thumbnail]".to_string(),
        CondensationLevel::Severe => "[Image: metadata only]".to_string(),
        CondensationLevel::Maximum => "[Image reference]".to_string(),
    }
}

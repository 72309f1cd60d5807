use super::CondensationLevel;

const COMMENT_MARKERS: [&str; 2] = ["#", "//"];
const FUNCTION_PREFIXES: [&str; 5] = ["def ", "async def ", "fn ", "pub fn ", "function "];
const CLASS_PREFIXES: [&str; 3] = ["class ", "struct ", "pub struct "];

/// Lines kept after each definition at medium condensation
const BODY_CONTEXT_LINES: usize = 4;
/// Minimum prefix kept when no definitions are found
const MIN_PREFIX_LINES: usize = 5;

fn starts_with_any(line: &str, prefixes: &[&str]) -> bool {
    let trimmed = line.trim();
    prefixes.iter().any(|p| trimmed.starts_with(p))
}

/// A comment-only line long enough to carry text
fn is_comment_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.chars().count() >= 3 && COMMENT_MARKERS.iter().any(|m| trimmed.starts_with(m))
}

fn is_function(line: &str) -> bool {
    starts_with_any(line, &FUNCTION_PREFIXES)
}

fn is_class(line: &str) -> bool {
    starts_with_any(line, &CLASS_PREFIXES)
}

pub(super) fn condense(content: &str, level: CondensationLevel) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let definitions: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_function(line) || is_class(line))
        .map(|(i, _)| i)
        .collect();

    match level {
        CondensationLevel::Original => content.to_string(),
        CondensationLevel::Light => lines
            .iter()
            .filter(|line| !is_comment_line(line))
            .copied()
            .collect::<Vec<_>>()
            .join("\n"),
        CondensationLevel::Medium => outline(&lines, &definitions),
        CondensationLevel::Heavy => signatures(&lines, &definitions),
        CondensationLevel::Severe => format!(
            "[Code: {} lines, {} functions, {} classes]",
            lines.len(),
            lines.iter().filter(|l| is_function(l)).count(),
            lines.iter().filter(|l| is_class(l)).count()
        ),
        CondensationLevel::Maximum => "[Code reference]".to_string(),
    }
}

/// Each definition with the lines that follow it, or the first half of the file
fn outline(lines: &[&str], definitions: &[usize]) -> String {
    if definitions.is_empty() {
        let keep = MIN_PREFIX_LINES.max(lines.len() / 2).min(lines.len());
        return lines[..keep].join("\n");
    }

    let mut preserved = Vec::new();
    for &start in definitions {
        let end = (start + BODY_CONTEXT_LINES + 1).min(lines.len());
        preserved.extend_from_slice(&lines[start..end]);
    }
    preserved.join("\n")
}

/// Definition lines only, each marked as elided
fn signatures(lines: &[&str], definitions: &[usize]) -> String {
    if definitions.is_empty() {
        return lines
            .first()
            .map(|line| line.to_string())
            .unwrap_or_else(|| "[Code excerpt]".to_string());
    }

    definitions
        .iter()
        .map(|&i| format!("{} ...", lines[i]))
        .collect::<Vec<_>>()
        .join("\n")
}

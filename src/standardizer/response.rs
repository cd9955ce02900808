use super::ParseError;

const INDEX_SEPARATOR: &str = ". ";

/// Parse a numbered-list response into exactly `expected` names.
///
/// Rules:
/// - The whole response is trimmed; nothing left is `Empty`
/// - Blank lines between entries are skipped
/// - Each line keeps only the text after its first `". "`, trimmed
/// - A line with no `". "` fails the whole response
/// - A name count different from `expected` fails the whole response
pub fn parse_numbered_list(text: &str, expected: usize) -> Result<Vec<String>, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut names = Vec::with_capacity(expected);

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let (_, name) = line
            .split_once(INDEX_SEPARATOR)
            .ok_or_else(|| ParseError::MissingSeparator {
                line_number: idx + 1,
                line: line.to_string(),
            })?;

        names.push(name.trim().to_string());
    }

    if names.len() != expected {
        return Err(ParseError::CountMismatch {
            expected,
            actual: names.len(),
        });
    }

    Ok(names)
}

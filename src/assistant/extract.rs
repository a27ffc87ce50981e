//! Best-effort extraction of a JSON object from raw model output.

/// Extract the most plausible JSON object from `raw`.
///
/// Tries, in order: the substring from the first `{` to the last `}`; a
/// ```` ```json ```` fenced block; and finally the trimmed original text,
/// which the structural validator will then reject. Never fails.
pub fn extract_json(raw: &str) -> String {
    let trimmed = raw.trim();

    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start < end {
            return trimmed[start..=end].trim().to_string();
        }
    }

    if let Some(fenced) = extract_fenced(trimmed) {
        return fenced;
    }

    trimmed.to_string()
}

/// Pull the object out of a ```` ```json ... ``` ```` block.
fn extract_fenced(text: &str) -> Option<String> {
    let marker = text.find("```json")?;
    let body = &text[marker + "```json".len()..];
    let terminator = body.find("```")?;
    let body = &body[..terminator];
    let start = body.find('{')?;
    let end = body.rfind('}')?;
    if start < end {
        Some(body[start..=end].trim().to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_fenced_block() {
        let raw = "Sure! ```json\n{\"a\":1}\n```";
        assert_eq!(extract_json(raw), "{\"a\":1}");
    }

    #[test]
    fn extracts_between_first_and_last_brace() {
        let raw = "blah {\"x\":\"y\"} trailing";
        assert_eq!(extract_json(raw), "{\"x\":\"y\"}");
    }

    #[test]
    fn returns_trimmed_original_when_no_json_found() {
        assert_eq!(extract_json("  no json here "), "no json here");
    }

    #[test]
    fn keeps_nested_objects_intact() {
        let raw = "prefix {\"outer\":{\"inner\":2}} suffix";
        assert_eq!(extract_json(raw), "{\"outer\":{\"inner\":2}}");
    }

    #[test]
    fn fenced_block_without_object_falls_back_to_original() {
        let raw = "```json\nnothing here\n```";
        assert_eq!(extract_json(raw), "```json\nnothing here\n```");
    }
}

// crates/gateway/src/extract.rs

use serde_json::Value;

/// Removes literal markdown code-fence markers and surrounding whitespace.
/// Models routinely wrap their JSON in ```json fences even when told not to.
pub fn strip_markdown_fences(raw: &str) -> String {
    raw.trim().replace("```json", "").replace("```", "").trim().to_string()
}

/// Best-effort JSON unwrap of a completion. Any well-formed JSON value is
/// accepted; the expected keys are not checked here.
pub fn parse_json_payload(raw: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(&strip_markdown_fences(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_json_fences() {
        let cleaned = strip_markdown_fences("```json\n{\"a\": 1}\n```");
        assert_eq!(cleaned, "{\"a\": 1}");
    }

    #[test]
    fn strips_bare_fences() {
        let cleaned = strip_markdown_fences("```\n{\"a\": 1}\n```");
        assert_eq!(cleaned, "{\"a\": 1}");
    }

    #[test]
    fn leaves_unfenced_text_alone() {
        assert_eq!(strip_markdown_fences("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn parses_fenced_object() {
        let value = parse_json_payload("```json\n{\"transferFunction\":\"G(s) = 1/(RCs+1)\"}\n```")
            .unwrap();
        assert_eq!(value, json!({"transferFunction": "G(s) = 1/(RCs+1)"}));
    }

    #[test]
    fn rejects_plain_prose() {
        assert!(parse_json_payload("not json at all").is_err());
    }
}

use serde_json::Value;

/// Pulls reply text out of one known shape of a completion payload.
pub type TextExtractor = fn(&Value) -> Option<String>;

/// Extractors in priority order. The first non-empty result wins.
pub const TEXT_EXTRACTORS: &[TextExtractor] = &[
    top_level_output_text,
    first_output_content_text,
    all_output_text_parts,
];

/// Reply text of a completion payload, or `""` when no extractor finds any.
///
/// Unknown or malformed payloads are not an error here; they just produce
/// empty text.
pub fn extract_text(payload: &Value) -> String {
    extract_with(TEXT_EXTRACTORS, payload)
}

pub fn extract_with(extractors: &[TextExtractor], payload: &Value) -> String {
    extractors
        .iter()
        .find_map(|extract| extract(payload).filter(|text| !text.is_empty()))
        .unwrap_or_default()
}

/// `output_text`: the SDK's convenience aggregate.
pub fn top_level_output_text(payload: &Value) -> Option<String> {
    payload.get("output_text")?.as_str().map(str::to_string)
}

/// `output[0].content[0].text`
pub fn first_output_content_text(payload: &Value) -> Option<String> {
    payload
        .pointer("/output/0/content/0/text")?
        .as_str()
        .map(str::to_string)
}

/// Every `output[*].content[*]` part of type `output_text`, joined. Picks up
/// replies whose first output item is a reasoning block rather than a message.
pub fn all_output_text_parts(payload: &Value) -> Option<String> {
    let parts: Vec<&str> = payload
        .get("output")?
        .as_array()?
        .iter()
        .filter_map(|item| item.get("content")?.as_array())
        .flatten()
        .filter(|part| part.get("type").and_then(Value::as_str) == Some("output_text"))
        .filter_map(|part| part.get("text")?.as_str())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.concat())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_prefers_top_level_output_text() {
        let payload = json!({
            "output_text": "primary",
            "output": [{ "content": [{ "type": "output_text", "text": "fallback" }] }]
        });
        assert_eq!(extract_text(&payload), "primary");
    }

    #[test]
    fn test_falls_back_to_first_output_content() {
        let payload = json!({
            "output": [{ "content": [{ "type": "output_text", "text": "Why did..." }] }]
        });
        assert_eq!(extract_text(&payload), "Why did...");
    }

    #[test]
    fn test_empty_primary_falls_through() {
        let payload = json!({
            "output_text": "",
            "output": [{ "content": [{ "text": "from output" }] }]
        });
        assert_eq!(extract_text(&payload), "from output");
    }

    #[test]
    fn test_skips_reasoning_item_before_message() {
        let payload = json!({
            "output": [
                { "type": "reasoning", "summary": [] },
                {
                    "type": "message",
                    "content": [
                        { "type": "output_text", "text": "Hello, " },
                        { "type": "output_text", "text": "darling." }
                    ]
                }
            ]
        });
        assert_eq!(extract_text(&payload), "Hello, darling.");
    }

    #[test]
    fn test_missing_paths_yield_empty_string() {
        for payload in [
            json!({}),
            json!(null),
            json!({ "output": [] }),
            json!({ "output": "not an array" }),
            json!({ "output_text": 17 }),
            json!({ "output": [{ "content": [{ "text": null }] }] }),
        ] {
            assert_eq!(extract_text(&payload), "", "payload {payload}");
        }
    }

    #[test]
    fn test_custom_extractor_order() {
        let payload = json!({
            "output_text": "primary",
            "output": [{ "content": [{ "text": "nested" }] }]
        });
        let reversed: &[TextExtractor] = &[first_output_content_text, top_level_output_text];
        assert_eq!(extract_with(reversed, &payload), "nested");
    }
}

//! Shape validators, one per document type. Each returns the list of
//! violations as human-readable strings; an empty list means the document
//! may be deserialized and rendered. Checks and message texts mirror the
//! generator's own validation scripts so both sides agree on what a broken
//! feed looks like.

use serde_json::Value;

/// `pulse.json`: an object with an array field `items`.
pub fn pulse(doc: &Value) -> Vec<String> {
    let mut errs = Vec::new();
    if !doc.is_object() {
        errs.push("pulse.json is not an object".to_string());
    }
    if doc.is_object() && !doc["items"].is_array() {
        errs.push("pulse.json missing items[]".to_string());
    }
    errs
}

/// `editor.json`: brief text, theme list, and the memeable pick.
pub fn editor(doc: &Value) -> Vec<String> {
    let mut errs = Vec::new();
    if !doc.is_object() {
        errs.push("editor.json is not an object".to_string());
    }
    if doc.is_object() {
        if !doc["editors_brief"].is_string() {
            errs.push("editor.json missing editors_brief".to_string());
        }
        if !doc["top_themes"].is_array() {
            errs.push("editor.json missing top_themes[]".to_string());
        }
        if !doc["most_memeable"].is_object() {
            errs.push("editor.json missing most_memeable".to_string());
        }
    }
    errs
}

/// `audio.json`: latest pointer plus the episode list.
pub fn audio_index(doc: &Value) -> Vec<String> {
    let mut errs = Vec::new();
    if !doc.is_object() {
        errs.push("audio.json is not an object".to_string());
    }
    if doc.is_object() {
        if !doc["latest"].is_string() {
            errs.push("audio.json missing latest".to_string());
        }
        if !doc["items"].is_array() {
            errs.push("audio.json missing items[]".to_string());
        }
    }
    errs
}

/// `today.json`: the original client rendered this without any check; the
/// document still goes through the validate-then-render path like its
/// siblings, with the minimal defensive requirement that it is an object.
pub fn today(doc: &Value) -> Vec<String> {
    let mut errs = Vec::new();
    if !doc.is_object() {
        errs.push("today.json is not an object".to_string());
    }
    errs
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pulse_accepts_minimal_document() {
        assert!(pulse(&json!({ "items": [] })).is_empty());
        assert!(pulse(&json!({ "generated_utc": "x", "items": [{}] })).is_empty());
    }

    #[test]
    fn pulse_rejects_non_array_items() {
        let errs = pulse(&json!({ "items": "not-an-array" }));
        assert_eq!(errs, vec!["pulse.json missing items[]".to_string()]);
    }

    #[test]
    fn pulse_rejects_non_object() {
        let errs = pulse(&json!([1, 2, 3]));
        assert_eq!(errs, vec!["pulse.json is not an object".to_string()]);
    }

    #[test]
    fn editor_reports_each_missing_field() {
        let errs = editor(&json!({}));
        assert_eq!(
            errs,
            vec![
                "editor.json missing editors_brief".to_string(),
                "editor.json missing top_themes[]".to_string(),
                "editor.json missing most_memeable".to_string(),
            ]
        );
    }

    #[test]
    fn editor_accepts_complete_document() {
        let doc = json!({
            "editors_brief": "Quiet day.",
            "top_themes": ["rates", "chips"],
            "most_memeable": { "headline": "h", "link": "/x" }
        });
        assert!(editor(&doc).is_empty());
    }

    #[test]
    fn audio_index_requires_latest_and_items() {
        let errs = audio_index(&json!({ "latest": 7 }));
        assert_eq!(
            errs,
            vec![
                "audio.json missing latest".to_string(),
                "audio.json missing items[]".to_string(),
            ]
        );
        assert!(audio_index(&json!({ "latest": "a.mp3", "items": [] })).is_empty());
    }

    #[test]
    fn today_only_requires_an_object() {
        assert!(today(&json!({})).is_empty());
        assert_eq!(
            today(&json!("nope")),
            vec!["today.json is not an object".to_string()]
        );
    }
}

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// A quick-insert comment offered to the reviewer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CommentPreset {
    /// Feed-assigned identifier. Feeds use both numbers and strings.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub text: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_become_strings() {
        let presets: Vec<CommentPreset> =
            serde_json::from_str(r#"[{"id":1,"text":"Clear aims"},{"id":"b","text":"Novel"}]"#)
                .unwrap();
        assert_eq!(presets[0].id, "1");
        assert_eq!(presets[1].id, "b");
        assert_eq!(presets[1].text, "Novel");
    }
}

use serde::{Deserialize, Deserializer, de};

use crate::types::QueryParams;

/// Adds each default whose key the caller has not set already.
pub fn merge_defaults(params: &mut QueryParams, defaults: &[(&str, &str)]) {
    for (key, value) in defaults {
        params
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }
}

pub fn parse_playcount(raw: &str) -> Result<u64, String> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid playcount {:?}: {}", raw, e))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Number(u64),
    String(String),
}

pub fn deserialize_playcount<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Number(n) => Ok(n),
        StringOrNumber::String(s) => parse_playcount(&s).map_err(de::Error::custom),
    }
}

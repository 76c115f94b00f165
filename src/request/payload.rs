use std::fmt;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value;
use url::form_urlencoded;

/// Body or query input: raw text, or key/value parameters to be encoded.
///
/// Parameters are encoded as `application/x-www-form-urlencoded` in the
/// order given: reserved characters are percent-escaped, spaces become `+`,
/// pairs are joined with `&`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Text used verbatim.
    Raw(String),
    /// Ordered parameters.
    Params(Vec<(String, String)>),
}

impl Payload {
    /// Returns the encoded text.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Raw(raw) => raw.clone(),
            Self::Params(params) => form_urlencoded::Serializer::new(String::new())
                .extend_pairs(params.iter())
                .finish(),
        }
    }
}

impl From<&str> for Payload {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for Payload {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<Vec<(String, String)>> for Payload {
    fn from(params: Vec<(String, String)>) -> Self {
        Self::Params(params)
    }
}

impl From<&[(&str, &str)]> for Payload {
    fn from(params: &[(&str, &str)]) -> Self {
        Self::Params(
            params
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                .collect(),
        )
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Payload {
    fn from(params: [(&str, &str); N]) -> Self {
        Self::from(params.as_slice())
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PayloadVisitor)
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = Payload;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a map of parameters")
    }

    fn visit_str<E: de::Error>(self, raw: &str) -> Result<Payload, E> {
        Ok(Payload::Raw(raw.to_string()))
    }

    fn visit_string<E: de::Error>(self, raw: String) -> Result<Payload, E> {
        Ok(Payload::Raw(raw))
    }

    // Entries arrive in document order, which is the encoding order.
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Payload, A::Error> {
        let mut params = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            match value {
                Value::Array(items) => {
                    params.extend(items.into_iter().map(|item| (key.clone(), scalar_text(item))));
                }
                other => params.push((key, scalar_text(other))),
            }
        }
        Ok(Payload::Params(params))
    }
}

fn scalar_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_params_encode_in_order() {
        let payload = Payload::from([("a", "1"), ("b", "2")]);
        assert_eq!(payload.encode(), "a=1&b=2");
    }

    #[test]
    fn test_payload_params_escape_reserved_and_space() {
        let payload = Payload::from([("q", "rust lang"), ("x&y", "a=b/c")]);
        assert_eq!(payload.encode(), "q=rust+lang&x%26y=a%3Db%2Fc");
    }

    #[test]
    fn test_payload_raw_is_verbatim() {
        assert_eq!(Payload::from("a=1&b=2").encode(), "a=1&b=2");
        assert_eq!(Payload::from(String::from("{\"json\":1}")).encode(), "{\"json\":1}");
    }

    #[test]
    fn test_payload_empty_params() {
        assert_eq!(Payload::Params(Vec::new()).encode(), "");
    }

    #[test]
    fn test_payload_deserialize_string() {
        let payload: Payload = serde_json::from_str("\"raw body\"").unwrap();
        assert_eq!(payload, Payload::Raw("raw body".to_string()));
    }

    #[test]
    fn test_payload_deserialize_map_keeps_document_order() {
        let payload: Payload =
            serde_json::from_str(r#"{"zeta": "1", "alpha": 2, "flag": true, "none": null}"#)
                .unwrap();
        assert_eq!(payload.encode(), "zeta=1&alpha=2&flag=true&none=");
    }

    #[test]
    fn test_payload_deserialize_array_repeats_key() {
        let payload: Payload = serde_json::from_str(r#"{"tag": ["a", "b"]}"#).unwrap();
        assert_eq!(payload.encode(), "tag=a&tag=b");
    }

    #[test]
    fn test_payload_deserialize_rejects_number() {
        assert!(serde_json::from_str::<Payload>("42").is_err());
    }
}

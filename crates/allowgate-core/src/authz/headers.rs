use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Read-only view of a request's headers (name -> value).
///
/// Keys are kept exactly as supplied; no case folding happens here. When the
/// source carries the same key more than once the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequestHeaders {
    map: HashMap<String, String>,
}

impl RequestHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    fn insert_first(&mut self, name: String, value: String) {
        self.map.entry(name).or_insert(value);
    }
}

impl<K, V> FromIterator<(K, V)> for RequestHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut out = Self::new();
        for (k, v) in iter {
            out.insert_first(k.into(), v.into());
        }
        out
    }
}

impl<'de> Deserialize<'de> for RequestHeaders {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HeadersVisitor;

        impl<'de> Visitor<'de> for HeadersVisitor {
            type Value = RequestHeaders;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of header names to string values")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut out = RequestHeaders::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    out.insert_first(k, v);
                }
                Ok(out)
            }
        }

        deserializer.deserialize_map(HeadersVisitor)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn first_occurrence_wins() {
        let h: RequestHeaders = [("X-Api-Key", "first"), ("X-Api-Key", "second")]
            .into_iter()
            .collect();
        assert_eq!(h.len(), 1);
        assert_eq!(h.get("X-Api-Key"), Some("first"));
    }

    #[test]
    fn json_duplicate_keys_keep_first() {
        let h: RequestHeaders =
            serde_json::from_str(r#"{"Auth":"one","Auth":"two","Other":"x"}"#).unwrap();
        assert_eq!(h.get("Auth"), Some("one"));
        assert_eq!(h.get("Other"), Some("x"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let h: RequestHeaders = [("x-api-key", "v")].into_iter().collect();
        assert!(h.contains("x-api-key"));
        assert!(!h.contains("X-Api-Key"));
    }
}

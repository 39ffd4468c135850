/// Tolerant list payloads
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A list of items as returned by a list endpoint.
///
/// The backend is not consistent about pagination: some endpoints wrap items
/// in `{ "results": [...], "count": .. }`, others return a bare array, and
/// placeholder endpoints return an unrelated object. The first two are read
/// as-is; anything else is an empty page.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub results: Vec<T>,
    /// Total across all pages, when the backend reports it
    pub count: Option<u64>,
    pub next: Option<String>,
    pub previous: Option<String>,
}

impl<T> Page<T> {
    /// Page holding exactly `results`
    pub fn from_items(results: Vec<T>) -> Self {
        Self {
            results,
            count: None,
            next: None,
            previous: None,
        }
    }

    /// Total number of items, falling back to this page's length
    pub fn total(&self) -> u64 {
        self.count.unwrap_or(self.results.len() as u64)
    }

    /// Whether the backend advertised a following page
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Take the items
    pub fn into_items(self) -> Vec<T> {
        self.results
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::from_items(Vec::new())
    }
}

impl<'de, T> Deserialize<'de> for Page<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Array(items) => {
                let results = serde_json::from_value(Value::Array(items)).map_err(D::Error::custom)?;
                Ok(Self::from_items(results))
            }
            Value::Object(mut map) => match map.remove("results") {
                Some(results) => {
                    let results = serde_json::from_value(results).map_err(D::Error::custom)?;
                    Ok(Self {
                        results,
                        count: map.get("count").and_then(Value::as_u64),
                        next: map.get("next").and_then(Value::as_str).map(str::to_string),
                        previous: map
                            .get("previous")
                            .and_then(Value::as_str)
                            .map(str::to_string),
                    })
                }
                None => Ok(Self::default()),
            },
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_shape() {
        let json = r#"{"count": 42, "next": "http://x/api/jobs/?page=2", "previous": null, "results": [1, 2, 3]}"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.results, vec![1, 2, 3]);
        assert_eq!(page.total(), 42);
        assert!(page.has_next());
        assert!(page.previous.is_none());
    }

    #[test]
    fn test_bare_array_shape() {
        let page: Page<u32> = serde_json::from_str("[4, 5]").unwrap();
        assert_eq!(page.results, vec![4, 5]);
        assert_eq!(page.total(), 2);
        assert!(!page.has_next());
    }

    #[test]
    fn test_unrelated_object_is_empty() {
        let page: Page<u32> = serde_json::from_str(r#"{"message": "Jobs API is working"}"#).unwrap();
        assert!(page.results.is_empty());

        let page: Page<u32> = serde_json::from_str("null").unwrap();
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_malformed_items_are_an_error() {
        let result: Result<Page<u32>, _> = serde_json::from_str(r#"{"results": ["nope"]}"#);
        assert!(result.is_err());
    }
}

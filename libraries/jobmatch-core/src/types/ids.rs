/// ID types for jobmatch entities
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Backends hand out either UUID strings or integer primary keys; both are
/// kept as strings on the client.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Unsigned(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Unsigned(n) => n.to_string(),
    })
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the inner string
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// First `len` characters, as shown in listings
            pub fn short(&self, len: usize) -> &str {
                match self.0.char_indices().nth(len) {
                    Some((idx, _)) => &self.0[..idx],
                    None => &self.0,
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                string_or_number(deserializer).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Resume identifier
    ResumeId
);

string_id!(
    /// Job posting identifier
    JobId
);

string_id!(
    /// Job application identifier
    ApplicationId
);

string_id!(
    /// User account identifier
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_string_and_number() {
        let from_text: JobId = serde_json::from_str("\"a1b2c3d4-e5f6\"").unwrap();
        assert_eq!(from_text.as_str(), "a1b2c3d4-e5f6");

        let from_int: ResumeId = serde_json::from_str("42").unwrap();
        assert_eq!(from_int.as_str(), "42");
    }

    #[test]
    fn test_short_id() {
        let id = JobId::new("a1b2c3d4-e5f6-7890");
        assert_eq!(id.short(8), "a1b2c3d4");

        let tiny = JobId::new("7");
        assert_eq!(tiny.short(8), "7");
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Descriptive labels of a server.
///
/// Every constructor runs the same normalization: entries are trimmed and
/// empty entries dropped, original order kept. Deserialization accepts a
/// comma separated string, an array, or any other JSON value (which yields no
/// tags).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Tags(
            tags.into_iter()
                .map(|tag| tag.as_ref().trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
        )
    }

    pub fn from_delimited(raw: &str) -> Self {
        Tags::new(raw.split(','))
    }

    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => Tags::new(items.iter().filter_map(Value::as_str)),
            Value::String(raw) => Tags::from_delimited(raw),
            _ => Tags::default(),
        }
    }

    /// At most `limit` leading tags, used where space is tight (cards).
    pub fn first(&self, limit: usize) -> &[String] {
        &self.0[..self.0.len().min(limit)]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for Tags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Tags::from_value(&value))
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

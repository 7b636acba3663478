use serde::{Deserialize, Deserializer, Serialize};

/// A saved snapshot of a listing's display fields.
///
/// The record is type-erased: jobs, properties, services and events are all
/// flattened into this one shape, and nothing in the persisted JSON says which
/// kind of listing an entry came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkedItem {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Always finite once stored: the bookmark store coerces NaN and
    /// infinities to 0, since JSON has no representation for them.
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub posted_date: String,
}

impl BookmarkedItem {
    /// Creates an item with only an id and title; every other field is empty.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Returns true if `query` appears (case-insensitively) in any of the
    /// free-text display fields.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        [&self.title, &self.description, &self.location, &self.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Extracts the first numeric amount from a display price.
///
/// `"$75/hour"` gives 75, `"$1,200 - $1,500"` gives 1200. Text without any
/// digits gives 0.
pub fn parse_amount(text: &str) -> f64 {
    let mut digits = String::new();
    let mut seen_dot = false;
    let mut started = false;

    for c in text.chars() {
        if c.is_ascii_digit() {
            started = true;
            digits.push(c);
        } else if started && c == ',' {
            // thousands separator
        } else if started && c == '.' && !seen_dot {
            seen_dot = true;
            digits.push(c);
        } else if started {
            break;
        }
    }

    digits.trim_end_matches('.').parse().unwrap_or(0.0)
}

/// Accepts a JSON number, a display string such as `"$50/hr"`, or anything
/// else (which decodes as 0).
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => parse_amount(&s),
        _ => 0.0,
    })
}

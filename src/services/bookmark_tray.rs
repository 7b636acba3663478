// Classifieds Bookmark Tray
// View model for the header's saved-items dropdown.

use serde::Serialize;

use crate::types::bookmark::BookmarkedItem;

pub const TRAY_HEADING: &str = "Saved Items";
pub const TRAY_EMPTY_MESSAGE: &str = "No items bookmarked.";

/// One row of the tray.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrayEntry {
    pub id: String,
    pub title: String,
    pub image: String,
    /// `"{location} • ${price}"`
    pub subtitle: String,
}

/// The whole tray, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkTray {
    pub heading: String,
    pub entries: Vec<TrayEntry>,
    /// Set only when there are no entries.
    pub empty_message: Option<String>,
}

impl BookmarkTray {
    pub fn from_items(items: &[BookmarkedItem]) -> Self {
        let entries: Vec<TrayEntry> = items
            .iter()
            .map(|item| TrayEntry {
                id: item.id.clone(),
                title: item.title.clone(),
                image: item.image.clone(),
                subtitle: format!("{} \u{2022} ${}", item.location, format_price(item.price)),
            })
            .collect();

        let empty_message = entries.is_empty().then(|| TRAY_EMPTY_MESSAGE.to_string());

        Self {
            heading: TRAY_HEADING.to_string(),
            entries,
            empty_message,
        }
    }
}

/// Formats a price with comma thousands separators and at most three
/// fraction digits, trailing zeros dropped: `1250.5` → `"1,250.5"`.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let scaled = (value.abs() * 1000.0).round() as u64;
    let whole = scaled / 1000;
    let fraction = scaled % 1000;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && scaled != 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{}{}", sign, grouped)
    } else {
        let fraction = format!("{:03}", fraction);
        format!("{}{}.{}", sign, grouped, fraction.trim_end_matches('0'))
    }
}

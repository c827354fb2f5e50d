use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use yew::{Html, ToHtml, html};

/// A UTC instant as reported by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Human-readable date used on the profile card, e.g. `March 8, 2025`.
    #[must_use]
    pub fn long_date(&self) -> String {
        self.0.format("%B %-d, %Y").to_string()
    }
}

impl ToHtml for Timestamp {
    fn to_html(&self) -> Html {
        html! { self.0.format("%Y-%m-%d %H:%M").to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_formatting() {
        let dt = Utc.with_ymd_and_hms(2025, 3, 8, 14, 30, 0).unwrap();
        let timestamp = Timestamp(dt);

        assert_eq!(timestamp.to_html(), html! { "2025-03-08 14:30" });
        assert_eq!(timestamp.long_date(), "March 8, 2025");
    }

    #[test]
    fn test_timestamp_accepts_millisecond_precision() {
        let deserialized: Timestamp =
            serde_json::from_str("\"2024-11-02T09:15:27.481Z\"").unwrap();

        assert_eq!(
            deserialized.0.timestamp_millis(),
            Utc.with_ymd_and_hms(2024, 11, 2, 9, 15, 27).unwrap().timestamp_millis() + 481
        );
    }
}

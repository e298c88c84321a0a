use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotSearchEntry {
    pub rank: u32,
    pub title: String,
    pub summary: Option<String>,
    pub hot_score: Option<HotScore>,
    #[serde(rename = "url")]
    pub detail_url: Option<String>,
}

/// Popularity as shown on the board. Plain digit strings become numbers,
/// anything else (e.g. "490万") is kept as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HotScore {
    Number(u64),
    Text(String),
}

impl HotScore {
    pub fn parse(raw: &str) -> Option<HotScore> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        match raw.parse::<u64>() {
            Ok(score) => Some(HotScore::Number(score)),
            Err(_) => Some(HotScore::Text(raw.to_string())),
        }
    }
}

/// Trimmed text, or `None` when nothing is left.
pub fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_scores_become_numbers() {
        assert_eq!(HotScore::parse(" 4976543 "), Some(HotScore::Number(4976543)));
        assert_eq!(
            HotScore::parse("490万"),
            Some(HotScore::Text("490万".to_string()))
        );
        assert_eq!(HotScore::parse("   "), None);
    }

    #[test]
    fn serializes_detail_url_as_url() {
        let entry = HotSearchEntry {
            rank: 1,
            title: "title".to_string(),
            summary: None,
            hot_score: Some(HotScore::Number(12)),
            detail_url: Some("https://www.baidu.com/s?wd=title".to_string()),
        };

        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["url"], "https://www.baidu.com/s?wd=title");
        assert_eq!(json["hot_score"], 12);
        assert!(json["summary"].is_null());
    }
}

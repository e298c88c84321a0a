use anyhow::Error;
use chrono::{DateTime, Utc};
use chrono_tz::{Asia::Shanghai, Tz};
use serde::{Deserialize, Serialize};

use super::hot_search_entry::HotSearchEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub captured_at: DateTime<Tz>,
    pub items: Vec<HotSearchEntry>,
}

/// On-disk shape of a snapshot file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub date: String,
    pub generated_at: String,
    pub items: Vec<HotSearchEntry>,
}

impl Snapshot {
    pub fn new(captured_at: DateTime<Tz>, items: Vec<HotSearchEntry>) -> Snapshot {
        Snapshot { captured_at, items }
    }

    pub fn now(items: Vec<HotSearchEntry>) -> Snapshot {
        Snapshot::new(Utc::now().with_timezone(&Shanghai), items)
    }

    /// Capture date in Beijing time, `YYYY-MM-DD`.
    pub fn date(&self) -> String {
        self.captured_at.format("%Y-%m-%d").to_string()
    }

    pub fn date_suffix(&self) -> String {
        self.captured_at.format("%Y%m%d").to_string()
    }

    pub fn to_document(&self) -> SnapshotDocument {
        SnapshotDocument {
            date: self.date(),
            generated_at: self.captured_at.to_rfc3339(),
            items: self.items.clone(),
        }
    }

    pub fn from_document(document: SnapshotDocument) -> Result<Snapshot, Error> {
        let captured_at = DateTime::parse_from_rfc3339(&document.generated_at)?;

        Ok(Snapshot::new(
            captured_at.with_timezone(&Shanghai),
            document.items,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_uses_beijing_time() {
        // 2024-03-01 17:30 UTC is already March 2nd in Beijing
        let captured_at = Utc
            .with_ymd_and_hms(2024, 3, 1, 17, 30, 0)
            .unwrap()
            .with_timezone(&Shanghai);
        let snapshot = Snapshot::new(captured_at, vec![]);

        assert_eq!(snapshot.date(), "2024-03-02");
        assert_eq!(snapshot.date_suffix(), "20240302");
        assert!(snapshot.to_document().generated_at.ends_with("+08:00"));
    }

    #[test]
    fn document_converts_back() {
        let captured_at = Shanghai.with_ymd_and_hms(2024, 5, 20, 8, 0, 0).unwrap();
        let snapshot = Snapshot::new(captured_at, vec![]);

        let restored = Snapshot::from_document(snapshot.to_document()).unwrap();

        assert_eq!(restored, snapshot);
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Error;
use log::info;

use crate::errors::CrawlError;
use crate::models::snapshot::{Snapshot, SnapshotDocument};
use crate::utils::consts::LATEST_FILE_NAME;
use crate::utils::file_utils::{ensure_directory, write_atomically};

pub struct SnapshotRepository {
    data_dir: PathBuf,
    source: String,
}

impl SnapshotRepository {
    pub fn new(data_dir: impl Into<PathBuf>, source: &str) -> SnapshotRepository {
        SnapshotRepository {
            data_dir: data_dir.into(),
            source: source.to_string(),
        }
    }

    pub fn daily_path(&self, snapshot: &Snapshot) -> PathBuf {
        self.data_dir
            .join(format!("{}-{}.json", self.source, snapshot.date_suffix()))
    }

    pub fn latest_path(&self) -> PathBuf {
        self.data_dir.join(LATEST_FILE_NAME)
    }

    /// Writes the dated snapshot, then points `latest.json` at the same
    /// content. Returns the dated path.
    pub fn save(&self, snapshot: &Snapshot) -> Result<PathBuf, CrawlError> {
        ensure_directory(&self.data_dir)?;

        let mut json = serde_json::to_vec_pretty(&snapshot.to_document()).map_err(|err| {
            CrawlError::filesystem(&self.data_dir, std::io::Error::from(err))
        })?;
        json.push(b'\n');

        let daily_path = self.daily_path(snapshot);
        write_atomically(&daily_path, &json)?;
        write_atomically(&self.latest_path(), &json)?;

        info!(
            "Saved {} hot search items to {}",
            snapshot.items.len(),
            daily_path.display()
        );

        Ok(daily_path)
    }

    pub fn load(&self, path: &Path) -> Result<Snapshot, Error> {
        let raw = fs::read_to_string(path)?;
        let document = serde_json::from_str::<SnapshotDocument>(&raw)?;

        Snapshot::from_document(document)
    }

    pub fn load_latest(&self) -> Result<Snapshot, Error> {
        self.load(&self.latest_path())
    }
}

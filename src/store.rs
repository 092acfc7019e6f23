use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::error::{Result, WatchError};

/// Identifiers of listings that have already been notified
pub type SeenSet = BTreeSet<String>;

#[derive(Debug, Serialize, Deserialize)]
struct SeenRecord {
    seen_ids: Vec<String>,
}

/// Flat JSON file holding the seen-set between runs
pub struct SeenStore {
    path: PathBuf,
}

impl SeenStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted set. A missing file or a record that does not
    /// parse yields an empty set.
    pub async fn load(&self) -> Result<SeenSet> {
        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No state file at {}, starting fresh", self.path.display());
                return Ok(SeenSet::new());
            }
            Err(source) => return Err(self.state_error(source)),
        };

        let seen = parse_seen(&content).unwrap_or_else(|| {
            warn!(
                "State file {} is malformed, treating as empty",
                self.path.display()
            );
            SeenSet::new()
        });

        info!("Loaded {} seen listing ids", seen.len());
        Ok(seen)
    }

    /// Overwrite the persisted set. Writes go to a sibling temp file that is
    /// renamed into place.
    pub async fn save(&self, seen: &SeenSet) -> Result<()> {
        let record = SeenRecord {
            seen_ids: seen.iter().cloned().collect(),
        };
        let json = serde_json::to_string(&record)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.state_error(e))?;
        }

        let mut temp_name = self.path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| self.state_error(e))?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|e| self.state_error(e))?;
        file.flush().await.map_err(|e| self.state_error(e))?;
        drop(file);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| self.state_error(e))?;

        debug!("Saved {} seen ids to {}", seen.len(), self.path.display());
        Ok(())
    }

    fn state_error(&self, source: std::io::Error) -> WatchError {
        WatchError::State {
            path: self.path.clone(),
            source,
        }
    }
}

/// Extract `seen_ids` from a persisted record. Non-string entries are
/// skipped; anything structurally wrong, invalid UTF-8 included, is `None`.
fn parse_seen(content: &[u8]) -> Option<SeenSet> {
    let value: Value = serde_json::from_slice(content).ok()?;
    let ids = value.get("seen_ids")?.as_array()?;
    Some(
        ids.iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
    )
}

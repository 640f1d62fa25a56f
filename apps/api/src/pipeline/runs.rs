//! Run log — offline runs append their output to a JSON array on disk.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    pub run_id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub output: Value,
}

impl RunRecord {
    pub fn new<T: Serialize>(run_id: Uuid, output: &T) -> Result<Self> {
        Ok(RunRecord {
            run_id,
            recorded_at: Utc::now(),
            output: serde_json::to_value(output).context("Failed to serialize run output")?,
        })
    }
}

/// Appends `record` to the array stored at `path` and returns the new length.
/// A missing or unreadable file starts a fresh log. The file is replaced atomically.
pub fn append_run(path: &Path, record: &RunRecord) -> Result<usize> {
    let mut runs = load_runs(path);
    runs.push(serde_json::to_value(record).context("Failed to serialize run record")?);

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    serde_json::to_writer_pretty(&mut tmp, &runs).context("Failed to write run log")?;
    tmp.write_all(b"\n")?;
    tmp.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    info!(run_id = %record.run_id, "Run appended to {} ({} total)", path.display(), runs.len());
    Ok(runs.len())
}

/// Existing entries, or none when the file is absent or is not a JSON array.
pub fn load_runs(path: &Path) -> Vec<Value> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return Vec::new(),
    };
    match serde_json::from_str::<Vec<Value>>(&raw) {
        Ok(runs) => runs,
        Err(e) => {
            warn!("Run log {} is not a JSON array ({e}); starting a new log", path.display());
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_append_creates_then_extends_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs.json");

        let first = RunRecord::new(Uuid::new_v4(), &json!({"company_name": "Acme"})).unwrap();
        let second = RunRecord::new(Uuid::new_v4(), &json!({"company_name": "Globex"})).unwrap();
        assert_eq!(append_run(&path, &first).unwrap(), 1);
        assert_eq!(append_run(&path, &second).unwrap(), 2);

        let runs = load_runs(&path);
        assert_eq!(runs[1]["output"]["company_name"], "Globex");
        let parsed: RunRecord = serde_json::from_value(runs[0].clone()).unwrap();
        assert_eq!(parsed, first);
    }

    #[test]
    fn test_corrupt_log_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("runs.json");
        std::fs::write(&path, "{ not json").unwrap();

        let record = RunRecord::new(Uuid::new_v4(), &json!({"ok": true})).unwrap();
        assert_eq!(append_run(&path, &record).unwrap(), 1);
        assert_eq!(load_runs(&path).len(), 1);
    }

    #[test]
    fn test_recorded_at_is_rfc3339() {
        let record = RunRecord::new(Uuid::nil(), &json!({})).unwrap();
        let value = serde_json::to_value(&record).unwrap();
        let stamp = value["recorded_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok());
    }
}

pub mod filesystem;
mod lenient;
pub mod raw;

use crate::error::{HealthError, Result};
use crate::types::profile::ProfileSnapshot;
use filesystem::{has_json_extension, list_files, sha256_hex};
use raw::RawSnapshot;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct LoadedSnapshot {
    pub path: PathBuf,
    pub sha256: String,
    pub snapshot: ProfileSnapshot,
}

/// Resolves a CLI path to the snapshot files it names: the file itself, or
/// every `*.json` below a directory in path order.
pub fn discover(path: &Path) -> Result<Vec<PathBuf>> {
    if !path.exists() {
        return Err(HealthError::SnapshotNotFound(path.display().to_string()));
    }
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let files = list_files(path)
        .into_iter()
        .filter(|file| {
            let keep = has_json_extension(file);
            if !keep {
                warn!(file = %file.display(), "skipping non-snapshot file");
            }
            keep
        })
        .collect::<Vec<_>>();

    if files.is_empty() {
        return Err(HealthError::NoSnapshots(path.display().to_string()));
    }
    Ok(files)
}

pub fn load_snapshot(path: &Path) -> Result<LoadedSnapshot> {
    let text = std::fs::read_to_string(path)?;
    let snapshot = parse_snapshot(&text).map_err(|e| match e {
        HealthError::Json(e) => HealthError::SnapshotParse(format!("{}: {}", path.display(), e)),
        other => other,
    })?;

    info!(
        file = %path.display(),
        reviews = snapshot.reviews.len(),
        posts = snapshot.posts.len(),
        media = snapshot.media.len(),
        questions = snapshot.questions.len(),
        "snapshot loaded"
    );

    Ok(LoadedSnapshot {
        path: path.to_path_buf(),
        sha256: sha256_hex(text.as_bytes()),
        snapshot,
    })
}

pub fn parse_snapshot(text: &str) -> Result<ProfileSnapshot> {
    let raw: RawSnapshot = serde_json::from_str(text)?;
    Ok(ProfileSnapshot::from(raw))
}

//! JSON snapshot persistence for the engine

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::CertificationEngine;
use crate::errors::{CertifyError, CertifyResult};

/// Current on-disk snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

const SNAPSHOT_FILE: &str = "certification_snapshot.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedSnapshot {
    version: u32,
    engine: CertificationEngine,
}

/// Whole-state snapshot file, replaced atomically on save
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Store under `data_dir`, creating the directory if needed
    pub fn new<P: AsRef<Path>>(data_dir: P) -> CertifyResult<Self> {
        fs::create_dir_all(&data_dir).map_err(storage_err)?;
        Ok(Self {
            path: data_dir.as_ref().join(SNAPSHOT_FILE),
        })
    }

    /// Store at an exact file path
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// `None` when no snapshot has been written yet
    pub fn load(&self) -> CertifyResult<Option<CertificationEngine>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read(&self.path).map_err(storage_err)?;
        let snap: PersistedSnapshot = serde_json::from_slice(&data).map_err(|e| {
            CertifyError::Storage(format!("corrupt snapshot {}: {}", self.path.display(), e))
        })?;
        if snap.version != SNAPSHOT_VERSION {
            return Err(CertifyError::Storage(format!(
                "unsupported snapshot version {} (expected {})",
                snap.version, SNAPSHOT_VERSION
            )));
        }
        tracing::debug!(
            "Loaded snapshot {} ({} assets)",
            self.path.display(),
            snap.engine.asset_count()
        );
        Ok(Some(snap.engine))
    }

    pub fn save(&self, engine: &CertificationEngine) -> CertifyResult<()> {
        let snap = PersistedSnapshot {
            version: SNAPSHOT_VERSION,
            engine: engine.clone(),
        };
        let data = serde_json::to_vec_pretty(&snap).map_err(storage_err)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(storage_err)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, data).map_err(storage_err)?;
        fs::rename(&tmp_path, &self.path).map_err(storage_err)?;
        tracing::debug!("Saved snapshot {}", self.path.display());
        Ok(())
    }
}

fn storage_err<E: std::fmt::Display>(e: E) -> CertifyError {
    CertifyError::Storage(e.to_string())
}

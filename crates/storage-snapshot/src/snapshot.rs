//! Snapshot loading.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono_tz::Tz;
use log::info;
use salesboard_core::goals::SalesGoal;
use salesboard_core::profiles::Profile;
use salesboard_core::sales::SaleRecord;
use salesboard_core::Result;
use serde::Deserialize;

use crate::errors::StorageError;
use crate::goals::GoalRow;
use crate::profiles::ProfileRow;
use crate::sales::SaleRow;

/// Raw file layout: one array per upstream table.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SnapshotFile {
    profiles: Vec<ProfileRow>,
    sales_goals: Vec<GoalRow>,
    sales: Vec<SaleRow>,
}

/// Validated, domain-typed contents of a snapshot.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub profiles: Vec<Profile>,
    pub goals: Vec<SalesGoal>,
    pub sales: Vec<SaleRecord>,
}

impl Snapshot {
    /// Parses a snapshot document. Timestamps carrying an offset are converted
    /// to local time in `tz`; naive timestamps are taken as already local.
    pub fn from_json_str(raw: &str, tz: Tz) -> std::result::Result<Self, StorageError> {
        let file: SnapshotFile = serde_json::from_str(raw)?;

        let profiles = file
            .profiles
            .into_iter()
            .map(ProfileRow::into_domain)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let goals = file
            .sales_goals
            .into_iter()
            .map(GoalRow::into_domain)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let sales = file
            .sales
            .into_iter()
            .map(|row| row.into_domain(tz))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Snapshot {
            profiles,
            goals,
            sales,
        })
    }
}

/// Shared, read-only handle to a loaded snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    snapshot: Arc<Snapshot>,
}

impl SnapshotStore {
    pub fn new(snapshot: Snapshot) -> Self {
        SnapshotStore {
            snapshot: Arc::new(snapshot),
        }
    }

    /// Reads and validates the snapshot at `path`.
    pub fn load(path: impl AsRef<Path>, tz: Tz) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(StorageError::from)?;
        let snapshot = Snapshot::from_json_str(&raw, tz)?;
        info!(
            "Loaded snapshot {}: {} profiles, {} goals, {} sales",
            path.display(),
            snapshot.profiles.len(),
            snapshot.goals.len(),
            snapshot.sales.len()
        );
        Ok(Self::new(snapshot))
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }
}

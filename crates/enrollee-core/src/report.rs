//! Run reports describing what a pipeline run read and wrote

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Summary of a completed pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// When the run started
    pub started: DateTime<Utc>,
    /// Input file that was processed
    pub input: PathBuf,
    /// Number of records decoded from the input
    pub records_read: usize,
    /// One entry per insurance group written, in output order
    pub groups: Vec<GroupReport>,
}

/// Summary of one written group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupReport {
    /// Insurance value naming the group
    pub insurance: String,
    /// Records in the group before merging
    pub records_in: usize,
    /// Records written after merging
    pub records_out: usize,
    /// File the group was written to
    pub output_path: PathBuf,
}

impl RunReport {
    /// Create an empty report stamped with the current time
    pub fn new<P: AsRef<Path>>(input: P, records_read: usize) -> Self {
        Self {
            started: Utc::now(),
            input: input.as_ref().to_path_buf(),
            records_read,
            groups: Vec::new(),
        }
    }

    /// Total number of records written across all groups
    pub fn records_written(&self) -> usize {
        self.groups.iter().map(|g| g.records_out).sum()
    }

    /// Number of duplicate records dropped by merging
    pub fn duplicates_dropped(&self) -> usize {
        self.records_read - self.records_written()
    }

    /// Save the report as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

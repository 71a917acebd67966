//! Backup entity: one backup run of an agent.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A backup run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backup {
    pub agent_id: String,
    pub backup_id: String,
    /// Absent while the backup is still running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub error_code: i64,
    #[serde(default)]
    pub error_message: String,
    /// Set once the backup produced a snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    pub started_at: DateTime<Utc>,
    pub status: BackupStatus,
}

/// Lifecycle state of a backup run.
///
/// Wire values are lowercase and matched exactly. Anything else, including a
/// differently cased known value, is kept verbatim in `Other` so it
/// serializes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupStatus {
    Pending,
    Started,
    Succeeded,
    Failed,
    Other(String),
}

impl BackupStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Started => "started",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Other(s) => s,
        }
    }

    /// Whether the backup has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

impl From<&str> for BackupStatus {
    fn from(value: &str) -> Self {
        match value {
            "pending" => Self::Pending,
            "started" => Self::Started,
            "succeeded" => Self::Succeeded,
            "failed" => Self::Failed,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl fmt::Display for BackupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BackupStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BackupStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(BackupStatus::from(raw.as_str()))
    }
}

/// Body for starting a backup of an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartBackupPayload {
    pub agent_id: String,
}

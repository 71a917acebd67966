//! File restore entity: a mounted snapshot whose files can be browsed and downloaded.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A file restore session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRestore {
    pub agent_id: String,
    pub created_at: DateTime<Utc>,
    pub device_id: String,
    pub expires_at: DateTime<Utc>,
    pub file_restore_id: String,
    pub snapshot_id: String,
}

/// Body for creating a file restore from a snapshot stored on a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRestorePayload {
    pub device_id: String,
    pub snapshot_id: String,
}

/// One entry returned when browsing a file restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRestoreData {
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub size: u64,
    #[serde(rename = "type")]
    pub file_type: FileType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symlink_target_path: Option<String>,
    #[serde(default)]
    pub download_uris: Vec<DownloadUri>,
}

/// Kind of a browsed entry.
///
/// Entry kinds this client does not know about are kept in `Other` so one
/// unusual entry does not fail the whole page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileType {
    File,
    Dir,
    Symlink,
    Other(String),
}

impl FileType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::File => "file",
            Self::Dir => "dir",
            Self::Symlink => "symlink",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for FileType {
    fn from(value: &str) -> Self {
        match value {
            "file" => Self::File,
            "dir" => Self::Dir,
            "symlink" => Self::Symlink,
            _ => Self::Other(value.to_string()),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FileType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FileType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(FileType::from(raw.as_str()))
    }
}

/// A link the entry can be downloaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadUri {
    #[serde(rename = "type")]
    pub uri_type: String,
    pub uri: String,
}

impl FileRestoreData {
    pub fn is_dir(&self) -> bool {
        self.file_type == FileType::Dir
    }
}

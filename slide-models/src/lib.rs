//! Slide Models - data types for the Slide REST API resources.
//!
//! All types mirror the JSON the API sends and accepts. Field names are
//! snake_case on the wire and timestamps are RFC 3339 strings decoded into
//! `chrono::DateTime<Utc>`.

pub mod agent;
pub mod backup;
pub mod restore;

pub use agent::{
    Address, Agent, AgentAutoPairPayload, AgentAutoPairResponse, AgentPairPayload,
    AgentUpdatePayload,
};
pub use backup::{Backup, BackupStatus, StartBackupPayload};
pub use restore::{DownloadUri, FileRestore, FileRestoreData, FileRestorePayload, FileType};

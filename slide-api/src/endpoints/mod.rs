//! Resource clients, one per API entity.
//!
//! Each client borrows the `SlideClient` and only selects paths, methods,
//! expected status codes and payload types.

pub mod agents;
pub mod backups;
pub mod file_restores;

pub use agents::Agents;
pub use backups::Backups;
pub use file_restores::FileRestores;

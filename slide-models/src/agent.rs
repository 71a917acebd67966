//! Agent entity: the backup agent installed on a protected machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A backup agent as reported by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub agent_id: String,
    pub agent_version: String,
    pub booted_at: DateTime<Utc>,
    #[serde(default)]
    pub client_id: String,
    pub device_id: String,
    pub display_name: String,
    pub encryption_algorithm: String,
    pub firmware_type: String,
    pub hostname: String,
    pub last_seen_at: DateTime<Utc>,
    pub manufacturer: String,
    pub os: String,
    pub os_version: String,
    pub platform: String,
    pub public_ip_address: String,
    #[serde(default)]
    pub addresses: Vec<Address>,
}

/// A network interface of the agent's machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub ips: Vec<String>,
    pub mac: String,
}

/// Body for renaming an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentUpdatePayload {
    pub display_name: String,
}

/// Body for creating an agent that will pair itself with a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentAutoPairPayload {
    pub device_id: String,
    pub display_name: String,
}

/// Result of an auto-pair request: the new agent and the code it pairs with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentAutoPairResponse {
    pub agent_id: String,
    pub display_name: String,
    pub pair_code: String,
}

/// Body for pairing an installed agent with a device using its pair code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentPairPayload {
    pub device_id: String,
    pub pair_code: String,
}

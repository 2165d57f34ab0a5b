/*!
 * Process Profile
 * Serializable diagnostics snapshot consumed by operational tooling
 */

use serde::Serialize;

/// One application hosted in a render process.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RunningApp {
    pub id: String,
    #[serde(rename = "instanceId")]
    pub instance_id: String,
}

/// One render process with the applications it hosts.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProcessEntry {
    pub pid: String,
    #[serde(rename = "webProcessSize")]
    pub web_process_size: String,
    #[serde(rename = "tileSize")]
    pub tile_size: u32,
    #[serde(rename = "runningApps")]
    pub running_apps: Vec<RunningApp>,
}

/// The diagnostics export. `ok == false` only for the empty sentinel
/// returned when building the snapshot failed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProcessProfile {
    #[serde(rename = "WebProcesses")]
    pub processes: Vec<ProcessEntry>,
    #[serde(rename = "returnValue")]
    pub ok: bool,
}

impl ProcessProfile {
    /// Explicit empty-result sentinel; never a partially built object.
    pub fn empty() -> Self {
        Self {
            processes: Vec::new(),
            ok: false,
        }
    }
}

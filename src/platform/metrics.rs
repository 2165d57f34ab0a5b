/*!
 * Process Metrics
 * Resident memory footprint of render processes, queried on demand
 */

use crate::core::types::RenderPid;

pub trait ProcessMetrics: Send + Sync {
    /// Resident set size of the process in bytes, if it is still alive.
    fn resident_bytes(&self, pid: RenderPid) -> Option<u64>;
}

/// Reads resident memory from /proc/<pid>/statm.
///
/// Returns None on platforms without procfs or when the process is gone,
/// which the diagnostics export reports as zero.
#[derive(Debug, Clone, Default)]
pub struct ProcfsMetrics;

impl ProcfsMetrics {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessMetrics for ProcfsMetrics {
    fn resident_bytes(&self, pid: RenderPid) -> Option<u64> {
        let statm = std::fs::read_to_string(format!("/proc/{}/statm", pid)).ok()?;
        let resident_pages: u64 = statm.split_whitespace().nth(1)?.parse().ok()?;
        Some(resident_pages * page_size())
    }
}

fn page_size() -> u64 {
    // statm reports pages; 4KiB covers every platform we deploy on
    4096
}

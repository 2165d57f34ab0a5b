/*!
 * Resource/Memory Governor
 *
 * Turns platform memory-pressure signals into lifecycle policy. The
 * governor decides *what* to reclaim; it never touches a page directly and
 * only invokes Lifecycle Controller primitives, so lifecycle truth stays
 * in one place.
 */

use crate::core::types::PressureLevel;
use crate::platform::browsing_data::ClearDataMask;
use crate::process::registry::ProcessRegistry;
use log::{debug, info};
use std::sync::Arc;

pub struct MemoryGovernor {
    processes: Arc<ProcessRegistry>,
}

impl MemoryGovernor {
    pub fn new(processes: Arc<ProcessRegistry>) -> Self {
        Self { processes }
    }

    /// Apply policy for one pressure signal.
    ///
    /// Moderate pressure suspends reclaimable (hidden/background) pages,
    /// never the foreground one. Critical pressure additionally forwards
    /// the level into every render process and requests a cache clear.
    pub fn on_pressure(&self, level: PressureLevel) {
        match level {
            PressureLevel::None => {}
            PressureLevel::Moderate => {
                info!("memory pressure MODERATE: suspending reclaimable pages");
                self.suspend_reclaimable(level);
            }
            PressureLevel::Critical => {
                info!("memory pressure CRITICAL: suspending and clearing caches");
                self.suspend_reclaimable(level);
                self.processes
                    .clear_browsing_data(ClearDataMask::CACHE | ClearDataMask::CODE_CACHE);
            }
        }
    }

    fn suspend_reclaimable(&self, level: PressureLevel) {
        for (pid, hosted) in self.processes.group_by_process() {
            for instance in hosted {
                let lifecycle = instance.lifecycle();
                if level >= PressureLevel::Critical {
                    lifecycle.notify_memory_pressure(level);
                }
                if !instance.page().visibility().is_reclaimable() {
                    continue;
                }
                match lifecycle.suspend() {
                    Ok(()) => debug!(
                        "suspended {} (pid {}) under pressure",
                        instance.instance_id(),
                        pid
                    ),
                    // Busy or already out of reach; pressure never forces
                    // a transition the controller rejects
                    Err(e) => debug!(
                        "pressure suspend skipped for {}: {}",
                        instance.instance_id(),
                        e
                    ),
                }
            }
        }
    }
}

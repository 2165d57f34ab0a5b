/*!
 * Process Registry
 *
 * Maps render-process identifiers to the application instances hosted in
 * each process and aggregates per-process resource usage. The registry
 * never owns instances or pages; every query snapshots the live set first
 * and resolves against the snapshot, so concurrent registration and
 * teardown cannot leave it referencing a destroyed instance.
 */

use crate::app::instance::ApplicationInstance;
use crate::app::registry::InstanceRegistry;
use crate::engine::view::ViewFactory;
use crate::page::page::ProcessIdentifiable;
use crate::platform::browsing_data::{BrowsingData, ClearDataMask};
use crate::platform::metrics::ProcessMetrics;
use crate::process::profile::{ProcessEntry, ProcessProfile, RunningApp};
use crate::core::types::RenderPid;
use log::{info, warn};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

pub struct ProcessRegistry {
    instances: InstanceRegistry,
    metrics: Arc<dyn ProcessMetrics>,
    factory: Arc<dyn ViewFactory>,
    browsing_data: Arc<dyn BrowsingData>,
}

impl ProcessRegistry {
    pub fn new(
        instances: InstanceRegistry,
        metrics: Arc<dyn ProcessMetrics>,
        factory: Arc<dyn ViewFactory>,
        browsing_data: Arc<dyn BrowsingData>,
    ) -> Self {
        Self {
            instances,
            metrics,
            factory,
            browsing_data,
        }
    }

    /// Distinct render-process ids currently in use.
    pub fn render_pids(&self) -> BTreeSet<RenderPid> {
        self.group_by_process().into_keys().collect()
    }

    /// Group the live instance set by resolved render-process id.
    ///
    /// Instances whose process identity has not arrived yet (or was pruned
    /// after a crash) are not part of any grouping. Flattening the result
    /// reproduces exactly the instances that had a pid at snapshot time.
    pub fn group_by_process(&self) -> BTreeMap<RenderPid, Vec<Arc<ApplicationInstance>>> {
        let snapshot = self.instances.list();
        let mut groups: BTreeMap<RenderPid, Vec<Arc<ApplicationInstance>>> = BTreeMap::new();
        for instance in snapshot {
            if let Some(pid) = instance.page().render_pid() {
                groups.entry(pid).or_default().push(instance);
            }
        }
        groups
    }

    /// Diagnostics export with per-process resident memory. Serialization
    /// failure yields the explicit empty sentinel, never a partial object.
    pub fn process_profile(&self) -> Value {
        let profile = self.build_profile();
        match serde_json::to_value(&profile) {
            Ok(value) => value,
            Err(e) => {
                warn!("process profile serialization failed: {}", e);
                serde_json::json!({ "WebProcesses": [], "returnValue": false })
            }
        }
    }

    fn build_profile(&self) -> ProcessProfile {
        let mut processes = Vec::new();
        for (pid, hosted) in self.group_by_process() {
            let resident = self.metrics.resident_bytes(pid).unwrap_or(0);
            processes.push(ProcessEntry {
                pid: pid.to_string(),
                web_process_size: format!("{} MB", resident / (1024 * 1024)),
                tile_size: 0,
                running_apps: hosted
                    .iter()
                    .map(|instance| RunningApp {
                        id: instance.app_id().clone(),
                        instance_id: instance.instance_id().clone(),
                    })
                    .collect(),
            });
        }
        ProcessProfile {
            processes,
            ok: true,
        }
    }

    /// Delete persisted storage for an identifier.
    ///
    /// Deletion must run inside a live hosting context: a running
    /// instance's page when one exists, otherwise a disposable view created
    /// only for the deletion and dropped immediately.
    pub fn delete_storage_data(&self, identifier: &str) {
        let snapshot = self.instances.list();
        if let Some(instance) = snapshot.first() {
            instance.page().delete_web_storage(identifier);
            return;
        }

        info!(
            "deleting storage for {} via disposable context",
            identifier
        );
        let view = self.factory.create_view();
        view.delete_web_storage(identifier);
    }

    /// Request removal of browsing-data categories across the engine
    /// profile.
    pub fn clear_browsing_data(&self, mask: ClearDataMask) {
        self.browsing_data.clear(mask);
    }
}

/*!
 * Process Registry Tests
 * Grouping round-trip, diagnostics export, storage deletion discipline
 */

use crate::support::{
    make_instance, RecordingBrowsingData, RecordingFactory, StaticMetrics,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;
use webapp_host::app::InstanceRegistry;
use webapp_host::page::ProcessIdentifiable;
use webapp_host::platform::browsing_data::ClearDataMask;
use webapp_host::process::ProcessRegistry;

fn registry_with_metrics(
    instances: &InstanceRegistry,
    metrics: StaticMetrics,
) -> (
    Arc<ProcessRegistry>,
    Arc<RecordingFactory>,
    Arc<RecordingBrowsingData>,
) {
    let factory = Arc::new(RecordingFactory::new());
    let browsing = Arc::new(RecordingBrowsingData::new());
    let registry = Arc::new(ProcessRegistry::new(
        instances.clone(),
        Arc::new(metrics),
        Arc::clone(&factory) as _,
        Arc::clone(&browsing) as _,
    ));
    (registry, factory, browsing)
}

#[test]
fn diagnostics_export_groups_apps_by_process() {
    let instances = InstanceRegistry::new();
    for (app, inst, pid) in [("app.a", "i-a", 10), ("app.b", "i-b", 10), ("app.c", "i-c", 20)] {
        let (instance, _view, _window) = make_instance(app, inst);
        instance.lifecycle().render_process_created(pid);
        instances.register(instance);
    }
    let metrics = StaticMetrics::new().with_size(10, 5 * 1024 * 1024);
    let (registry, _factory, _browsing) = registry_with_metrics(&instances, metrics);

    let profile = registry.process_profile();
    assert_eq!(profile["returnValue"], true);

    let processes = profile["WebProcesses"].as_array().expect("array");
    assert_eq!(processes.len(), 2);

    // BTreeMap grouping: entries come out sorted by pid
    assert_eq!(processes[0]["pid"], "10");
    assert_eq!(processes[0]["webProcessSize"], "5 MB");
    assert_eq!(processes[0]["tileSize"], 0);
    let mut apps_10: Vec<&str> = processes[0]["runningApps"]
        .as_array()
        .expect("array")
        .iter()
        .map(|a| a["id"].as_str().expect("id"))
        .collect();
    apps_10.sort_unstable();
    assert_eq!(apps_10, vec!["app.a", "app.b"]);

    assert_eq!(processes[1]["pid"], "20");
    // No metrics for pid 20: reported as zero, never omitted
    assert_eq!(processes[1]["webProcessSize"], "0 MB");
    let apps_20: Vec<&str> = processes[1]["runningApps"]
        .as_array()
        .expect("array")
        .iter()
        .map(|a| a["instanceId"].as_str().expect("instanceId"))
        .collect();
    assert_eq!(apps_20, vec!["i-c"]);
}

#[test]
fn instances_without_a_resolved_pid_stay_out_of_groupings() {
    let instances = InstanceRegistry::new();
    let (resolved, _v1, _w1) = make_instance("app.a", "i-a");
    resolved.lifecycle().render_process_created(10);
    instances.register(resolved);
    let (launching, _v2, _w2) = make_instance("app.b", "i-b");
    instances.register(launching);

    let (registry, _factory, _browsing) =
        registry_with_metrics(&instances, StaticMetrics::new());

    let groups = registry.group_by_process();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[&10].len(), 1);
    assert_eq!(registry.render_pids(), BTreeSet::from([10]));
}

proptest! {
    /// Grouping by process and flattening reproduces exactly the set of
    /// instances with a resolved pid: nothing lost, nothing duplicated.
    #[test]
    fn grouping_round_trips_the_live_set(pids in prop::collection::vec(prop::option::of(1u32..6), 0..12)) {
        let instances = InstanceRegistry::new();
        let mut expected = BTreeSet::new();
        for (i, pid) in pids.iter().enumerate() {
            let instance_id = format!("i-{}", i);
            let (instance, _view, _window) = make_instance(&format!("app.{}", i), &instance_id);
            if let Some(pid) = pid {
                instance.lifecycle().render_process_created(*pid);
                expected.insert((instance_id.clone(), *pid));
            }
            instances.register(instance);
        }
        let (registry, _factory, _browsing) = registry_with_metrics(&instances, StaticMetrics::new());

        let mut flattened = BTreeSet::new();
        for (pid, hosted) in registry.group_by_process() {
            for instance in hosted {
                prop_assert_eq!(instance.page().render_pid(), Some(pid));
                let fresh = flattened.insert((instance.instance_id().clone(), pid));
                prop_assert!(fresh, "instance appeared in two groupings");
            }
        }
        prop_assert_eq!(flattened, expected);
    }
}

#[test]
fn storage_deletion_delegates_to_a_running_instance() {
    let instances = InstanceRegistry::new();
    let (instance, view, _window) = make_instance("app.a", "i-a");
    instances.register(instance);

    let (registry, factory, _browsing) =
        registry_with_metrics(&instances, StaticMetrics::new());
    registry.delete_storage_data("com.example.app");

    assert_eq!(
        view.storage_deletions.lock().as_slice(),
        &["com.example.app".to_string()]
    );
    assert_eq!(factory.created.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[test]
fn storage_deletion_with_zero_instances_uses_a_disposable_context() {
    let instances = InstanceRegistry::new();
    let (registry, factory, _browsing) =
        registry_with_metrics(&instances, StaticMetrics::new());

    registry.delete_storage_data("com.example.app");

    assert_eq!(factory.created.load(std::sync::atomic::Ordering::SeqCst), 1);
    let views = factory.views.lock();
    assert_eq!(
        views[0].storage_deletions.lock().as_slice(),
        &["com.example.app".to_string()]
    );
}

#[test]
fn browsing_data_clears_delegate_the_mask() {
    let instances = InstanceRegistry::new();
    let (registry, _factory, browsing) =
        registry_with_metrics(&instances, StaticMetrics::new());

    registry.clear_browsing_data(ClearDataMask::COOKIES | ClearDataMask::CACHE);
    assert_eq!(
        browsing.clears.lock().as_slice(),
        &[ClearDataMask::COOKIES | ClearDataMask::CACHE]
    );
}

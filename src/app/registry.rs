/*!
 * Instance Registry
 * The live collection of running application instances
 */

use crate::app::instance::ApplicationInstance;
use crate::core::types::{AppId, InstanceId};
use dashmap::DashMap;
use log::{info, warn};
use std::sync::Arc;

/// Single source of truth for running instances. Owned by the host
/// supervisor and injected into every component that needs the live set;
/// observers (process registry, governor, dispatcher) never own entries.
#[derive(Clone, Default)]
pub struct InstanceRegistry {
    instances: Arc<DashMap<InstanceId, Arc<ApplicationInstance>>>,
}

impl InstanceRegistry {
    pub fn new() -> Self {
        Self {
            instances: Arc::new(DashMap::new()),
        }
    }

    pub fn register(&self, instance: Arc<ApplicationInstance>) {
        let instance_id = instance.instance_id().clone();
        info!(
            "registered instance {} of {}",
            instance_id,
            instance.app_id()
        );
        if self.instances.insert(instance_id, instance).is_some() {
            warn!("instance id re-registered; previous entry replaced");
        }
    }

    pub fn unregister(&self, instance_id: &InstanceId) -> Option<Arc<ApplicationInstance>> {
        let removed = self.instances.remove(instance_id).map(|(_, v)| v);
        if removed.is_some() {
            info!("unregistered instance {}", instance_id);
        }
        removed
    }

    pub fn get(&self, instance_id: &str) -> Option<Arc<ApplicationInstance>> {
        self.instances.get(instance_id).map(|r| Arc::clone(r.value()))
    }

    /// Synchronous snapshot of the live set. Callers resolve against the
    /// snapshot, never against the map while iterating.
    pub fn list(&self) -> Vec<Arc<ApplicationInstance>> {
        self.instances
            .iter()
            .map(|r| Arc::clone(r.value()))
            .collect()
    }

    pub fn find_by_app_id(&self, app_id: &AppId) -> Vec<Arc<ApplicationInstance>> {
        self.instances
            .iter()
            .filter(|r| r.value().app_id() == app_id)
            .map(|r| Arc::clone(r.value()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

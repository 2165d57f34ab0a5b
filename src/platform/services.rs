/*!
 * Service Bus
 * Privileged platform service invocation on behalf of an application
 */

use crate::core::types::AppId;
use log::info;

pub trait ServiceBus: Send + Sync {
    /// Issue a one-way service call attributed to `app_id`.
    fn call(&self, url: &str, payload: &str, app_id: &AppId);
}

/// Sink that records the request in the log only; used when no bus is wired.
#[derive(Debug, Clone, Default)]
pub struct NullServiceBus;

impl NullServiceBus {
    pub fn new() -> Self {
        Self
    }
}

impl ServiceBus for NullServiceBus {
    fn call(&self, url: &str, payload: &str, app_id: &AppId) {
        info!("service call dropped (no bus): {} {} [{}]", url, payload, app_id);
    }
}

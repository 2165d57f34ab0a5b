/*!
 * Device Information Provider
 * Platform locale, country, and device metadata queried by value
 */

use std::collections::HashMap;
use std::sync::Arc;

/// Device-info keys with dedicated accessors cover the values the bridge
/// snapshot needs on every launch; everything else goes through `value`.
pub trait DeviceInfo: Send + Sync {
    fn country(&self) -> String;
    fn locale(&self) -> String;
    fn locale_region(&self) -> String;
    fn phone_region(&self) -> String;
    fn screen_orientation(&self) -> String;
    /// Minimal-mode flag (reduced UI platform profile)
    fn is_minimal(&self) -> bool;
    /// Free-form device-info lookup ("CountryGroup", "DeviceInfo", ...)
    fn value(&self, key: &str) -> Option<String>;
}

/// Fixed-value provider for embedders and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticDeviceInfo {
    pub country: String,
    pub locale: String,
    pub locale_region: String,
    pub phone_region: String,
    pub screen_orientation: String,
    pub minimal: bool,
    pub values: HashMap<String, String>,
}

impl StaticDeviceInfo {
    pub fn new() -> Self {
        Self {
            country: "US".into(),
            locale: "en-US".into(),
            locale_region: "US".into(),
            phone_region: "US".into(),
            screen_orientation: "landscape".into(),
            minimal: false,
            values: HashMap::new(),
        }
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }

    pub fn into_arc(self) -> Arc<dyn DeviceInfo> {
        Arc::new(self)
    }
}

impl DeviceInfo for StaticDeviceInfo {
    fn country(&self) -> String {
        self.country.clone()
    }

    fn locale(&self) -> String {
        self.locale.clone()
    }

    fn locale_region(&self) -> String {
        self.locale_region.clone()
    }

    fn phone_region(&self) -> String {
        self.phone_region.clone()
    }

    fn screen_orientation(&self) -> String {
        self.screen_orientation.clone()
    }

    fn is_minimal(&self) -> bool {
        self.minimal
    }

    fn value(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

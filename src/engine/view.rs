/*!
 * Engine View
 * Capability surface of one out-of-process rendering unit
 */

use crate::core::types::{PressureLevel, Visibility};

/// Operations the control plane may invoke on a hosted document's view.
///
/// Implemented by the engine adapter; every call is a one-way request into
/// the render process. Confirmation, where it exists, comes back through
/// `EngineEvent` delivery or a bridge command.
pub trait WebView: Send + Sync {
    fn load_url(&self, url: &str);

    /// Stop DOM timers, JS execution, and painting.
    fn suspend_painting_and_js(&self);
    fn resume_painting_and_js(&self);

    /// Stop media playback only; DOM keeps running.
    fn suspend_media(&self);
    fn resume_media(&self);

    fn set_visibility(&self, state: Visibility);
    fn set_viewport_size(&self, width: u32, height: u32);

    /// Publish a key/value pair into the page's injected extension data.
    fn update_extension_data(&self, key: &str, value: &str);

    /// Ask hosted content to run its registered close callback. With
    /// `forced` the content is torn down regardless of the callback result.
    fn run_close_callback(&self, forced: bool);

    /// Delete persisted storage for the identifier inside this view's
    /// hosting context.
    fn delete_web_storage(&self, identifier: &str);

    fn notify_memory_pressure(&self, level: PressureLevel);

    fn device_pixel_ratio(&self) -> f64 {
        1.0
    }
}

/// Creates views; also the source of disposable hosting contexts for
/// storage deletion when no application is running.
pub trait ViewFactory: Send + Sync {
    fn create_view(&self) -> Box<dyn WebView>;
}

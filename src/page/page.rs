/*!
 * Page
 * One hosted document/session inside a render process
 */

use crate::core::limits;
use crate::core::types::{RenderPid, Visibility};
use crate::engine::view::WebView;
use crate::page::state::LoadErrorPolicy;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Exposes the render-process identity of a page, when resolved.
pub trait ProcessIdentifiable {
    fn render_pid(&self) -> Option<RenderPid>;
}

/// Publishes key/value pairs into the page's injected extension data.
pub trait ExtensionDataUpdatable {
    fn update_extension_data(&self, key: &str, value: &str);
}

/// Page data: everything about one hosted document except the lifecycle
/// state machine, which its `PageLifecycle` controller owns.
pub struct Page {
    view: Arc<dyn WebView>,
    url: RwLock<String>,
    title: RwLock<String>,
    progress: AtomicU8,
    // Assigned asynchronously after process creation, pruned on crash
    render_pid: Mutex<Option<RenderPid>>,
    visibility: RwLock<Visibility>,
    suspended: AtomicBool,
    paused: AtomicBool,
    dom_suspended: AtomicBool,
    bridge_initialized: AtomicBool,
    has_been_shown: AtomicBool,
    keyboard_visible: AtomicBool,
    compositor_active: AtomicBool,
    load_error_policy: RwLock<LoadErrorPolicy>,
    viewport: RwLock<(u32, u32)>,
    dom_suspend_delay: RwLock<Duration>,
    // Mirror of data injected into the page, replayed after resume
    extension_data: RwLock<HashMap<String, String>>,
}

impl Page {
    pub fn new(view: Arc<dyn WebView>, url: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            view,
            url: RwLock::new(url.into()),
            title: RwLock::new(String::new()),
            progress: AtomicU8::new(0),
            render_pid: Mutex::new(None),
            visibility: RwLock::new(Visibility::Launching),
            suspended: AtomicBool::new(false),
            paused: AtomicBool::new(false),
            dom_suspended: AtomicBool::new(false),
            bridge_initialized: AtomicBool::new(false),
            has_been_shown: AtomicBool::new(false),
            keyboard_visible: AtomicBool::new(false),
            compositor_active: AtomicBool::new(false),
            load_error_policy: RwLock::new(LoadErrorPolicy::Default),
            viewport: RwLock::new((0, 0)),
            dom_suspend_delay: RwLock::new(limits::DOM_SUSPEND_DELAY),
            extension_data: RwLock::new(HashMap::new()),
        })
    }

    pub fn view(&self) -> &Arc<dyn WebView> {
        &self.view
    }

    pub fn url(&self) -> String {
        self.url.read().clone()
    }

    pub fn set_url(&self, url: impl Into<String>) {
        *self.url.write() = url.into();
    }

    pub fn title(&self) -> String {
        self.title.read().clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        *self.title.write() = title.into();
    }

    /// Load progress in [0, 100]
    pub fn progress(&self) -> u8 {
        self.progress.load(Ordering::Relaxed)
    }

    pub fn set_progress(&self, progress: u8) {
        self.progress
            .store(progress.min(limits::LOAD_PROGRESS_COMPLETE), Ordering::Relaxed);
    }

    pub fn set_render_pid(&self, pid: RenderPid) -> Option<RenderPid> {
        self.render_pid.lock().replace(pid)
    }

    pub fn take_render_pid(&self) -> Option<RenderPid> {
        self.render_pid.lock().take()
    }

    pub fn visibility(&self) -> Visibility {
        *self.visibility.read()
    }

    pub fn set_visibility(&self, state: Visibility) {
        *self.visibility.write() = state;
        self.view.set_visibility(state);
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended.load(Ordering::SeqCst)
    }

    pub(crate) fn set_suspended(&self, suspended: bool) {
        self.suspended.store(suspended, Ordering::SeqCst);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    pub(crate) fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::SeqCst);
    }

    pub fn is_dom_suspended(&self) -> bool {
        self.dom_suspended.load(Ordering::SeqCst)
    }

    pub(crate) fn set_dom_suspended(&self, suspended: bool) {
        self.dom_suspended.store(suspended, Ordering::SeqCst);
    }

    /// Set once by the first `initialize` bridge command; later calls
    /// observe true. Returns the previous value.
    pub fn mark_bridge_initialized(&self) -> bool {
        self.bridge_initialized.swap(true, Ordering::SeqCst)
    }

    pub fn bridge_initialized(&self) -> bool {
        self.bridge_initialized.load(Ordering::SeqCst)
    }

    pub fn has_been_shown(&self) -> bool {
        self.has_been_shown.load(Ordering::SeqCst)
    }

    pub(crate) fn mark_shown(&self) {
        self.has_been_shown.store(true, Ordering::SeqCst);
    }

    pub fn keyboard_visible(&self) -> bool {
        self.keyboard_visible.load(Ordering::SeqCst)
    }

    pub(crate) fn set_keyboard_visible(&self, visible: bool) {
        self.keyboard_visible.store(visible, Ordering::SeqCst);
    }

    pub fn compositor_active(&self) -> bool {
        self.compositor_active.load(Ordering::SeqCst)
    }

    pub(crate) fn set_compositor_active(&self, active: bool) {
        self.compositor_active.store(active, Ordering::SeqCst);
    }

    pub fn load_error_policy(&self) -> LoadErrorPolicy {
        *self.load_error_policy.read()
    }

    pub fn set_load_error_policy(&self, policy: LoadErrorPolicy) {
        *self.load_error_policy.write() = policy;
    }

    pub fn viewport(&self) -> (u32, u32) {
        *self.viewport.read()
    }

    pub fn set_viewport_size(&self, width: u32, height: u32) {
        *self.viewport.write() = (width, height);
        self.view.set_viewport_size(width, height);
    }

    pub fn dom_suspend_delay(&self) -> Duration {
        *self.dom_suspend_delay.read()
    }

    /// Override the deferred-DOM-suspension delay, clamped to the host bound.
    pub fn set_custom_suspend_delay(&self, delay: Duration) {
        *self.dom_suspend_delay.write() = delay.min(limits::MAX_DOM_SUSPEND_DELAY);
    }

    /// Replay every injected key/value pair into the view. Used after resume
    /// to re-synchronize state mutated while the page was suspended.
    pub fn replay_extension_data(&self) {
        for (key, value) in self.extension_data.read().iter() {
            self.view.update_extension_data(key, value);
        }
    }

    pub fn delete_web_storage(&self, identifier: &str) {
        self.view.delete_web_storage(identifier);
    }

    pub fn device_pixel_ratio(&self) -> f64 {
        self.view.device_pixel_ratio()
    }
}

impl ProcessIdentifiable for Page {
    fn render_pid(&self) -> Option<RenderPid> {
        *self.render_pid.lock()
    }
}

impl ExtensionDataUpdatable for Page {
    fn update_extension_data(&self, key: &str, value: &str) {
        self.extension_data
            .write()
            .insert(key.to_string(), value.to_string());
        self.view.update_extension_data(key, value);
    }
}

/*!
 * Shared test doubles: recording collaborators for the engine and
 * platform boundaries
 */

#![allow(dead_code)]

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use webapp_host::app::{AppDescription, ApplicationInstance};
use webapp_host::core::types::{PressureLevel, RenderPid, TrustLevel, Visibility};
use webapp_host::engine::view::{ViewFactory, WebView};
use webapp_host::engine::EngineEvent;
use webapp_host::page::PageObserver;
use webapp_host::platform::browsing_data::{BrowsingData, ClearDataMask};
use webapp_host::platform::metrics::ProcessMetrics;
use webapp_host::platform::services::ServiceBus;
use webapp_host::platform::window::{GroupClientOp, WindowHost};

/// Engine view that records every request from the control plane.
#[derive(Default)]
pub struct RecordingView {
    pub calls: Mutex<Vec<String>>,
    pub extension_data: Mutex<Vec<(String, String)>>,
    /// `forced` flag of each close-callback request
    pub close_callback_runs: Mutex<Vec<bool>>,
    pub storage_deletions: Mutex<Vec<String>>,
    pub pressure: Mutex<Vec<PressureLevel>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.lock().iter().filter(|c| *c == call).count()
    }
}

impl WebView for RecordingView {
    fn load_url(&self, url: &str) {
        self.calls.lock().push(format!("load_url:{}", url));
    }

    fn suspend_painting_and_js(&self) {
        self.calls.lock().push("suspend_painting_and_js".into());
    }

    fn resume_painting_and_js(&self) {
        self.calls.lock().push("resume_painting_and_js".into());
    }

    fn suspend_media(&self) {
        self.calls.lock().push("suspend_media".into());
    }

    fn resume_media(&self) {
        self.calls.lock().push("resume_media".into());
    }

    fn set_visibility(&self, state: Visibility) {
        self.calls.lock().push(format!("set_visibility:{:?}", state));
    }

    fn set_viewport_size(&self, width: u32, height: u32) {
        self.calls
            .lock()
            .push(format!("set_viewport_size:{}x{}", width, height));
    }

    fn update_extension_data(&self, key: &str, value: &str) {
        self.extension_data
            .lock()
            .push((key.to_string(), value.to_string()));
    }

    fn run_close_callback(&self, forced: bool) {
        self.close_callback_runs.lock().push(forced);
    }

    fn delete_web_storage(&self, identifier: &str) {
        self.storage_deletions.lock().push(identifier.to_string());
    }

    fn notify_memory_pressure(&self, level: PressureLevel) {
        self.pressure.lock().push(level);
    }
}

/// Delegating handle so a factory can keep inspecting a view it handed out.
pub struct SharedView(pub Arc<RecordingView>);

impl WebView for SharedView {
    fn load_url(&self, url: &str) {
        self.0.load_url(url)
    }

    fn suspend_painting_and_js(&self) {
        self.0.suspend_painting_and_js()
    }

    fn resume_painting_and_js(&self) {
        self.0.resume_painting_and_js()
    }

    fn suspend_media(&self) {
        self.0.suspend_media()
    }

    fn resume_media(&self) {
        self.0.resume_media()
    }

    fn set_visibility(&self, state: Visibility) {
        self.0.set_visibility(state)
    }

    fn set_viewport_size(&self, width: u32, height: u32) {
        self.0.set_viewport_size(width, height)
    }

    fn update_extension_data(&self, key: &str, value: &str) {
        self.0.update_extension_data(key, value)
    }

    fn run_close_callback(&self, forced: bool) {
        self.0.run_close_callback(forced)
    }

    fn delete_web_storage(&self, identifier: &str) {
        self.0.delete_web_storage(identifier)
    }

    fn notify_memory_pressure(&self, level: PressureLevel) {
        self.0.notify_memory_pressure(level)
    }
}

/// Factory that remembers every disposable view it created.
#[derive(Default)]
pub struct RecordingFactory {
    pub created: AtomicUsize,
    pub views: Mutex<Vec<Arc<RecordingView>>>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ViewFactory for RecordingFactory {
    fn create_view(&self) -> Box<dyn WebView> {
        self.created.fetch_add(1, Ordering::SeqCst);
        let view = Arc::new(RecordingView::new());
        self.views.lock().push(Arc::clone(&view));
        Box::new(SharedView(view))
    }
}

/// Window host that records forwarded signals.
#[derive(Default)]
pub struct RecordingWindow {
    pub cursors: Mutex<Vec<(String, i32, i32)>>,
    pub properties: Mutex<Vec<(String, String)>>,
    pub input_regions: Mutex<Vec<Vec<u8>>>,
    pub group_ops: Mutex<Vec<(GroupClientOp, Vec<u8>)>>,
    pub backs: AtomicUsize,
    pub stage_readies: AtomicUsize,
    pub hides: AtomicUsize,
    pub cursor_visible: bool,
}

impl RecordingWindow {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WindowHost for RecordingWindow {
    fn set_cursor(&self, shape: &str, hotspot_x: i32, hotspot_y: i32) {
        self.cursors
            .lock()
            .push((shape.to_string(), hotspot_x, hotspot_y));
    }

    fn set_window_property(&self, name: &str, value: &str) {
        self.properties
            .lock()
            .push((name.to_string(), value.to_string()));
    }

    fn set_input_region(&self, region: &[u8]) {
        self.input_regions.lock().push(region.to_vec());
    }

    fn set_group_client_environment(&self, op: GroupClientOp, data: &[u8]) {
        self.group_ops.lock().push((op, data.to_vec()));
    }

    fn platform_back(&self) {
        self.backs.fetch_add(1, Ordering::SeqCst);
    }

    fn stage_ready(&self) {
        self.stage_readies.fetch_add(1, Ordering::SeqCst);
    }

    fn hide(&self) {
        self.hides.fetch_add(1, Ordering::SeqCst);
    }

    fn cursor_visibility(&self) -> bool {
        self.cursor_visible
    }
}

/// Service bus that records privileged calls.
#[derive(Default)]
pub struct RecordingServiceBus {
    pub calls: Mutex<Vec<(String, String, String)>>,
}

impl RecordingServiceBus {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ServiceBus for RecordingServiceBus {
    fn call(&self, url: &str, payload: &str, app_id: &String) {
        self.calls
            .lock()
            .push((url.to_string(), payload.to_string(), app_id.clone()));
    }
}

/// Browsing-data collaborator that records clear requests.
#[derive(Default)]
pub struct RecordingBrowsingData {
    pub clears: Mutex<Vec<ClearDataMask>>,
}

impl RecordingBrowsingData {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BrowsingData for RecordingBrowsingData {
    fn clear(&self, mask: ClearDataMask) {
        self.clears.lock().push(mask);
    }
}

/// Fixed per-pid resident sizes.
#[derive(Default)]
pub struct StaticMetrics {
    pub sizes: HashMap<RenderPid, u64>,
}

impl StaticMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, pid: RenderPid, bytes: u64) -> Self {
        self.sizes.insert(pid, bytes);
        self
    }
}

impl ProcessMetrics for StaticMetrics {
    fn resident_bytes(&self, pid: RenderPid) -> Option<u64> {
        self.sizes.get(&pid).copied()
    }
}

/// Supervisor observer double.
#[derive(Default)]
pub struct RecordingObserver {
    pub closed: Mutex<Vec<String>>,
    pub gone: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PageObserver for RecordingObserver {
    fn page_closed(&self, _app_id: &String, instance_id: &String) {
        self.closed.lock().push(instance_id.clone());
    }

    fn render_process_gone(&self, _app_id: &String, instance_id: &String) {
        self.gone.lock().push(instance_id.clone());
    }
}

/// Build an instance wired to recording collaborators.
pub fn make_instance(
    app_id: &str,
    instance_id: &str,
) -> (
    Arc<ApplicationInstance>,
    Arc<RecordingView>,
    Arc<RecordingWindow>,
) {
    let view = Arc::new(RecordingView::new());
    let window = Arc::new(RecordingWindow::new());
    let desc = AppDescription::new(app_id)
        .with_title("Example")
        .with_folder_path("/apps/example")
        .with_trust_level(TrustLevel::Default);
    let instance = ApplicationInstance::with_instance_id(
        desc,
        instance_id,
        "https://app.example/index.html",
        "{}",
        Arc::clone(&view) as Arc<dyn WebView>,
        Arc::clone(&window) as Arc<dyn WindowHost>,
    );
    (instance, view, window)
}

/// Drive a freshly created page to `Shown`.
pub fn show(instance: &ApplicationInstance) {
    let lifecycle = instance.lifecycle();
    lifecycle.load("https://app.example/index.html").unwrap();
    lifecycle.handle_engine_event(EngineEvent::LoadFinished {
        url: "https://app.example/index.html".into(),
    });
}

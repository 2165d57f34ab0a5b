/*!
 * Application Instance
 * One launched application: identity, description, and its owned page
 */

use crate::core::types::{AppId, InstanceId, TrustLevel, Visibility};
use crate::engine::view::WebView;
use crate::page::lifecycle::PageLifecycle;
use crate::page::page::{ExtensionDataUpdatable, Page};
use crate::platform::window::WindowHost;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// Static application metadata from the installed description.
#[derive(Debug, Clone)]
pub struct AppDescription {
    pub app_id: AppId,
    pub title: String,
    pub folder_path: String,
    pub trust_level: TrustLevel,
}

impl AppDescription {
    pub fn new(app_id: impl Into<AppId>) -> Self {
        Self {
            app_id: app_id.into(),
            title: String::new(),
            folder_path: String::new(),
            trust_level: TrustLevel::Default,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_folder_path(mut self, path: impl Into<String>) -> Self {
        self.folder_path = path.into();
        self
    }

    pub fn with_trust_level(mut self, level: TrustLevel) -> Self {
        self.trust_level = level;
        self
    }
}

/// A running application instance. Owns exactly one page at a time.
pub struct ApplicationInstance {
    desc: AppDescription,
    instance_id: InstanceId,
    lifecycle: PageLifecycle,
    window: Arc<dyn WindowHost>,
    launch_params: RwLock<String>,
    activity_id: AtomicU64,
    keep_alive: AtomicBool,
    activated: AtomicBool,
}

impl ApplicationInstance {
    /// Launch with a generated instance id.
    pub fn new(
        desc: AppDescription,
        url: impl Into<String>,
        launch_params: impl Into<String>,
        view: Arc<dyn WebView>,
        window: Arc<dyn WindowHost>,
    ) -> Arc<Self> {
        let instance_id = Uuid::new_v4().to_string();
        Self::with_instance_id(desc, instance_id, url, launch_params, view, window)
    }

    /// Launch with an instance id supplied by the launcher.
    pub fn with_instance_id(
        desc: AppDescription,
        instance_id: impl Into<InstanceId>,
        url: impl Into<String>,
        launch_params: impl Into<String>,
        view: Arc<dyn WebView>,
        window: Arc<dyn WindowHost>,
    ) -> Arc<Self> {
        let instance_id = instance_id.into();
        let page = Page::new(view, url);
        let lifecycle = PageLifecycle::new(page, desc.app_id.clone(), instance_id.clone());
        Arc::new(Self {
            desc,
            instance_id,
            lifecycle,
            window,
            launch_params: RwLock::new(launch_params.into()),
            activity_id: AtomicU64::new(0),
            keep_alive: AtomicBool::new(false),
            activated: AtomicBool::new(false),
        })
    }

    pub fn app_id(&self) -> &AppId {
        &self.desc.app_id
    }

    pub fn instance_id(&self) -> &InstanceId {
        &self.instance_id
    }

    pub fn description(&self) -> &AppDescription {
        &self.desc
    }

    pub fn trust_level(&self) -> TrustLevel {
        self.desc.trust_level
    }

    /// Identifier exposed to hosted content.
    pub fn identifier(&self) -> String {
        self.desc.app_id.clone()
    }

    pub fn lifecycle(&self) -> &PageLifecycle {
        &self.lifecycle
    }

    pub fn page(&self) -> &Arc<Page> {
        self.lifecycle.page()
    }

    pub fn window(&self) -> &Arc<dyn WindowHost> {
        &self.window
    }

    pub fn launch_params(&self) -> String {
        self.launch_params.read().clone()
    }

    /// Update launch parameters and republish them to hosted content.
    pub fn update_launch_params(&self, params: impl Into<String>) {
        let params = params.into();
        *self.launch_params.write() = params.clone();
        self.page().update_extension_data("launchParams", &params);
    }

    pub fn activity_id(&self) -> u64 {
        self.activity_id.load(Ordering::Relaxed)
    }

    pub fn set_activity_id(&self, id: u64) {
        self.activity_id.store(id, Ordering::Relaxed);
    }

    pub fn keep_alive(&self) -> bool {
        self.keep_alive.load(Ordering::Relaxed)
    }

    pub fn set_keep_alive(&self, keep_alive: bool) {
        self.keep_alive.store(keep_alive, Ordering::Relaxed);
    }

    pub fn is_activated(&self) -> bool {
        self.activated.load(Ordering::SeqCst)
    }

    pub fn activate(&self) {
        self.activated.store(true, Ordering::SeqCst);
        self.page().set_visibility(Visibility::Shown);
    }

    pub fn deactivate(&self) {
        self.activated.store(false, Ordering::SeqCst);
        self.page().set_visibility(Visibility::Hidden);
    }

    /// Minimize: the window goes away but the instance keeps running.
    pub fn hide(&self) {
        self.window.hide();
        self.page().set_visibility(Visibility::Hidden);
    }
}

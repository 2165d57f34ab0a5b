/*!
 * Web Application Host - Main Entry Point
 *
 * Control-plane daemon that provides:
 * - Application instance registry
 * - Bridge command dispatch for hosted content
 * - Page lifecycle supervision
 * - Memory-pressure-driven resource reclaim
 */

use std::sync::Arc;
use tracing::info;

use webapp_host::core::types::{PressureLevel, Visibility};
use webapp_host::engine::view::{ViewFactory, WebView};
use webapp_host::platform::{
    HostLog, NullBrowsingData, NullServiceBus, ProcfsMetrics, StaticDeviceInfo,
};
use webapp_host::{BridgeDispatcher, InstanceRegistry, MemoryGovernor, ProcessRegistry};

/// View used until an engine adapter is attached; every request is a
/// logged no-op so the control plane can run headless.
struct DetachedView;

impl WebView for DetachedView {
    fn load_url(&self, url: &str) {
        tracing::debug!(url, "load_url (detached)");
    }

    fn suspend_painting_and_js(&self) {}
    fn resume_painting_and_js(&self) {}
    fn suspend_media(&self) {}
    fn resume_media(&self) {}

    fn set_visibility(&self, _state: Visibility) {}
    fn set_viewport_size(&self, _width: u32, _height: u32) {}
    fn update_extension_data(&self, _key: &str, _value: &str) {}
    fn run_close_callback(&self, _forced: bool) {}

    fn delete_web_storage(&self, identifier: &str) {
        tracing::debug!(identifier, "delete_web_storage (detached)");
    }

    fn notify_memory_pressure(&self, _level: PressureLevel) {}
}

struct DetachedViewFactory;

impl ViewFactory for DetachedViewFactory {
    fn create_view(&self) -> Box<dyn WebView> {
        Box::new(DetachedView)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Web application host starting...");
    info!("================================================");

    info!("Initializing instance registry...");
    let instances = InstanceRegistry::new();

    info!("Initializing bridge dispatcher...");
    let device = StaticDeviceInfo::new().into_arc();
    let _dispatcher = BridgeDispatcher::new(
        instances.clone(),
        device,
        Arc::new(HostLog::new()),
        Arc::new(NullServiceBus::new()),
    );

    info!("Initializing process registry with procfs metrics...");
    let processes = Arc::new(ProcessRegistry::new(
        instances.clone(),
        Arc::new(ProcfsMetrics::new()),
        Arc::new(DetachedViewFactory),
        Arc::new(NullBrowsingData::new()),
    ));

    // No platform pressure source is wired in the headless daemon; the
    // governor sits idle until an embedder feeds it signals
    info!("Initializing memory governor...");
    let _governor = MemoryGovernor::new(Arc::clone(&processes));

    info!("Host initialization complete");
    info!("================================================");
    info!("Press Ctrl+C to exit");

    let mut diagnostics = tokio::time::interval(tokio::time::Duration::from_secs(30));
    diagnostics.tick().await; // first tick fires immediately

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown requested");
                break;
            }
            _ = diagnostics.tick() => {
                info!(
                    running = instances.len(),
                    processes = processes.render_pids().len(),
                    "host running"
                );
            }
        }
    }

    Ok(())
}

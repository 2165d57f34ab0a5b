/*!
 * Bridge Dispatcher
 *
 * Routes decoded bridge commands to the owning application instance and
 * returns a string result for queries, nothing for notifications. Dispatch
 * is total over the command set; anything that does not validate was
 * already dropped by the codec.
 */

use crate::app::instance::ApplicationInstance;
use crate::app::registry::InstanceRegistry;
use crate::bridge::codec::{BridgeCommand, CloseNotify};
use crate::page::page::ProcessIdentifiable;
use crate::page::state::LoadErrorPolicy;
use crate::platform::device::DeviceInfo;
use crate::platform::services::ServiceBus;
use crate::platform::syslog::PlatformLog;
use crate::platform::window::GroupClientOp;
use log::{debug, info, warn};
use serde_json::json;
use std::sync::Arc;

fn bool_str(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

pub struct BridgeDispatcher {
    registry: InstanceRegistry,
    device: Arc<dyn DeviceInfo>,
    platform_log: Arc<dyn PlatformLog>,
    services: Arc<dyn ServiceBus>,
}

impl BridgeDispatcher {
    pub fn new(
        registry: InstanceRegistry,
        device: Arc<dyn DeviceInfo>,
        platform_log: Arc<dyn PlatformLog>,
        services: Arc<dyn ServiceBus>,
    ) -> Self {
        Self {
            registry,
            device,
            platform_log,
            services,
        }
    }

    /// Handle one raw bridge request from hosted content. Returns the query
    /// result, or `None` for notifications and ignored requests.
    pub fn dispatch(&self, instance_id: &str, command: &str, args: &[String]) -> Option<String> {
        let Some(app) = self.registry.get(instance_id) else {
            debug!(
                "bridge command {:?} for unknown instance {}",
                command, instance_id
            );
            return None;
        };
        let command = BridgeCommand::decode(command, args)?;
        self.run(&app, command)
    }

    fn run(&self, app: &Arc<ApplicationInstance>, command: BridgeCommand) -> Option<String> {
        match command {
            BridgeCommand::Initialize => Some(self.initialize(app)),
            BridgeCommand::Country => Some(self.device.country()),
            BridgeCommand::Locale => Some(self.device.locale()),
            BridgeCommand::LocaleRegion => Some(self.device.locale_region()),
            BridgeCommand::Identifier => Some(app.identifier()),
            BridgeCommand::ScreenOrientation => Some(self.device.screen_orientation()),
            BridgeCommand::CurrentCountryGroup => {
                Some(self.device.value("CountryGroup").unwrap_or_default())
            }
            BridgeCommand::IsMinimal => Some(bool_str(self.device.is_minimal())),
            BridgeCommand::IsActivated => Some(bool_str(app.is_activated())),
            BridgeCommand::IsKeyboardVisible => Some(bool_str(app.page().keyboard_visible())),
            BridgeCommand::CursorVisibility => Some(bool_str(app.window().cursor_visibility())),
            BridgeCommand::Activate => {
                info!(
                    "[{}:{}] activate (pid {:?})",
                    app.app_id(),
                    app.instance_id(),
                    app.page().render_pid()
                );
                app.activate();
                None
            }
            BridgeCommand::Deactivate => {
                info!(
                    "[{}:{}] deactivate (pid {:?})",
                    app.app_id(),
                    app.instance_id(),
                    app.page().render_pid()
                );
                app.deactivate();
                None
            }
            BridgeCommand::Hide => {
                app.hide();
                None
            }
            BridgeCommand::StageReady => {
                app.window().stage_ready();
                None
            }
            BridgeCommand::PlatformBack => {
                app.window().platform_back();
                None
            }
            BridgeCommand::UpdateLaunchParams { params } => {
                info!(
                    "[{}:{}] launch params updated by app: {}",
                    app.app_id(),
                    app.instance_id(),
                    params
                );
                app.update_launch_params(params);
                None
            }
            BridgeCommand::SetWindowProperty { name, value } => {
                info!(
                    "[{}:{}] window.setProperty({:?}, {:?})",
                    app.app_id(),
                    app.instance_id(),
                    name,
                    value
                );
                app.window().set_window_property(&name, &value);
                None
            }
            BridgeCommand::SetCursor {
                shape,
                hotspot_x,
                hotspot_y,
            } => {
                app.window().set_cursor(&shape, hotspot_x, hotspot_y);
                None
            }
            BridgeCommand::SetInputRegion { region } => {
                app.window().set_input_region(&region);
                None
            }
            BridgeCommand::SetKeyMask { mask } => {
                app.window()
                    .set_group_client_environment(GroupClientOp::KeyMask, &mask);
                None
            }
            BridgeCommand::FocusOwner => {
                app.window()
                    .set_group_client_environment(GroupClientOp::FocusOwner, &[]);
                None
            }
            BridgeCommand::FocusLayer => {
                app.window()
                    .set_group_client_environment(GroupClientOp::FocusLayer, &[]);
                None
            }
            BridgeCommand::SetLoadErrorPolicy { policy } => {
                info!(
                    "[{}:{}] setLoadErrorPolicy({})",
                    app.app_id(),
                    app.instance_id(),
                    policy
                );
                app.page()
                    .set_load_error_policy(LoadErrorPolicy::parse(&policy));
                None
            }
            BridgeCommand::OnCloseNotify { event } => {
                info!(
                    "[{}:{}] onCloseNotify({:?})",
                    app.app_id(),
                    app.instance_id(),
                    event
                );
                match event {
                    CloseNotify::DidSetCallback => app.lifecycle().set_has_close_callback(true),
                    CloseNotify::DidClearCallback => app.lifecycle().set_has_close_callback(false),
                    CloseNotify::DidRunCallback => app.lifecycle().did_run_close_callback(),
                }
                None
            }
            BridgeCommand::KeepAlive { enable } => {
                app.set_keep_alive(enable);
                None
            }
            BridgeCommand::LogInfoWithClock {
                msg_id,
                perf_type,
                perf_group,
            } => {
                self.platform_log
                    .info_with_clock(&msg_id, &perf_type, &perf_group);
                None
            }
            BridgeCommand::LogString {
                level,
                msg_id,
                key,
                message,
            } => {
                self.platform_log.log_string(level, &msg_id, &key, &message);
                None
            }
            BridgeCommand::ServiceCall { url, payload } => {
                // Privileged: only honored during close, when hosted content
                // runs its teardown work
                if app.lifecycle().is_closing() {
                    info!(
                        "[{}:{}] serviceCall({}, {})",
                        app.app_id(),
                        app.instance_id(),
                        url,
                        payload
                    );
                    self.services.call(&url, &payload, app.app_id());
                } else {
                    warn!(
                        "[{}:{}] serviceCall({}) dropped: page is not closing",
                        app.app_id(),
                        app.instance_id(),
                        url
                    );
                }
                None
            }
        }
    }

    /// Build the startup snapshot hosted content depends on. Values reflect
    /// the current application state on every invocation; only the
    /// initialized flag is sticky.
    fn initialize(&self, app: &Arc<ApplicationInstance>) -> String {
        app.page().mark_bridge_initialized();

        json!({
            "launchParams": app.launch_params(),
            "country": self.device.country(),
            "currentCountryGroup": self.device.value("CountryGroup").unwrap_or_default(),
            "locale": self.device.locale(),
            "localeRegion": self.device.locale_region(),
            "isMinimal": self.device.is_minimal(),
            "identifier": app.identifier(),
            "screenOrientation": self.device.screen_orientation(),
            "deviceInfo": self.device.value("DeviceInfo").unwrap_or_default(),
            "activityId": app.activity_id(),
            "phoneRegion": self.device.phone_region(),
            "folderPath": app.description().folder_path,
            "devicePixelRatio": app.page().device_pixel_ratio(),
            "trustLevel": app.trust_level().as_str(),
        })
        .to_string()
    }
}

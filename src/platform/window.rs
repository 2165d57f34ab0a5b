/*!
 * Window Host
 * Minimal signal surface toward the platform window system
 */

use log::debug;

/// Group-client environment operations requested by hosted content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupClientOp {
    FocusOwner,
    FocusLayer,
    KeyMask,
}

/// The host only forwards these signals; windowing semantics live outside
/// the control plane.
pub trait WindowHost: Send + Sync {
    fn set_cursor(&self, shape: &str, hotspot_x: i32, hotspot_y: i32);
    fn set_window_property(&self, name: &str, value: &str);
    fn set_input_region(&self, region: &[u8]);
    fn set_group_client_environment(&self, op: GroupClientOp, data: &[u8]);
    fn platform_back(&self);
    fn stage_ready(&self);
    fn hide(&self);
    fn cursor_visibility(&self) -> bool;
}

/// Window host that swallows signals; used when the compositor is absent.
#[derive(Debug, Clone, Default)]
pub struct NullWindowHost;

impl NullWindowHost {
    pub fn new() -> Self {
        Self
    }
}

impl WindowHost for NullWindowHost {
    fn set_cursor(&self, shape: &str, hotspot_x: i32, hotspot_y: i32) {
        debug!("set_cursor({}, {}, {})", shape, hotspot_x, hotspot_y);
    }

    fn set_window_property(&self, name: &str, value: &str) {
        debug!("set_window_property({}, {})", name, value);
    }

    fn set_input_region(&self, region: &[u8]) {
        debug!("set_input_region({} bytes)", region.len());
    }

    fn set_group_client_environment(&self, op: GroupClientOp, data: &[u8]) {
        debug!("set_group_client_environment({:?}, {} bytes)", op, data.len());
    }

    fn platform_back(&self) {
        debug!("platform_back");
    }

    fn stage_ready(&self) {
        debug!("stage_ready");
    }

    fn hide(&self) {
        debug!("hide");
    }

    fn cursor_visibility(&self) -> bool {
        false
    }
}

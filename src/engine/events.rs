/*!
 * Engine Events
 * Asynchronous notifications from the render process
 */

use crate::core::types::RenderPid;

/// Events delivered by the engine adapter. Delivery is asynchronous and may
/// be re-ordered or repeated; handlers must be idempotent.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// The render process backing this page came up.
    RenderProcessCreated { pid: RenderPid },
    /// The render process died unexpectedly.
    RenderProcessCrashed,
    LoadProgressChanged { progress: u8 },
    LoadFinished { url: String },
    LoadFailed { url: String, error_code: i32 },
    TitleChanged { title: String },
    /// First compositor frame after show; the page is visibly up.
    FirstFrameSwapped,
    CompositorActivated,
    CompositorDeactivated,
    KeyboardVisibilityChanged { visible: bool },
}

/*!
 * Engine Module
 * Boundary toward the out-of-process rendering engine
 */

pub mod events;
pub mod view;

pub use events::EngineEvent;
pub use view::{ViewFactory, WebView};

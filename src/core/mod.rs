/*!
 * Core Module
 * Fundamental host types, limits, and timing primitives
 */

pub mod errors;
pub mod limits;
pub mod oneshot;
pub mod types;

pub use errors::{LifecycleError, LifecycleResult};
pub use oneshot::OneShot;
pub use types::{AppId, InstanceId, PressureLevel, RenderPid, TrustLevel, Visibility};

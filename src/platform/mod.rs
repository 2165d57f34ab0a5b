/*!
 * Platform Module
 * External collaborator boundaries: device info, metrics, logging,
 * services, browsing data, and the window system
 */

pub mod browsing_data;
pub mod device;
pub mod metrics;
pub mod services;
pub mod syslog;
pub mod window;

pub use browsing_data::{BrowsingData, ClearDataMask, NullBrowsingData};
pub use device::{DeviceInfo, StaticDeviceInfo};
pub use metrics::{ProcessMetrics, ProcfsMetrics};
pub use services::{NullServiceBus, ServiceBus};
pub use syslog::{HostLog, PlatformLog, PlatformLogLevel};
pub use window::{GroupClientOp, NullWindowHost, WindowHost};

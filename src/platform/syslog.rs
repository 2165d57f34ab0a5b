/*!
 * Platform Log Sink
 * Forwarding point for log requests issued by hosted content
 */

use log::{debug, error, info, warn};

/// Log severity carried by the bridge `PmLogString` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformLogLevel {
    Emergency,
    Alert,
    Critical,
    Error,
    Warning,
    Notice,
    Info,
    Debug,
}

impl PlatformLogLevel {
    /// Numeric wire encoding used by hosted content. Unknown values are
    /// rejected so a malformed level makes the whole command a no-op.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Emergency),
            1 => Some(Self::Alert),
            2 => Some(Self::Critical),
            3 => Some(Self::Error),
            4 => Some(Self::Warning),
            5 => Some(Self::Notice),
            6 => Some(Self::Info),
            7 => Some(Self::Debug),
            _ => None,
        }
    }
}

pub trait PlatformLog: Send + Sync {
    /// Performance log entry with a clock reading attached by the platform.
    fn info_with_clock(&self, msg_id: &str, perf_type: &str, perf_group: &str);

    /// Free-form log entry at the requested severity.
    fn log_string(&self, level: PlatformLogLevel, msg_id: &str, key: &str, message: &str);
}

/// Routes platform log requests into the host's own logging.
#[derive(Debug, Clone, Default)]
pub struct HostLog;

impl HostLog {
    pub fn new() -> Self {
        Self
    }
}

impl PlatformLog for HostLog {
    fn info_with_clock(&self, msg_id: &str, perf_type: &str, perf_group: &str) {
        info!(
            "[{}] perf_type={} perf_group={}",
            msg_id, perf_type, perf_group
        );
    }

    fn log_string(&self, level: PlatformLogLevel, msg_id: &str, key: &str, message: &str) {
        match level {
            PlatformLogLevel::Emergency
            | PlatformLogLevel::Alert
            | PlatformLogLevel::Critical
            | PlatformLogLevel::Error => error!("[{}] {}: {}", msg_id, key, message),
            PlatformLogLevel::Warning | PlatformLogLevel::Notice => {
                warn!("[{}] {}: {}", msg_id, key, message)
            }
            PlatformLogLevel::Info => info!("[{}] {}: {}", msg_id, key, message),
            PlatformLogLevel::Debug => debug!("[{}] {}: {}", msg_id, key, message),
        }
    }
}

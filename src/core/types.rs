/*!
 * Core Types
 * Common types used across the host
 */

use serde::{Deserialize, Serialize};

/// Render-process identifier assigned by the engine
pub type RenderPid = u32;

/// Logical application identifier (e.g. "com.example.app")
pub type AppId = String;

/// Instance identifier, unique per launched application instance
pub type InstanceId = String;

/// Trust level granted to an application by its description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrustLevel {
    Default,
    Trusted,
    Privileged,
}

impl TrustLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrustLevel::Default => "default",
            TrustLevel::Trusted => "trusted",
            TrustLevel::Privileged => "privileged",
        }
    }
}

impl Default for TrustLevel {
    fn default() -> Self {
        TrustLevel::Default
    }
}

impl std::fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page visibility as reported to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Launching,
    Shown,
    Hidden,
    Background,
}

impl Visibility {
    /// True for states the governor may reclaim from
    #[inline]
    pub fn is_reclaimable(&self) -> bool {
        matches!(self, Visibility::Hidden | Visibility::Background)
    }
}

/// Platform memory-pressure severity, ordered none < moderate < critical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureLevel {
    None,
    Moderate,
    Critical,
}

impl std::fmt::Display for PressureLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PressureLevel::None => write!(f, "NONE"),
            PressureLevel::Moderate => write!(f, "MODERATE"),
            PressureLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

/*!
 * Browsing Data Removal
 * Bitmask of clearable data categories, delegated to the engine profile
 */

use bitflags::bitflags;

bitflags! {
    /// Categories accepted by the engine's data-clearing capability.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearDataMask: u32 {
        const APPCACHE        = 1 << 0;
        const COOKIES         = 1 << 1;
        const FILE_SYSTEMS    = 1 << 2;
        const INDEXED_DB      = 1 << 3;
        const LOCAL_STORAGE   = 1 << 4;
        const CHANNEL_IDS     = 1 << 5;
        const SERVICE_WORKERS = 1 << 6;
        const CACHE_STORAGE   = 1 << 7;
        const WEB_SQL         = 1 << 8;
        const CACHE           = 1 << 9;
        const CODE_CACHE      = 1 << 10;
    }
}

impl ClearDataMask {
    /// Map a category name from operational tooling onto its mask bit.
    /// Unknown names contribute nothing.
    pub fn for_type(name: &str) -> Self {
        match name {
            "appcache" => Self::APPCACHE,
            "cookies" => Self::COOKIES,
            "fileSystems" => Self::FILE_SYSTEMS,
            "indexedDB" => Self::INDEXED_DB,
            "localStorage" => Self::LOCAL_STORAGE,
            "channelIDs" => Self::CHANNEL_IDS,
            "serviceWorkers" => Self::SERVICE_WORKERS,
            "cacheStorage" => Self::CACHE_STORAGE,
            "webSQL" => Self::WEB_SQL,
            "cache" => Self::CACHE,
            "codeCache" => Self::CODE_CACHE,
            _ => Self::empty(),
        }
    }

    /// Combined mask for a list of category names.
    pub fn for_types<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        names
            .into_iter()
            .fold(Self::empty(), |mask, name| mask | Self::for_type(name))
    }
}

pub trait BrowsingData: Send + Sync {
    /// Request removal of the given categories across the engine profile.
    fn clear(&self, mask: ClearDataMask);
}

/// Sink that records clear requests in the log only; used when the engine
/// profile is absent.
#[derive(Debug, Clone, Default)]
pub struct NullBrowsingData;

impl NullBrowsingData {
    pub fn new() -> Self {
        Self
    }
}

impl BrowsingData for NullBrowsingData {
    fn clear(&self, mask: ClearDataMask) {
        log::info!("browsing data clear dropped (no profile): {:?}", mask);
    }
}

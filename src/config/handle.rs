//! Process-wide read-only config.
//!
//! The descriptor is published once after loading and read everywhere
//! through [`cfg`]. Uses `arc-swap` so readers never lock.
//!
//! # Usage
//!
//! ```ignore
//! use crate::config::handle::cfg;
//!
//! let c = cfg();
//! println!("{}", c.site_root());  // Arc auto-derefs to &SiteConfig
//! ```

use super::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
///
/// Holds the unrendered built-in descriptor until [`init_config`] runs.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Get current config as `Arc<SiteConfig>`.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Publish the loaded config (called once at startup).
#[inline]
pub fn init_config(config: SiteConfig) {
    CONFIG.store(Arc::new(config));
}

use crate::constants::{HSTS_INCLUDE_SUBDOMAINS, HSTS_MAX_AGE_PREFIX, HSTS_PRELOAD};
use crate::core::config::HelmetConfig;
use std::fmt;

/// Strict-Transport-Security directives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HstsPolicy {
    max_age: u64,
    include_subdomains: bool,
    preload: bool,
}

impl HstsPolicy {
    #[inline]
    pub fn new(max_age: u64) -> Self {
        Self {
            max_age,
            include_subdomains: true,
            preload: false,
        }
    }

    #[inline]
    pub fn from_config(config: &HelmetConfig) -> Self {
        Self {
            max_age: config.hsts_max_age,
            include_subdomains: !config.hsts_exclude_subdomains,
            preload: config.hsts_preload_enabled,
        }
    }

    #[inline]
    pub fn include_subdomains(mut self, include: bool) -> Self {
        self.include_subdomains = include;
        self
    }

    #[inline]
    pub fn preload(mut self, preload: bool) -> Self {
        self.preload = preload;
        self
    }

    #[inline]
    pub fn max_age(&self) -> u64 {
        self.max_age
    }

    /// A zero max-age disables the header on every transport.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.max_age != 0
    }

    pub fn header_value(&self) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }
        Some(self.to_string())
    }
}

impl fmt::Display for HstsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(HSTS_MAX_AGE_PREFIX)?;
        write!(f, "{}", self.max_age)?;
        if self.include_subdomains {
            f.write_str(HSTS_INCLUDE_SUBDOMAINS)?;
        }
        if self.preload {
            f.write_str(HSTS_PRELOAD)?;
        }
        Ok(())
    }
}

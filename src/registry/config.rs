//! Configuration types for registry construction

use serde::{Deserialize, Serialize};

/// Default base window for neighborhood lookups
pub const DEFAULT_SEARCH_WINDOW: usize = 0;

/// Default ceiling on the adaptively widened search window
pub const DEFAULT_MAX_SEARCH_WINDOW: usize = 1024;

/// Options applied once when a [`Registry`](crate::Registry) is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Trust the nearest preceding zone even when the address falls in a
    /// gap after it (default: false)
    pub assume_valid: bool,
    /// Base window used by [`Registry::lookup_all`](crate::Registry::lookup_all) (default: 0)
    pub default_search_window: usize,
    /// Hard ceiling the window may widen to while overlapping zones keep
    /// matching (default: 1024)
    pub max_search_window: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            assume_valid: false,
            default_search_window: DEFAULT_SEARCH_WINDOW,
            max_search_window: DEFAULT_MAX_SEARCH_WINDOW,
        }
    }
}

impl RegistryConfig {
    /// Create a new RegistryConfig builder
    pub fn builder() -> RegistryConfigBuilder {
        RegistryConfigBuilder::new()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_search_window < self.default_search_window {
            return Err(
                "max_search_window must be greater than or equal to default_search_window"
                    .to_string(),
            );
        }
        Ok(())
    }
}

/// Builder for RegistryConfig
pub struct RegistryConfigBuilder {
    config: RegistryConfig,
}

impl RegistryConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: RegistryConfig::default(),
        }
    }

    /// Trust the nearest preceding zone across unclaimed gaps
    pub fn assume_valid(mut self, assume_valid: bool) -> Self {
        self.config.assume_valid = assume_valid;
        self
    }

    /// Set the base window for neighborhood lookups
    pub fn default_search_window(mut self, window: usize) -> Self {
        self.config.default_search_window = window;
        self
    }

    /// Set the ceiling for adaptive window widening
    pub fn max_search_window(mut self, window: usize) -> Self {
        self.config.max_search_window = window;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<RegistryConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for RegistryConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

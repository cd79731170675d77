//! Immutable registry of AS zones
//!
//! A [`Registry`] is built once from a slice of zones and never changes
//! afterwards. It keeps its own copy of the zones sorted by start address
//! together with an index from AS number to the zones of that AS, and it
//! can be shared between any number of reader threads (typically behind an
//! `Arc`).
//!
//! Ranges may overlap. [`Registry::lookup`] answers with the zone whose
//! start address is closest below the queried address, while
//! [`Registry::lookup_all`] walks backwards from there to collect every
//! zone that claims the address.

mod asn_index;
pub mod config;
mod lookup;


use crate::ordering::by_start;
use crate::zone::Zone;
use asn_index::AsnIndex;

// Re-export commonly used types
pub use config::{RegistryConfig, RegistryConfigBuilder};

/// Sorted, read-only collection of AS zones.
#[derive(Debug, Clone)]
pub struct Registry {
    zones: Box<[Zone]>,
    by_asn: AsnIndex,
    config: RegistryConfig,
}

impl Registry {
    /// Build a registry from a copy of `zones`.
    ///
    /// The copy is stably sorted by start address, so zones sharing a start
    /// address keep their relative input order. Inverted ranges are kept;
    /// they simply never match any address.
    pub fn new(zones: &[Zone], config: RegistryConfig) -> Self {
        Self::from_vec(zones.to_vec(), config)
    }

    /// Build a registry with the default configuration
    pub fn from_zones(zones: &[Zone]) -> Self {
        Self::new(zones, RegistryConfig::default())
    }

    /// Build a registry that takes ownership of `zones`
    pub fn from_vec(mut zones: Vec<Zone>, config: RegistryConfig) -> Self {
        zones.sort_by(by_start);
        let by_asn = AsnIndex::build(&zones);

        let invalid = zones.iter().filter(|zone| !zone.is_valid()).count();
        if invalid > 0 {
            log::warn!(
                "{invalid} of {} zones have an invalid range and will never match",
                zones.len()
            );
        }
        log::debug!(
            "Built registry with {} zones across {} AS numbers (assume_valid={}, default_search_window={})",
            zones.len(),
            by_asn.len(),
            config.assume_valid,
            config.default_search_window
        );

        Self {
            zones: zones.into_boxed_slice(),
            by_asn,
            config,
        }
    }

    /// Configuration the registry was built with
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Number of zones
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Check if the registry holds no zones
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Number of distinct AS numbers
    pub fn asn_count(&self) -> usize {
        self.by_asn.len()
    }

    /// Copy of the zone at a sorted position
    pub fn zone_at(&self, index: usize) -> Option<Zone> {
        self.zones.get(index).cloned()
    }

    /// Iterate over the zones in start address order
    pub fn iter(&self) -> std::slice::Iter<'_, Zone> {
        self.zones.iter()
    }
}

impl FromIterator<Zone> for Registry {
    fn from_iter<I: IntoIterator<Item = Zone>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect(), RegistryConfig::default())
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Zone;
    type IntoIter = std::slice::Iter<'a, Zone>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Reverse index from AS number to the zones it owns

use super::Registry;
use crate::ordering::by_asn;
use crate::zone::{Zone, ZoneSummary};
use std::collections::HashMap;

/// Zones grouped by AS number, each group in start address order
#[derive(Debug, Clone, Default)]
pub(crate) struct AsnIndex {
    buckets: HashMap<u32, Vec<Zone>>,
}

impl AsnIndex {
    /// Group zones that are already sorted by start address
    pub(crate) fn build(sorted: &[Zone]) -> Self {
        let mut buckets: HashMap<u32, Vec<Zone>> = HashMap::new();
        for zone in sorted {
            buckets.entry(zone.asn).or_default().push(zone.clone());
        }
        Self { buckets }
    }

    pub(crate) fn len(&self) -> usize {
        self.buckets.len()
    }

    fn get(&self, asn: u32) -> Option<&[Zone]> {
        self.buckets.get(&asn).map(Vec::as_slice)
    }

    fn representatives(&self) -> impl Iterator<Item = &Zone> {
        self.buckets.values().filter_map(|zones| zones.first())
    }
}

impl Registry {
    /// Zones owned by an AS number, in start address order.
    ///
    /// Returns `None` when the AS number owns no zone. The returned vector
    /// is a fresh copy.
    pub fn zones_for_asn(&self, asn: u32) -> Option<Vec<Zone>> {
        self.by_asn.get(asn).map(<[Zone]>::to_vec)
    }

    /// One summary per AS number, sorted by AS number.
    ///
    /// Country code and description come from one of the AS's zones; which
    /// one is unspecified when its zones disagree.
    pub fn list_asns(&self) -> Vec<ZoneSummary> {
        let mut representatives: Vec<&Zone> = self.by_asn.representatives().collect();
        representatives.sort_by(|a, b| by_asn(a, b));
        representatives.into_iter().map(Zone::summary).collect()
    }
}

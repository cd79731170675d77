//! Point and neighborhood lookups

use super::Registry;
use crate::zone::{compare_addr, Zone};
use std::net::IpAddr;

impl Registry {
    /// Anchor index for an address: the last zone whose start is not after it.
    ///
    /// When several zones share that start address, the last of them (in
    /// input order) is the anchor. Returns `None` when the address is below
    /// the lowest start. The zone at the anchor does not necessarily
    /// contain the address.
    pub fn index(&self, addr: IpAddr) -> Option<usize> {
        self.zones
            .partition_point(|zone| zone.start <= addr)
            .checked_sub(1)
    }

    /// Borrow the zone owning `addr`.
    ///
    /// Same semantics as [`Registry::lookup`] without copying the result.
    pub fn get(&self, addr: IpAddr) -> Option<&Zone> {
        let index = self.index(addr)?;
        let zone = &self.zones[index];

        // Past the last zone there is no following start to bound a gap,
        // so containment is always checked there.
        let is_last = index + 1 == self.zones.len();
        let trusted = self.config.assume_valid
            && !is_last
            && compare_addr(addr, zone.start).is_some();

        if trusted || zone.contains(addr) {
            Some(zone)
        } else {
            None
        }
    }

    /// Find the zone owning `addr`.
    ///
    /// Only the zone with the closest start at or below `addr` is
    /// considered. Without `assume_valid` it must contain the address,
    /// otherwise the address is treated as falling in an unclaimed gap.
    /// With `assume_valid` that zone is returned as long as it is not the
    /// last one, so gaps are attributed to the preceding zone.
    pub fn lookup(&self, addr: IpAddr) -> Option<Zone> {
        self.get(addr).cloned()
    }

    /// Find every zone claiming `addr` using the configured default window
    pub fn lookup_all(&self, addr: IpAddr) -> Vec<Zone> {
        self.lookup_all_within(addr, self.config.default_search_window)
    }

    /// Find every zone claiming `addr`, scanning backwards from the anchor.
    ///
    /// Offsets `0..=window` below the anchor index are examined, and each
    /// matching zone widens the window by one, so a base window of 0 still
    /// follows an unbroken run of overlapping zones. Widening stops at
    /// `max_search_window` (or at `window` if that is larger). Results are
    /// ordered nearest to the anchor first.
    pub fn lookup_all_within(&self, addr: IpAddr, window: usize) -> Vec<Zone> {
        let Some(anchor) = self.index(addr) else {
            return Vec::new();
        };

        let ceiling = window.max(self.config.max_search_window);
        let mut window = window;
        let mut found = Vec::new();

        let mut offset = 0;
        while offset <= window {
            let Some(index) = anchor.checked_sub(offset) else {
                break;
            };

            let zone = &self.zones[index];
            if zone.contains(addr) {
                found.push(zone.clone());
                if window < ceiling {
                    window += 1;
                }
            }
            offset += 1;
        }

        found
    }
}

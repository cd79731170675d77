//! Orderings used to prepare zones for the registry's indexes
//!
//! Both are plain comparator functions meant for the stable
//! [`slice::sort_by`], so zones that compare equal keep their input order.

use crate::zone::Zone;
use std::cmp::Ordering;

/// Order zones by the first address of their range.
///
/// Uses the total order of [`std::net::IpAddr`]: every IPv4 address sorts
/// before every IPv6 address, and addresses of one family compare
/// numerically.
pub fn by_start(a: &Zone, b: &Zone) -> Ordering {
    a.start.cmp(&b.start)
}

/// Order zones by AS number
pub fn by_asn(a: &Zone, b: &Zone) -> Ordering {
    a.asn.cmp(&b.asn)
}

/// Check that adjacent zones never decrease in start address
pub fn is_sorted_by_start(zones: &[Zone]) -> bool {
    zones
        .windows(2)
        .all(|pair| by_start(&pair[0], &pair[1]) != Ordering::Greater)
}

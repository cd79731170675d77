//! Zone records: one IP range owned by an autonomous system

use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::net::IpAddr;
use std::sync::Arc;

/// One contiguous IP range claimed by an AS number.
///
/// `start` and `end` are both inclusive. The text fields are shared
/// immutable strings, so cloning a zone never copies string data while
/// the clone still behaves as an independent value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Zone {
    /// First address of the range
    pub start: IpAddr,
    /// Last address of the range
    pub end: IpAddr,
    /// Owning AS number (0 means "not routed")
    pub asn: u32,
    /// Country code as published by the source (may be a placeholder such as "None")
    pub country_code: Arc<str>,
    /// Free-text AS description
    pub description: Arc<str>,
}

impl Zone {
    /// Create a zone covering `start..=end`
    pub fn new(
        start: IpAddr,
        end: IpAddr,
        asn: u32,
        country_code: impl Into<Arc<str>>,
        description: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            start,
            end,
            asn,
            country_code: country_code.into(),
            description: description.into(),
        }
    }

    /// Create a zone covering every address of a CIDR block
    pub fn from_network(
        net: IpNet,
        asn: u32,
        country_code: impl Into<Arc<str>>,
        description: impl Into<Arc<str>>,
    ) -> Self {
        Self::new(
            net.network(),
            net.broadcast(),
            asn,
            country_code,
            description,
        )
    }

    /// Check if an address falls inside this zone.
    ///
    /// An address of the other family is never contained. A zone whose
    /// start is after its end contains nothing.
    pub fn contains(&self, addr: IpAddr) -> bool {
        matches!(
            compare_addr(addr, self.start),
            Some(Ordering::Greater | Ordering::Equal)
        ) && matches!(
            compare_addr(addr, self.end),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    /// Check that both ends share a family and `start <= end`
    pub fn is_valid(&self) -> bool {
        matches!(
            compare_addr(self.start, self.end),
            Some(Ordering::Less | Ordering::Equal)
        )
    }

    /// Summary of this zone without its address range
    pub fn summary(&self) -> ZoneSummary {
        ZoneSummary {
            asn: self.asn,
            country_code: Arc::clone(&self.country_code),
            description: Arc::clone(&self.description),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AS{}({})@{}", self.asn, self.description, self.country_code)?;
        if self.is_valid() {
            write!(f, "[{}->{}]", self.start, self.end)
        } else {
            f.write_str(INVALID_RANGE)
        }
    }
}

/// AS number with the metadata of one of its zones, without any address range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZoneSummary {
    /// AS number
    pub asn: u32,
    /// Country code taken from a representative zone
    pub country_code: Arc<str>,
    /// Description taken from a representative zone
    pub description: Arc<str>,
}

impl fmt::Display for ZoneSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AS{}({})@{}{}",
            self.asn, self.description, self.country_code, INVALID_RANGE
        )
    }
}

const INVALID_RANGE: &str = "[invalid]";

/// Numeric comparison of two addresses of the same family.
///
/// Returns `None` when the families differ.
pub(crate) fn compare_addr(a: IpAddr, b: IpAddr) -> Option<Ordering> {
    match (a, b) {
        (IpAddr::V4(a), IpAddr::V4(b)) => Some(a.cmp(&b)),
        (IpAddr::V6(a), IpAddr::V6(b)) => Some(a.cmp(&b)),
        _ => None,
    }
}

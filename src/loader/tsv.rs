//! Reader for the iptoasn.com tab-separated format
//!
//! Each record is one line of five tab-separated fields:
//!
//! ```text
//! 1.0.0.0	1.0.0.255	13335	US	CLOUDFLARENET
//! ```
//!
//! start address, end address, AS number, country code and description.

use super::LoadError;
use crate::zone::{compare_addr, Zone};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::net::IpAddr;
use std::path::Path;

/// Parse every record from a reader.
///
/// Blank lines are skipped but still count towards record ordinals.
/// Zones are returned in input order.
pub fn load_tsv<R: BufRead>(reader: R) -> Result<Vec<Zone>, LoadError> {
    let mut zones = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io { line: i, source })?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        zones.push(parse_line(line, i)?);
    }

    let invalid = zones.iter().filter(|zone| !zone.is_valid()).count();
    if invalid > 0 {
        log::warn!("{invalid} records have a start address after their end address");
    }
    log::debug!("Loaded {} zone records", zones.len());

    Ok(zones)
}

/// Open a plain TSV file and parse every record
pub fn load_tsv_file(path: &Path) -> Result<Vec<Zone>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    load_tsv(BufReader::new(file))
}

/// Parse a single record; `line` is its ordinal in the input
pub fn parse_line(text: &str, line: usize) -> Result<Zone, LoadError> {
    let fields: Vec<&str> = text.split('\t').collect();
    let &[start, end, asn, country_code, description] = fields.as_slice() else {
        return Err(LoadError::FieldCount {
            line,
            got: fields.len(),
        });
    };

    let start_addr: IpAddr = start
        .parse()
        .map_err(|source| LoadError::InvalidStartAddress {
            line,
            value: start.to_string(),
            source,
        })?;
    let end_addr: IpAddr = end.parse().map_err(|source| LoadError::InvalidEndAddress {
        line,
        value: end.to_string(),
        source,
    })?;
    if compare_addr(start_addr, end_addr).is_none() {
        return Err(LoadError::FamilyMismatch {
            line,
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    let asn: u32 = asn.parse().map_err(|source| LoadError::InvalidAsNumber {
        line,
        value: asn.to_string(),
        source,
    })?;

    Ok(Zone::new(start_addr, end_addr, asn, country_code, description))
}

//! Zone record loading from tabular text sources
//!
//! Only materialized local data is handled here; fetching and
//! decompressing a dataset is left to the caller.

pub mod error;
pub mod tsv;

pub use error::LoadError;
pub use tsv::{load_tsv, load_tsv_file, parse_line};

use crate::registry::{Registry, RegistryConfig};
use std::path::Path;

/// Load a TSV file and build a registry from its records
pub fn load_registry(path: &Path, config: RegistryConfig) -> Result<Registry, LoadError> {
    let zones = load_tsv_file(path)?;
    Ok(Registry::from_vec(zones, config))
}

//! asndb - IP address to autonomous system lookups
//!
//! This library answers "which AS owns this address?" against a frozen
//! table of IP ranges. A [`Registry`] is built once from a list of
//! [`Zone`]s and then serves point lookups, overlap-aware neighborhood
//! lookups and reverse lookups by AS number. Keep one registry per
//! address family.
//!
//! ```
//! use asndb::{Registry, Zone};
//!
//! let registry = Registry::from_zones(&[Zone::new(
//!     "1.0.0.0".parse().unwrap(),
//!     "1.0.0.255".parse().unwrap(),
//!     13335,
//!     "US",
//!     "CLOUDFLARENET",
//! )]);
//!
//! let zone = registry.lookup("1.0.0.1".parse().unwrap()).unwrap();
//! assert_eq!(zone.asn, 13335);
//! ```

pub mod loader;
pub mod ordering;
pub mod registry;
pub mod zone;

// Re-export core types for library users
pub use loader::{load_registry, load_tsv, load_tsv_file, LoadError};
pub use registry::{Registry, RegistryConfig, RegistryConfigBuilder};
pub use zone::{Zone, ZoneSummary};

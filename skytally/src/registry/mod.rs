//! Aircraft identity registry.
//!
//! Maps an aircraft's hex identifier (ICAO 24-bit address) to a human-readable
//! [`Identity`]: registration, aircraft type and operator.
//!
//! # Two-tier lookup
//!
//! Two registries are loaded once at startup and are read-only afterwards:
//!
//! - **Primary** - bulk aircraft database export (first row per hex wins)
//! - **Overrides** - small hand-maintained corrections file (last row per hex wins)
//!
//! [`IdentityResolver`] consults the overrides first, then the primary
//! registry, and falls back to [`Identity::unknown`] when neither knows the hex.
//! A miss is a normal outcome, not an error.
//!
//! ```ignore
//! use skytally::registry::{load_resolver, IdentitySource};
//!
//! let resolver = load_resolver(&primary_csv, &overrides_csv)?;
//! let resolved = resolver.resolve("4CA7B3");
//! if resolved.source == IdentitySource::Unknown {
//!     println!("not in any registry");
//! }
//! ```

mod error;
mod identity;
mod loader;
mod resolver;

pub use error::RegistryError;
pub use identity::{normalize_hex, Identity, Registry, UNKNOWN_TYPE};
pub use loader::{
    load_overrides, load_primary, load_resolver, read_overrides, read_primary, LoadStats,
    PrimaryLayout,
};
pub use resolver::{IdentityResolver, IdentitySource, ResolvedIdentity};

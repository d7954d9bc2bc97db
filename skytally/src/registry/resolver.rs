//! Two-tier identity resolution.

use super::identity::{Identity, Registry};

/// Which registry produced a resolved identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentitySource {
    /// Found in the override registry.
    Override,
    /// Found in the primary registry.
    Primary,
    /// Found in neither; the default identity was used.
    Unknown,
}

impl std::fmt::Display for IdentitySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Override => write!(f, "override"),
            Self::Primary => write!(f, "primary"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Result of [`IdentityResolver::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    pub identity: Identity,
    pub source: IdentitySource,
}

/// Resolves hex identifiers against the override and primary registries.
///
/// Pure function of its two registries: no side effects, no error cases.
#[derive(Debug, Clone, Default)]
pub struct IdentityResolver {
    primary: Registry,
    overrides: Registry,
}

impl IdentityResolver {
    /// Create a resolver over the given registries.
    pub fn new(primary: Registry, overrides: Registry) -> Self {
        Self { primary, overrides }
    }

    /// Resolve a hex identifier, reporting which registry answered.
    ///
    /// Lookup order: overrides, then primary, then [`Identity::unknown`].
    pub fn resolve(&self, hex: &str) -> ResolvedIdentity {
        if let Some(identity) = self.overrides.get(hex) {
            return ResolvedIdentity {
                identity: identity.clone(),
                source: IdentitySource::Override,
            };
        }

        if let Some(identity) = self.primary.get(hex) {
            return ResolvedIdentity {
                identity: identity.clone(),
                source: IdentitySource::Primary,
            };
        }

        ResolvedIdentity {
            identity: Identity::unknown(),
            source: IdentitySource::Unknown,
        }
    }

    /// Resolve a hex identifier to its identity only.
    pub fn identity(&self, hex: &str) -> Identity {
        self.resolve(hex).identity
    }

    /// The primary registry.
    pub fn primary(&self) -> &Registry {
        &self.primary
    }

    /// The override registry.
    pub fn overrides(&self) -> &Registry {
        &self.overrides
    }
}

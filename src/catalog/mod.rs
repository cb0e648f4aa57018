//! Static reference data: alias table, taxonomy, hierarchy, and catalogs
//!
//! Everything here is loaded once and treated as immutable by the engine.
//! Reload replaces the whole snapshot atomically; in-flight analysis calls
//! keep the snapshot they started with.

pub mod aliases;
pub mod hierarchy;
pub mod resources;
pub mod roles;
pub mod taxonomy;

use crate::error::Result;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

pub use aliases::AliasTable;
pub use hierarchy::SkillHierarchy;
pub use resources::ResourceCatalog;
pub use roles::{RoleCatalog, RoleProfile};
pub use taxonomy::{CategoryInfo, SkillCategory, Taxonomy};

/// The read-only context injected into every engine call.
pub struct ReferenceData {
    pub aliases: AliasTable,
    pub taxonomy: Taxonomy,
    pub hierarchy: SkillHierarchy,
    pub roles: RoleCatalog,
    pub resources: ResourceCatalog,
}

/// External files a catalog can be (re)loaded from. `None` fields fall back
/// to the built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct CatalogSources {
    pub aliases_path: Option<PathBuf>,
    pub roles_path: Option<PathBuf>,
}

impl ReferenceData {
    pub fn with_defaults() -> Result<Self> {
        Self::from_sources(&CatalogSources::default())
    }

    pub fn from_sources(sources: &CatalogSources) -> Result<Self> {
        let aliases = match &sources.aliases_path {
            Some(path) => AliasTable::load_from(path)?,
            None => AliasTable::with_defaults()?,
        };
        let roles = match &sources.roles_path {
            Some(path) => RoleCatalog::load_from(path)?,
            None => RoleCatalog::with_defaults(),
        };
        Ok(Self {
            aliases,
            taxonomy: Taxonomy::with_defaults(),
            hierarchy: SkillHierarchy::with_defaults(),
            roles,
            resources: ResourceCatalog::with_defaults(),
        })
    }
}

/// Shared handle over the current reference-data snapshot.
///
/// `snapshot()` hands out an `Arc` clone; `reload()` builds a fresh
/// `ReferenceData` off to the side and swaps the pointer in one write-lock
/// acquisition, so readers never observe a half-updated catalog.
pub struct CatalogHandle {
    current: RwLock<Arc<ReferenceData>>,
    sources: CatalogSources,
}

impl CatalogHandle {
    pub fn new(sources: CatalogSources) -> Result<Self> {
        let data = ReferenceData::from_sources(&sources)?;
        Ok(Self {
            current: RwLock::new(Arc::new(data)),
            sources,
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(CatalogSources::default())
    }

    pub fn snapshot(&self) -> Arc<ReferenceData> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Rebuild the reference data from its sources and swap it in. On
    /// failure the previous snapshot stays active.
    pub fn reload(&self) -> Result<()> {
        let fresh = Arc::new(ReferenceData::from_sources(&self.sources)?);
        let mut guard = self
            .current
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = fresh;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_a_populated_catalog() {
        let data = ReferenceData::with_defaults().unwrap();
        assert!(data.aliases.alias_count() > 50);
        assert!(data.taxonomy.skill_count() > 100);
        assert!(data.roles.role_count() >= 5);
        assert!(data.hierarchy.relation_count() > 30);
    }

    #[test]
    fn reload_swaps_the_snapshot() {
        let handle = CatalogHandle::with_defaults().unwrap();
        let before = handle.snapshot();
        handle.reload().unwrap();
        let after = handle.snapshot();
        // Old snapshot remains valid for holders even after the swap.
        assert!(before.roles.role_count() == after.roles.role_count());
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn reload_failure_keeps_previous_snapshot() {
        let handle = CatalogHandle::new(CatalogSources::default()).unwrap();
        let broken = CatalogSources {
            roles_path: Some(PathBuf::from("/nonexistent/roles.toml")),
            ..CatalogSources::default()
        };
        assert!(ReferenceData::from_sources(&broken).is_err());
        // The handle built from good sources still serves its snapshot.
        assert!(handle.snapshot().roles.role_count() >= 5);
    }
}

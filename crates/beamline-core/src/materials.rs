// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Material Store
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Material lookup injected into the component in place of a global store.

use beamline_types::constants::{AIR_MATERIAL, STEEL_MATERIAL, VACUUM_MATERIAL, YOKE_MATERIAL};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    /// Density [g/cm^3].
    pub density: f64,
}

pub trait MaterialStore {
    fn material(&self, name: &str) -> Option<Material>;
}

/// In-memory material table.
#[derive(Debug, Clone, Default)]
pub struct MaterialTable {
    materials: HashMap<String, Material>,
}

impl MaterialTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding the four materials the UDipole refers to.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.insert(VACUUM_MATERIAL, 1.0e-25);
        table.insert(AIR_MATERIAL, 1.205e-3);
        table.insert(STEEL_MATERIAL, 8.0);
        table.insert(YOKE_MATERIAL, 7.874);
        table
    }

    pub fn insert(&mut self, name: &str, density: f64) {
        self.materials.insert(
            name.to_string(),
            Material {
                name: name.to_string(),
                density,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

impl MaterialStore for MaterialTable {
    fn material(&self, name: &str) -> Option<Material> {
        self.materials.get(name).cloned()
    }
}

/// Materials resolved once at construction.
///
/// A missing entry is not an error here; whichever engine consumes the
/// material name reports it.
#[derive(Debug, Clone, Default)]
pub struct ReferenceMaterials {
    pub vacuum: Option<Material>,
    pub air: Option<Material>,
    pub steel: Option<Material>,
    pub iron: Option<Material>,
}

impl ReferenceMaterials {
    pub fn resolve(store: &dyn MaterialStore) -> Self {
        let lookup = |name: &str| {
            let found = store.material(name);
            if found.is_none() {
                tracing::warn!(material = name, "material not found in store");
            }
            found
        };
        ReferenceMaterials {
            vacuum: lookup(VACUUM_MATERIAL),
            air: lookup(AIR_MATERIAL),
            steel: lookup(STEEL_MATERIAL),
            iron: lookup(YOKE_MATERIAL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_resolves_all() {
        let table = MaterialTable::with_defaults();
        assert_eq!(table.len(), 4);
        let refs = ReferenceMaterials::resolve(&table);
        assert!(refs.vacuum.is_some());
        assert!(refs.air.is_some());
        assert!(refs.steel.is_some());
        assert_eq!(refs.iron.map(|m| m.name).as_deref(), Some("G4_Fe"));
    }

    #[test]
    fn test_missing_material_is_deferred() {
        let table = MaterialTable::new();
        let refs = ReferenceMaterials::resolve(&table);
        assert!(refs.iron.is_none());
        assert!(refs.vacuum.is_none());
    }
}

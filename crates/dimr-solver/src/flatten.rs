//! Interface flattening.
//!
//! The flattened interface list of a type is every interface it implements,
//! directly or through its bases, in the order the runtime interface map
//! lists them:
//!
//! 1. for a class or struct with a base type, the base type's flattened list;
//! 2. then each directly declared interface in declaration order, followed
//!    immediately by its own flattened list (depth-first preorder).
//!
//! The first occurrence of an interface fixes its position; later
//! encounters are dropped. An interface's own list holds the interfaces it
//! extends and never the interface itself.
//!
//! Results are memoized per type for the lifetime of the cache. The cache is
//! safe to fill lazily from several threads: each thread computes outside the
//! map's locks and the first insert wins, so every caller observes the same
//! `Arc`.

use dashmap::DashMap;
use dimr_binder::{SymbolArena, TypeId};
use dimr_common::limits::{MAX_FLATTENED_INTERFACES, MAX_INHERITANCE_DEPTH};
use indexmap::IndexSet;
use rustc_hash::{FxBuildHasher, FxHashSet};
use std::sync::Arc;
use tracing::trace;

type OrderedTypes = IndexSet<TypeId, FxBuildHasher>;

/// Memoized flattened interface lists, keyed by type.
#[derive(Debug, Default)]
pub struct InterfaceFlattening {
    cache: DashMap<TypeId, Arc<[TypeId]>, FxBuildHasher>,
}

impl InterfaceFlattening {
    pub fn new() -> Self {
        Self::default()
    }

    /// The flattened interface list of `ty`.
    pub fn flattened_interfaces(&self, arena: &SymbolArena, ty: TypeId) -> Arc<[TypeId]> {
        let mut visiting = FxHashSet::default();
        self.flatten(arena, ty, &mut visiting)
    }

    /// Whether `interface` appears anywhere in the flattened list of `ty`.
    pub fn implements_interface(&self, arena: &SymbolArena, ty: TypeId, interface: TypeId) -> bool {
        self.flattened_interfaces(arena, ty).contains(&interface)
    }

    /// Fill the cache for `types` up front, single-threaded, so later
    /// concurrent queries only read.
    pub fn prepopulate(&self, arena: &SymbolArena, types: impl IntoIterator<Item = TypeId>) {
        for ty in types {
            self.flattened_interfaces(arena, ty);
        }
    }

    /// Number of memoized types.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn flatten(
        &self,
        arena: &SymbolArena,
        ty: TypeId,
        visiting: &mut FxHashSet<TypeId>,
    ) -> Arc<[TypeId]> {
        if let Some(cached) = self.cache.get(&ty).map(|entry| Arc::clone(entry.value())) {
            return cached;
        }
        // Re-entering a type means the arena holds a cycle the binder would
        // have broken; treat the inner occurrence as contributing nothing.
        if visiting.len() >= MAX_INHERITANCE_DEPTH || !visiting.insert(ty) {
            return Arc::from([]);
        }

        let symbol = arena.type_symbol(ty);
        let mut out = OrderedTypes::default();
        if !symbol.is_interface()
            && let Some(base) = symbol.base_type
        {
            out.extend(self.flatten(arena, base, visiting).iter().copied());
        }
        for &interface in &symbol.declared_interfaces {
            self.push_interface(arena, ty, interface, &mut out, visiting);
        }
        visiting.remove(&ty);

        let computed: Arc<[TypeId]> = out.into_iter().collect();
        trace!(
            type_id = ty.0,
            interfaces = computed.len(),
            "flattened interfaces"
        );
        let entry = self.cache.entry(ty).or_insert(computed);
        Arc::clone(entry.value())
    }

    fn push_interface(
        &self,
        arena: &SymbolArena,
        origin: TypeId,
        interface: TypeId,
        out: &mut OrderedTypes,
        visiting: &mut FxHashSet<TypeId>,
    ) {
        if interface == origin || out.len() >= MAX_FLATTENED_INTERFACES {
            return;
        }
        // Already present means its own bases are present too.
        if !out.insert(interface) {
            return;
        }
        for &inherited in self.flatten(arena, interface, visiting).iter() {
            if out.len() >= MAX_FLATTENED_INTERFACES {
                break;
            }
            if inherited != origin {
                out.insert(inherited);
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/flatten_tests.rs"]
mod flatten_tests;

//! Per-type member tables for the inheritance walk.
//!
//! Each level of the walk only looks at the members a type declares itself.
//! A `LevelTable` indexes those members once: implicit candidates by
//! signature, the shapes of everything declared under each name (for
//! hiding), and explicit implementations by the interface member they target.

use dashmap::DashMap;
use dimr_binder::{MemberId, MemberKindKey, SignatureKey, SymbolArena, TypeId};
use dimr_common::limits::MEMBER_TABLE_CAPACITY;
use rustc_hash::{FxBuildHasher, FxHashMap};
use smallvec::SmallVec;
use std::sync::Arc;

/// What kinds of members a type declares under one name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NameShape {
    pub methods: bool,
    pub properties: bool,
    pub events: bool,
}

#[derive(Debug, Default)]
pub struct LevelTable {
    /// Non-explicit top-level members by signature, in declaration order.
    implicit: FxHashMap<SignatureKey, SmallVec<[MemberId; 1]>>,
    names: FxHashMap<Arc<str>, NameShape>,
    /// Interface member -> explicit implementation declared at this level.
    explicit: FxHashMap<MemberId, MemberId>,
}

impl LevelTable {
    pub fn build(arena: &SymbolArena, ty: TypeId) -> Self {
        let mut table = Self {
            implicit: FxHashMap::with_capacity_and_hasher(MEMBER_TABLE_CAPACITY, FxBuildHasher),
            names: FxHashMap::with_capacity_and_hasher(MEMBER_TABLE_CAPACITY, FxBuildHasher),
            explicit: FxHashMap::default(),
        };

        for &id in &arena.type_symbol(ty).members {
            let member = arena.member(id);
            if let Some(target) = member.explicit_interface_target {
                table.explicit.insert(target.member, id);
                for accessor in member.accessors() {
                    if let Some(target) = arena.member(accessor).explicit_interface_target {
                        table.explicit.insert(target.member, accessor);
                    }
                }
                continue;
            }
            if member.is_explicit_implementation() {
                // Named an interface but never bound; implements nothing.
                continue;
            }

            let key = SignatureKey::of(member);
            let shape = table.names.entry(Arc::clone(&member.name)).or_default();
            match key.kind {
                MemberKindKey::Method => shape.methods = true,
                MemberKindKey::Property => shape.properties = true,
                MemberKindKey::Event => shape.events = true,
                MemberKindKey::Indexer | MemberKindKey::Accessor(_) => {}
            }
            table.implicit.entry(key).or_default().push(id);
        }
        table
    }

    /// Members declared at this level with exactly this signature.
    pub fn implicit_candidates(&self, key: &SignatureKey) -> &[MemberId] {
        self.implicit
            .get(key)
            .map(|ids| ids.as_slice())
            .unwrap_or_default()
    }

    /// The explicit implementation of `interface_member` declared here.
    pub fn explicit_implementation(&self, interface_member: MemberId) -> Option<MemberId> {
        self.explicit.get(&interface_member).copied()
    }

    pub fn name_shape(&self, name: &str) -> NameShape {
        self.names.get(name).copied().unwrap_or_default()
    }

    /// Whether a search for `key` must stop at this level: some member
    /// declared here under the same name hides everything of that name
    /// further up the chain.
    ///
    /// Only a member of a different kind hides: methods of another
    /// signature are overloads, and a same-kind property or event is a
    /// signature match the caller has already looked at. Indexers are
    /// hidden only by signature.
    pub fn hides(&self, key: &SignatureKey) -> bool {
        let shape = self.name_shape(&key.name);
        match key.kind {
            MemberKindKey::Method => shape.properties || shape.events,
            MemberKindKey::Property => shape.methods || shape.events,
            MemberKindKey::Event => shape.methods || shape.properties,
            MemberKindKey::Indexer | MemberKindKey::Accessor(_) => false,
        }
    }
}

/// Memoized [`LevelTable`]s, keyed by type.
#[derive(Debug, Default)]
pub struct LevelTables {
    cache: DashMap<TypeId, Arc<LevelTable>, FxBuildHasher>,
}

impl LevelTables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&self, arena: &SymbolArena, ty: TypeId) -> Arc<LevelTable> {
        if let Some(cached) = self.cache.get(&ty).map(|entry| Arc::clone(entry.value())) {
            return cached;
        }
        let built = Arc::new(LevelTable::build(arena, ty));
        let entry = self.cache.entry(ty).or_insert(built);
        Arc::clone(entry.value())
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

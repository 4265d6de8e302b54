//! Implementation resolver.
//!
//! `find_implementation(ty, m)` answers which member provides the runtime
//! implementation of interface member `m` for instances of `ty`:
//!
//! 1. `m` must be an implementable interface member and its interface must
//!    be in the flattened list of `ty`; otherwise there is no answer.
//! 2. Accessors resolve through their property or event. An accessor the
//!    implementing property or event leaves out falls back to step 5.
//! 3. Explicit implementations win. The chain is searched most-derived
//!    first and the first level declaring one is the answer.
//! 4. Otherwise the chain is searched for a public instance member with a
//!    matching signature. Static and non-public matches are skipped (and
//!    remembered for diagnostics); a member of another kind under the same
//!    name hides the rest of the chain.
//! 5. Otherwise the interface member's own body, if it has one.
//!
//! The resolver only reads the arena. Its caches are concurrent maps, so one
//! resolver may be shared by many threads.

use dimr_binder::{
    AccessorKind, MemberId, SignatureKey, SymbolArena, TypeId, matches_explicit_target,
};
use std::sync::Arc;
use tracing::{debug, trace};

use crate::default_body::resolve_default_body;
use crate::flatten::InterfaceFlattening;
use crate::levels::LevelTables;

/// How an implementation was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImplementationSource {
    Explicit,
    Implicit,
    /// The interface member's own body.
    DefaultBody,
}

impl ImplementationSource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::Implicit => "implicit",
            Self::DefaultBody => "default",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Implementation {
    pub member: MemberId,
    pub source: ImplementationSource,
}

/// Why a candidate with the right signature was passed over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MismatchReason {
    Static,
    NotPublic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CloseMismatch {
    pub candidate: MemberId,
    pub reason: MismatchReason,
}

/// Full answer of a resolution query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    pub implementation: Option<Implementation>,
    /// The most-derived candidate skipped for being static or non-public.
    pub close_mismatch: Option<CloseMismatch>,
}

impl Resolution {
    fn found(member: MemberId, source: ImplementationSource) -> Self {
        Self {
            implementation: Some(Implementation { member, source }),
            close_mismatch: None,
        }
    }

    pub fn member(&self) -> Option<MemberId> {
        self.implementation.map(|i| i.member)
    }

    pub fn source(&self) -> Option<ImplementationSource> {
        self.implementation.map(|i| i.source)
    }
}

/// Caches shared by every resolver over one arena.
#[derive(Debug, Default)]
pub struct ResolverCaches {
    pub interfaces: InterfaceFlattening,
    pub levels: LevelTables,
}

impl ResolverCaches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolver<'a>(&'a self, arena: &'a SymbolArena) -> ImplementationResolver<'a> {
        ImplementationResolver::new(arena, &self.interfaces, &self.levels)
    }
}

#[derive(Clone, Copy)]
pub struct ImplementationResolver<'a> {
    arena: &'a SymbolArena,
    interfaces: &'a InterfaceFlattening,
    levels: &'a LevelTables,
}

impl<'a> ImplementationResolver<'a> {
    pub fn new(
        arena: &'a SymbolArena,
        interfaces: &'a InterfaceFlattening,
        levels: &'a LevelTables,
    ) -> Self {
        Self {
            arena,
            interfaces,
            levels,
        }
    }

    pub fn arena(&self) -> &'a SymbolArena {
        self.arena
    }

    pub fn flattened_interfaces(&self, ty: TypeId) -> Arc<[TypeId]> {
        self.interfaces.flattened_interfaces(self.arena, ty)
    }

    /// The member implementing `interface_member` for `ty`, if any.
    pub fn find_implementation(&self, ty: TypeId, interface_member: MemberId) -> Option<MemberId> {
        self.find_implementation_with_details(ty, interface_member)
            .member()
    }

    pub fn find_implementation_with_details(
        &self,
        ty: TypeId,
        interface_member: MemberId,
    ) -> Resolution {
        let arena = self.arena;
        if !arena.is_implementable_interface_member(interface_member) {
            trace!(member = interface_member.0, "not implementable");
            return Resolution::default();
        }
        let interface = arena.member(interface_member).owner;
        if !self.interfaces.implements_interface(arena, ty, interface) {
            return Resolution::default();
        }

        let member = arena.member(interface_member);
        if let (Some(parent), Some(kind)) = (member.accessor_parent(), member.accessor_kind()) {
            return self.resolve_accessor(ty, interface_member, parent, kind);
        }

        let resolution = if arena.type_symbol(ty).is_interface() {
            Resolution::default()
        } else if let Some(explicit) = self.find_explicit(ty, interface_member, interface) {
            Resolution::found(explicit, ImplementationSource::Explicit)
        } else {
            self.find_implicit(ty, interface_member)
        };
        let resolution = self.or_default_body(ty, interface_member, resolution);

        debug!(
            type_name = %arena.type_symbol(ty).name,
            member = interface_member.0,
            implementation = ?resolution.member().map(|m| m.0),
            source = ?resolution.source(),
            "resolved interface member"
        );
        resolution
    }

    fn or_default_body(
        &self,
        ty: TypeId,
        interface_member: MemberId,
        mut resolution: Resolution,
    ) -> Resolution {
        if resolution.implementation.is_none() {
            let assembly = self.arena.type_symbol(ty).assembly;
            if let Some(member) = resolve_default_body(self.arena, interface_member, assembly).member()
            {
                resolution.implementation = Some(Implementation {
                    member,
                    source: ImplementationSource::DefaultBody,
                });
            }
        }
        resolution
    }

    /// Most-derived explicit implementation, from levels that themselves
    /// implement the interface.
    fn find_explicit(
        &self,
        ty: TypeId,
        interface_member: MemberId,
        interface: TypeId,
    ) -> Option<MemberId> {
        let arena = self.arena;
        arena.base_chain(ty).find_map(|level| {
            if !self.interfaces.implements_interface(arena, level, interface) {
                return None;
            }
            let candidate = self
                .levels
                .table(arena, level)
                .explicit_implementation(interface_member)?;
            matches_explicit_target(arena.member(candidate), interface_member, interface)
                .then_some(candidate)
        })
    }

    fn find_implicit(&self, ty: TypeId, interface_member: MemberId) -> Resolution {
        let arena = self.arena;
        let key = SignatureKey::of(arena.member(interface_member));
        let mut close_mismatch = None;

        for level in arena.base_chain(ty) {
            let table = self.levels.table(arena, level);
            for &candidate in table.implicit_candidates(&key) {
                let symbol = arena.member(candidate);
                let reason = if symbol.is_static() {
                    MismatchReason::Static
                } else if !symbol.is_public() {
                    MismatchReason::NotPublic
                } else {
                    return Resolution {
                        implementation: Some(Implementation {
                            member: candidate,
                            source: ImplementationSource::Implicit,
                        }),
                        close_mismatch,
                    };
                };
                trace!(candidate = candidate.0, ?reason, "skipped candidate");
                close_mismatch.get_or_insert(CloseMismatch { candidate, reason });
            }
            if table.hides(&key) {
                trace!(level = level.0, name = %key.name, "hidden by member of another kind");
                break;
            }
        }

        Resolution {
            implementation: None,
            close_mismatch,
        }
    }

    /// An accessor is implemented by the matching accessor of whatever
    /// implements its property or event.
    fn resolve_accessor(
        &self,
        ty: TypeId,
        interface_accessor: MemberId,
        parent: MemberId,
        kind: AccessorKind,
    ) -> Resolution {
        let arena = self.arena;
        let parent_resolution = self.find_implementation_with_details(ty, parent);
        let close_mismatch = parent_resolution.close_mismatch.map(|close| CloseMismatch {
            candidate: arena
                .member(close.candidate)
                .accessor(kind)
                .unwrap_or(close.candidate),
            reason: close.reason,
        });

        let Some(found) = parent_resolution.implementation else {
            let resolution = Resolution {
                implementation: None,
                close_mismatch,
            };
            return self.or_default_body(ty, interface_accessor, resolution);
        };

        match found.source {
            ImplementationSource::DefaultBody => {
                self.or_default_body(ty, interface_accessor, Resolution::default())
            }
            ImplementationSource::Explicit => {
                let interface = arena.member(interface_accessor).owner;
                let accessor = arena.member(found.member).accessor(kind).filter(|&a| {
                    matches_explicit_target(arena.member(a), interface_accessor, interface)
                });
                let resolution = Resolution {
                    implementation: accessor.map(|member| Implementation {
                        member,
                        source: ImplementationSource::Explicit,
                    }),
                    close_mismatch,
                };
                self.or_default_body(ty, interface_accessor, resolution)
            }
            ImplementationSource::Implicit => {
                let resolution = match arena.member(found.member).accessor(kind) {
                    Some(accessor) if arena.member(accessor).is_public() => {
                        Resolution::found(accessor, ImplementationSource::Implicit)
                    }
                    Some(accessor) => Resolution {
                        implementation: None,
                        close_mismatch: Some(CloseMismatch {
                            candidate: accessor,
                            reason: MismatchReason::NotPublic,
                        }),
                    },
                    None => Resolution {
                        implementation: None,
                        close_mismatch,
                    },
                };
                self.or_default_body(ty, interface_accessor, resolution)
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/resolver_tests.rs"]
mod resolver_tests;

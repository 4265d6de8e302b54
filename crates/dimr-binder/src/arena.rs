//! Arena owning every symbol of a compilation.

use dimr_common::limits::MAX_INHERITANCE_DEPTH;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::Write;
use std::sync::Arc;
use tracing::trace;

use crate::assembly::{AssemblySymbol, CoreLibrary};
use crate::symbols::{AssemblyId, MemberId, MemberKind, MemberSymbol, TypeId, TypeSymbol};

/// Dense storage for assemblies, types and members.
///
/// Ids index straight into the vectors. An id that does not belong to this
/// arena is a bug in whoever produced it, so lookups panic on it.
#[derive(Debug, Default)]
pub struct SymbolArena {
    assemblies: Vec<AssemblySymbol>,
    types: Vec<TypeSymbol>,
    members: Vec<MemberSymbol>,
    type_names: FxHashMap<AssemblyId, FxHashMap<Arc<str>, TypeId>>,
}

impl SymbolArena {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Registration
    // =========================================================================

    pub fn add_assembly(
        &mut self,
        name: impl Into<Arc<str>>,
        core_library: Option<CoreLibrary>,
        is_metadata: bool,
    ) -> AssemblyId {
        let id = AssemblyId(self.assemblies.len() as u32);
        let name = name.into();
        trace!(assembly = %name, id = id.0, is_metadata, "registered assembly");
        self.assemblies
            .push(AssemblySymbol::new(id, name, core_library, is_metadata));
        id
    }

    /// Register a type. `symbol.id` is overwritten with the allocated id.
    pub fn add_type(&mut self, mut symbol: TypeSymbol) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        symbol.id = id;
        self.type_names
            .entry(symbol.assembly)
            .or_default()
            .entry(Arc::clone(&symbol.name))
            .or_insert(id);
        self.assemblies[symbol.assembly.0 as usize].types.push(id);
        trace!(type_name = %symbol.name, id = id.0, "registered type");
        self.types.push(symbol);
        id
    }

    /// Register a member. `symbol.id` is overwritten with the allocated id.
    /// The caller links it into its owner or parent.
    pub fn add_member(&mut self, mut symbol: MemberSymbol) -> MemberId {
        let id = MemberId(self.members.len() as u32);
        symbol.id = id;
        self.members.push(symbol);
        id
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn assembly(&self, id: AssemblyId) -> &AssemblySymbol {
        &self.assemblies[id.0 as usize]
    }

    pub(crate) fn assembly_mut(&mut self, id: AssemblyId) -> &mut AssemblySymbol {
        &mut self.assemblies[id.0 as usize]
    }

    pub fn assemblies(&self) -> &[AssemblySymbol] {
        &self.assemblies
    }

    pub fn assembly_by_name(&self, name: &str) -> Option<AssemblyId> {
        self.assemblies
            .iter()
            .find(|a| &*a.name == name)
            .map(|a| a.id)
    }

    pub fn type_symbol(&self, id: TypeId) -> &TypeSymbol {
        &self.types[id.0 as usize]
    }

    pub(crate) fn type_mut(&mut self, id: TypeId) -> &mut TypeSymbol {
        &mut self.types[id.0 as usize]
    }

    pub fn member(&self, id: MemberId) -> &MemberSymbol {
        &self.members[id.0 as usize]
    }

    pub(crate) fn member_mut(&mut self, id: MemberId) -> &mut MemberSymbol {
        &mut self.members[id.0 as usize]
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Types declared by one assembly, in declaration order.
    pub fn types_of_assembly(&self, assembly: AssemblyId) -> &[TypeId] {
        &self.assembly(assembly).types
    }

    /// Find a type by name within one assembly.
    pub fn lookup_type_in(&self, assembly: AssemblyId, name: &str) -> Option<TypeId> {
        self.type_names
            .get(&assembly)
            .and_then(|names| names.get(name))
            .copied()
    }

    /// Find a type by name as seen from `assembly`: its own types first, then
    /// each reference in order.
    pub fn lookup_type(&self, assembly: AssemblyId, name: &str) -> Option<TypeId> {
        self.lookup_type_in(assembly, name).or_else(|| {
            self.assembly(assembly)
                .references
                .iter()
                .find_map(|&r| self.lookup_type_in(r, name))
        })
    }

    /// First top-level member of `ty` named `name`.
    pub fn lookup_member(&self, ty: TypeId, name: &str) -> Option<MemberId> {
        self.type_symbol(ty)
            .members
            .iter()
            .copied()
            .find(|&m| &*self.member(m).name == name)
    }

    /// Whether `member` takes part in implementation lookup: an abstract,
    /// virtual or sealed instance member of an interface that is not private.
    ///
    /// A sealed member is non-virtual but still resolves like any other;
    /// without an implementing member it is its own implementation.
    pub fn is_implementable_interface_member(&self, member: MemberId) -> bool {
        let symbol = self.member(member);
        self.type_symbol(symbol.owner).is_interface()
            && !symbol.is_explicit_implementation()
            && (symbol.is_abstract() || symbol.is_virtual() || symbol.is_sealed())
            && !symbol.is_static()
            && !symbol.is_private()
    }

    /// Whether an explicit implementation may name `member`. Sealed members
    /// cannot be overridden, so they are never explicit targets.
    pub fn is_explicit_target_candidate(&self, member: MemberId) -> bool {
        self.is_implementable_interface_member(member) && !self.member(member).is_sealed()
    }

    /// `ty` followed by its base classes, most-derived first.
    ///
    /// The walk stops at [`MAX_INHERITANCE_DEPTH`] levels or at the first
    /// repeated type, so a malformed arena still yields a finite chain.
    pub fn base_chain(&self, ty: TypeId) -> BaseChain<'_> {
        BaseChain {
            arena: self,
            next: Some(ty),
            visited: FxHashSet::default(),
        }
    }

    // =========================================================================
    // Display
    // =========================================================================

    pub fn type_display(&self, id: TypeId) -> String {
        self.type_symbol(id).name.to_string()
    }

    /// Display name used in diagnostics: `I1.M1(int, ref string)`, `I1.P`,
    /// `I1.this[int]`, `I1.P.get`, `Test3.I1.M1()`.
    pub fn member_display(&self, id: MemberId) -> String {
        let member = self.member(id);
        if let MemberKind::Accessor { kind, parent } = member.kind {
            return format!("{}.{}", self.member_display(parent), kind.prefix());
        }

        let mut out = String::new();
        out.push_str(&self.type_symbol(member.owner).name);
        out.push('.');
        if let Some(iface) = &member.explicit_interface_name {
            out.push_str(iface);
            out.push('.');
        }
        match member.kind {
            MemberKind::Method => {
                out.push_str(&member.name);
                out.push('(');
                self.write_parameters(&mut out, member);
                out.push(')');
            }
            MemberKind::Property {
                is_indexer: true, ..
            } => {
                out.push_str("this[");
                self.write_parameters(&mut out, member);
                out.push(']');
            }
            MemberKind::Property { .. } | MemberKind::Event { .. } => {
                out.push_str(&member.name);
            }
            MemberKind::Accessor { .. } => unreachable!("accessors handled above"),
        }
        out
    }

    fn write_parameters(&self, out: &mut String, member: &MemberSymbol) {
        for (i, param) in member.signature.parameters.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if let Some(keyword) = param.ref_kind.keyword() {
                let _ = write!(out, "{keyword} ");
            }
            out.push_str(param.ty.as_str());
        }
    }
}

/// Iterator over an inheritance chain. See [`SymbolArena::base_chain`].
pub struct BaseChain<'a> {
    arena: &'a SymbolArena,
    next: Option<TypeId>,
    visited: FxHashSet<TypeId>,
}

impl Iterator for BaseChain<'_> {
    type Item = TypeId;

    fn next(&mut self) -> Option<TypeId> {
        let current = self.next.take()?;
        if self.visited.len() >= MAX_INHERITANCE_DEPTH || !self.visited.insert(current) {
            return None;
        }
        self.next = self.arena.type_symbol(current).base_type;
        Some(current)
    }
}

#[cfg(test)]
#[path = "tests/arena_tests.rs"]
mod tests;

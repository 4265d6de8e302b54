//! Metadata round trip.
//!
//! A compiled assembly is exported back into declarations carrying its
//! normalized modifiers, and a referencing compilation binds those in
//! metadata mode into its own arena. Ids do not survive the trip, so members
//! are compared across arenas by [`MemberKey`].

use dimr_common::SourceSpan;
use std::sync::Arc;
use tracing::debug;

use crate::arena::SymbolArena;
use crate::declarations::{
    AccessorDecl, AssemblyDecl, EventDecl, MemberDecl, MethodDecl, ParameterDecl, PropertyDecl,
    TypeDecl,
};
use crate::modifiers::Modifiers;
use crate::signature::SignatureKey;
use crate::state::{BinderOptions, bind_assembly};
use crate::symbols::{AssemblyId, MemberId, MemberKind, MemberSymbol, TypeId};

/// Arena-independent identity of a member.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberKey {
    pub assembly: Arc<str>,
    pub declaring_type: Arc<str>,
    /// Interface named by an explicit implementation.
    pub explicit_interface: Option<Arc<str>>,
    /// For accessors, the key of the property or event they belong to.
    pub parent: Option<SignatureKey>,
    pub signature: SignatureKey,
}

impl MemberKey {
    pub fn of(arena: &SymbolArena, member: MemberId) -> Self {
        let symbol = arena.member(member);
        let owner = arena.type_symbol(symbol.owner);
        Self {
            assembly: Arc::clone(&arena.assembly(owner.assembly).name),
            declaring_type: Arc::clone(&owner.name),
            explicit_interface: symbol.explicit_interface_name.clone(),
            parent: symbol
                .accessor_parent()
                .map(|parent| SignatureKey::of(arena.member(parent))),
            signature: SignatureKey::of(symbol),
        }
    }

    /// Find the member with this key in another arena.
    pub fn resolve(&self, arena: &SymbolArena) -> Option<MemberId> {
        let assembly = arena.assembly_by_name(&self.assembly)?;
        let ty = arena.lookup_type_in(assembly, &self.declaring_type)?;
        let top_level = self.parent.as_ref().unwrap_or(&self.signature);
        let found = arena.type_symbol(ty).members.iter().copied().find(|&m| {
            let symbol = arena.member(m);
            symbol.explicit_interface_name == self.explicit_interface
                && SignatureKey::of(symbol) == *top_level
        })?;
        if self.parent.is_none() {
            return Some(found);
        }
        arena
            .member(found)
            .accessors()
            .into_iter()
            .find(|&a| SignatureKey::of(arena.member(a)) == self.signature)
    }
}

/// Turn one assembly of `arena` back into declarations.
pub fn export_assembly(arena: &SymbolArena, assembly: AssemblyId) -> AssemblyDecl {
    let symbol = arena.assembly(assembly);
    let decl = AssemblyDecl {
        name: symbol.name.to_string(),
        core_library: symbol.core_library.clone(),
        references: symbol
            .references
            .iter()
            .map(|&r| arena.assembly(r).name.to_string())
            .collect(),
        types: symbol
            .types
            .iter()
            .map(|&ty| export_type(arena, ty))
            .collect(),
    };
    debug!(assembly = %symbol.name, types = decl.types.len(), "exported assembly");
    decl
}

/// Bind exported declarations as a referenced assembly.
pub fn import_assembly(
    arena: &mut SymbolArena,
    decl: &AssemblyDecl,
    references: &[AssemblyId],
) -> AssemblyId {
    bind_assembly(arena, decl, references, BinderOptions::metadata()).assembly
}

fn export_type(arena: &SymbolArena, ty: TypeId) -> TypeDecl {
    let symbol = arena.type_symbol(ty);
    TypeDecl {
        name: symbol.name.to_string(),
        kind: symbol.kind,
        modifiers: symbol.modifiers,
        base: symbol.base_type.map(|b| arena.type_display(b)),
        interfaces: symbol
            .declared_interfaces
            .iter()
            .map(|&i| arena.type_display(i))
            .collect(),
        members: symbol
            .members
            .iter()
            .map(|&m| export_member(arena, m))
            .collect(),
        span: SourceSpan::none(),
        interface_list_span: SourceSpan::none(),
    }
}

fn export_parameters(symbol: &MemberSymbol) -> Vec<ParameterDecl> {
    symbol
        .signature
        .parameters
        .iter()
        .map(|p| ParameterDecl::by_ref(p.ty.as_str(), p.ref_kind))
        .collect()
}

fn export_accessor(arena: &SymbolArena, parent: &MemberSymbol, accessor: MemberId) -> AccessorDecl {
    let symbol = arena.member(accessor);
    let access = symbol.modifiers.accessibility();
    let modifiers = if access.is_some() && access != parent.modifiers.accessibility() {
        symbol.modifiers & Modifiers::ACCESSIBILITY
    } else {
        Modifiers::empty()
    };
    AccessorDecl {
        modifiers,
        has_body: symbol.has_body,
        span: SourceSpan::none(),
    }
}

fn export_member(arena: &SymbolArena, member: MemberId) -> MemberDecl {
    let symbol = arena.member(member);
    let explicit_interface = symbol.explicit_interface_name.as_deref().map(str::to_string);
    match symbol.kind {
        MemberKind::Method => MemberDecl::Method(MethodDecl {
            name: symbol.name.to_string(),
            explicit_interface,
            modifiers: symbol.modifiers,
            parameters: export_parameters(symbol),
            return_type: symbol.signature.return_type.as_str().to_string(),
            returns_by_ref: symbol.signature.returns_by_ref,
            has_body: symbol.has_body,
            span: SourceSpan::none(),
        }),
        MemberKind::Property {
            is_indexer,
            getter,
            setter,
        } => {
            let decl = PropertyDecl {
                name: symbol.name.to_string(),
                explicit_interface,
                modifiers: symbol.modifiers,
                ty: symbol.signature.return_type.as_str().to_string(),
                parameters: export_parameters(symbol),
                returns_by_ref: symbol.signature.returns_by_ref,
                getter: getter.map(|g| export_accessor(arena, symbol, g)),
                setter: setter.map(|s| export_accessor(arena, symbol, s)),
                span: SourceSpan::none(),
            };
            if is_indexer {
                MemberDecl::Indexer(decl)
            } else {
                MemberDecl::Property(decl)
            }
        }
        MemberKind::Event { adder, remover } => MemberDecl::Event(EventDecl {
            name: symbol.name.to_string(),
            explicit_interface,
            modifiers: symbol.modifiers,
            ty: symbol.signature.return_type.as_str().to_string(),
            adder: adder.map(|a| export_accessor(arena, symbol, a)),
            remover: remover.map(|r| export_accessor(arena, symbol, r)),
            span: SourceSpan::none(),
        }),
        MemberKind::Accessor { .. } => {
            unreachable!("accessors are exported with their property or event")
        }
    }
}

#[cfg(test)]
#[path = "tests/metadata_key_tests.rs"]
mod tests;

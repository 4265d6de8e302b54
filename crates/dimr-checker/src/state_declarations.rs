//! Checks on a type's own declarations.

use dimr_binder::{MemberId, MemberKindKey, MemberSymbol, SignatureKey, TypeId};
use dimr_common::DiagnosticArg;
use dimr_common::diagnostics::diagnostic_codes;
use dimr_solver::declaration_site_diagnostic;
use smallvec::SmallVec;

use crate::state::CheckerState;

impl CheckerState<'_> {
    /// CS0540: an explicit implementation names an interface the type does
    /// not implement.
    pub(crate) fn check_explicit_implementations(&mut self, ty: TypeId) {
        let arena = self.arena;
        let interfaces = self.resolver.flattened_interfaces(ty);
        for &member in &arena.type_symbol(ty).members {
            let symbol = arena.member(member);
            let Some(target) = symbol.explicit_interface_target else {
                continue;
            };
            if interfaces.contains(&target.interface) {
                continue;
            }
            let args = vec![self.member_arg(member), self.type_arg(target.interface)];
            self.report(
                diagnostic_codes::CONTAINING_TYPE_DOES_NOT_IMPLEMENT_INTERFACE,
                &symbol.span,
                args,
            );
        }
    }

    /// CS8701 on every interface member with a body while the runtime
    /// cannot dispatch to interface bodies.
    pub(crate) fn check_default_bodies(&mut self, interface: TypeId) {
        let arena = self.arena;
        let bodied: SmallVec<[MemberId; 4]> = arena
            .type_symbol(interface)
            .members
            .iter()
            .copied()
            .filter(|&member| {
                let symbol = arena.member(member);
                symbol.has_implementation()
                    || symbol
                        .accessors()
                        .iter()
                        .any(|&a| arena.member(a).has_implementation())
            })
            .collect();
        if bodied.is_empty() || self.runtime_supported() {
            return;
        }
        for member in bodied {
            self.diagnostics
                .push(declaration_site_diagnostic(arena, member));
        }
    }

    /// CS0108 for a member that hides an inherited one without `new`, and
    /// CS0109 for `new` on a member that hides nothing.
    pub(crate) fn check_member_hiding(&mut self, ty: TypeId) {
        let arena = self.arena;
        let symbol = arena.type_symbol(ty);
        for &member in &symbol.members {
            let declared = arena.member(member);
            if declared.is_explicit_implementation() || declared.is_override() {
                continue;
            }
            let hidden = symbol
                .base_type
                .and_then(|base| self.find_hidden_member(base, declared));
            match hidden {
                Some(hidden) if !declared.is_new() => {
                    let args = vec![self.member_arg(member), self.member_arg(hidden)];
                    self.report(
                        diagnostic_codes::HIDES_INHERITED_MEMBER_USE_THE_NEW_KEYWORD,
                        &declared.span,
                        args,
                    );
                }
                None if declared.is_new() => {
                    self.report(
                        diagnostic_codes::DOES_NOT_HIDE_AN_ACCESSIBLE_MEMBER,
                        &declared.span,
                        vec![DiagnosticArg::Member(arena.member_display(member).into())],
                    );
                }
                _ => {}
            }
        }
    }

    /// The most-derived accessible member of `base`'s chain that `member`
    /// hides.
    fn find_hidden_member(&self, base: TypeId, member: &MemberSymbol) -> Option<MemberId> {
        let arena = self.arena;
        let key = SignatureKey::of(member);
        arena.base_chain(base).find_map(|level| {
            arena
                .type_symbol(level)
                .members
                .iter()
                .copied()
                .find(|&candidate| {
                    let symbol = arena.member(candidate);
                    symbol.name == member.name
                        && !symbol.is_private()
                        && !symbol.is_explicit_implementation()
                        && hides(&key, &SignatureKey::of(symbol))
                })
        })
    }
}

/// Methods and indexers hide their own kind only by signature; anything
/// else hides every member of the same name.
fn hides(member: &SignatureKey, inherited: &SignatureKey) -> bool {
    match (member.kind, inherited.kind) {
        (MemberKindKey::Method, MemberKindKey::Method)
        | (MemberKindKey::Indexer, MemberKindKey::Indexer) => {
            member.parameters == inherited.parameters
        }
        _ => true,
    }
}

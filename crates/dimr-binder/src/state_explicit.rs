//! Binding explicit interface implementations to their targets.
//!
//! `void I1.M()` is bound once, here, to the exact member of `I1` it
//! implements. Accessors of an explicit property or event are bound to the
//! matching accessors of the target.

use dimr_common::DiagnosticArg;
use dimr_common::diagnostics::diagnostic_codes;
use std::sync::Arc;
use tracing::trace;

use crate::signature::matches_for_implementation;
use crate::symbols::{ExplicitTarget, MemberId, TypeId};

use super::state::BinderState;

impl BinderState<'_> {
    pub(crate) fn bind_explicit_targets(&mut self, types: &[TypeId]) {
        for &ty in types {
            let members = self.arena.type_symbol(ty).members.clone();
            for member in members {
                if let Some(interface_name) = self.arena.member(member).explicit_interface_name.clone()
                {
                    self.bind_explicit_target(member, &interface_name);
                }
            }
        }
    }

    fn bind_explicit_target(&mut self, member: MemberId, interface_name: &Arc<str>) {
        let span = self.arena.member(member).span.clone();
        let Some(interface) = self.resolve_type_name(interface_name, &span) else {
            return;
        };
        if !self.arena.type_symbol(interface).is_interface() {
            self.report(
                diagnostic_codes::EXPLICIT_INTERFACE_DECLARATION_IS_NOT_AN_INTERFACE,
                &span,
                vec![DiagnosticArg::Type(Arc::clone(interface_name))],
            );
            return;
        }

        let symbol = self.arena.member(member);
        let target = self
            .arena
            .type_symbol(interface)
            .members
            .iter()
            .copied()
            .find(|&candidate| {
                self.arena.is_explicit_target_candidate(candidate)
                    && matches_for_implementation(symbol, self.arena.member(candidate))
            });
        let Some(target) = target else {
            let display = self.arena.member_display(member);
            self.report(
                diagnostic_codes::EXPLICIT_INTERFACE_MEMBER_NOT_FOUND,
                &span,
                vec![DiagnosticArg::Member(display.into())],
            );
            return;
        };

        trace!(member = member.0, target = target.0, "bound explicit implementation");
        self.arena.member_mut(member).explicit_interface_target = Some(ExplicitTarget {
            interface,
            member: target,
        });

        let accessors = self.arena.member(member).accessors();
        for accessor in accessors {
            let Some(kind) = self.arena.member(accessor).accessor_kind() else {
                continue;
            };
            match self.arena.member(target).accessor(kind) {
                Some(target_accessor)
                    if self.arena.is_explicit_target_candidate(target_accessor) =>
                {
                    self.arena.member_mut(accessor).explicit_interface_target =
                        Some(ExplicitTarget {
                            interface,
                            member: target_accessor,
                        });
                }
                _ => {
                    let args = vec![
                        DiagnosticArg::Member(self.arena.member_display(accessor).into()),
                        DiagnosticArg::Member(self.arena.member_display(target).into()),
                    ];
                    let accessor_span = self.arena.member(accessor).span.clone();
                    self.report(
                        diagnostic_codes::ADDS_AN_ACCESSOR_NOT_FOUND_IN_INTERFACE_MEMBER,
                        &accessor_span,
                        args,
                    );
                }
            }
        }
    }
}

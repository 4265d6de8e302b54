//! Interface implementation checks for one class or struct.

use dimr_binder::{MemberId, TypeId, return_types_match};
use dimr_common::DiagnosticArg;
use dimr_common::diagnostics::diagnostic_codes;
use dimr_solver::{
    CloseMismatch, ImplementationSource, MismatchReason, resolve_default_body, use_site_diagnostic,
};

use crate::state::CheckerState;

impl CheckerState<'_> {
    /// Resolve every implementable member of every interface `ty`
    /// implements and report what could not be resolved.
    pub(crate) fn check_interface_implementations(&mut self, ty: TypeId) {
        let arena = self.arena;
        let interfaces = self.resolver.flattened_interfaces(ty);
        for &interface in interfaces.iter() {
            for &member in &arena.type_symbol(interface).members {
                if arena.is_implementable_interface_member(member) {
                    self.check_interface_member(ty, member);
                }
            }
        }
    }

    fn check_interface_member(&mut self, ty: TypeId, interface_member: MemberId) {
        let resolution = self
            .resolver
            .find_implementation_with_details(ty, interface_member);
        let Some(found) = resolution.implementation else {
            self.report_unimplemented(ty, interface_member, resolution.close_mismatch);
            return;
        };

        match found.source {
            ImplementationSource::DefaultBody => self.check_default_body_use(ty, interface_member),
            ImplementationSource::Implicit => {
                self.check_return_type(ty, interface_member, found.member);
                self.check_accessors(ty, interface_member);
            }
            ImplementationSource::Explicit => self.check_accessors(ty, interface_member),
        }
    }

    /// CS0535, or CS0736/CS0737 naming the candidate that came closest.
    fn report_unimplemented(
        &mut self,
        ty: TypeId,
        interface_member: MemberId,
        close_mismatch: Option<CloseMismatch>,
    ) {
        let span = self.arena.type_symbol(ty).interface_list_span.clone();
        let mut args = vec![self.type_arg(ty), self.member_arg(interface_member)];
        let code = match close_mismatch {
            Some(CloseMismatch { candidate, reason }) => {
                args.push(self.member_arg(candidate));
                match reason {
                    MismatchReason::Static => {
                        diagnostic_codes::DOES_NOT_IMPLEMENT_INTERFACE_MEMBER_CANDIDATE_IS_STATIC
                    }
                    MismatchReason::NotPublic => {
                        diagnostic_codes::DOES_NOT_IMPLEMENT_INTERFACE_MEMBER_CANDIDATE_IS_NOT_PUBLIC
                    }
                }
            }
            None => diagnostic_codes::DOES_NOT_IMPLEMENT_INTERFACE_MEMBER,
        };
        self.report(code, &span, args);
    }

    /// An implementing property or event must also supply each accessor
    /// the interface requires. Accessors it leaves out fall back to the
    /// interface accessor's own body.
    fn check_accessors(&mut self, ty: TypeId, interface_member: MemberId) {
        let arena = self.arena;
        for accessor in arena.member(interface_member).accessors() {
            if !arena.is_implementable_interface_member(accessor) {
                continue;
            }
            let resolution = self.resolver.find_implementation_with_details(ty, accessor);
            match resolution.source() {
                None => self.report_unimplemented(ty, accessor, resolution.close_mismatch),
                Some(ImplementationSource::DefaultBody) => {
                    self.check_default_body_use(ty, accessor);
                }
                Some(_) => {}
            }
        }
    }

    fn check_return_type(&mut self, ty: TypeId, interface_member: MemberId, candidate: MemberId) {
        let arena = self.arena;
        let target = arena.member(interface_member);
        if return_types_match(arena.member(candidate), target) {
            return;
        }
        let expected = if target.signature.returns_by_ref {
            format!("ref {}", target.signature.return_type.as_str())
        } else {
            target.signature.return_type.as_str().to_string()
        };
        let span = arena.type_symbol(ty).interface_list_span.clone();
        let args = vec![
            self.type_arg(ty),
            self.member_arg(interface_member),
            self.member_arg(candidate),
            DiagnosticArg::Type(expected.into()),
        ];
        self.report(
            diagnostic_codes::DOES_NOT_IMPLEMENT_INTERFACE_MEMBER_WRONG_RETURN_TYPE,
            &span,
            args,
        );
    }

    /// A default body from a referenced assembly is reported where the
    /// implementing type lists its interfaces. Bodies declared in this
    /// assembly are reported at their declaration instead.
    fn check_default_body_use(&mut self, ty: TypeId, interface_member: MemberId) {
        let arena = self.arena;
        let declaring_assembly = arena.type_symbol(arena.member(interface_member).owner).assembly;
        if declaring_assembly == self.assembly {
            return;
        }
        if resolve_default_body(arena, interface_member, self.assembly).is_runtime_unsupported() {
            self.diagnostics
                .push(use_site_diagnostic(arena, ty, interface_member));
        }
    }
}

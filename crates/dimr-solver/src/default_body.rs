//! Default-body fallback and the runtime-support gate.
//!
//! When no type in the chain implements an interface member, the member's
//! own body (or `extern` implementation) is its implementation. Whether the
//! target runtime can dispatch to it is a property of the compiling
//! assembly; reading it here freezes that assembly's flag.

use dimr_binder::{AssemblyId, MemberId, SymbolArena, TypeId};
use dimr_common::diagnostics::diagnostic_codes;
use dimr_common::{DiagnosticArg, PendingDiagnostic};
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultBody {
    /// No body to fall back to.
    Missing,
    /// The interface member is its own implementation.
    Usable(MemberId),
    /// Still its own implementation, but the runtime cannot dispatch to it.
    RuntimeUnsupported(MemberId),
}

impl DefaultBody {
    /// The implementing member, whether or not the runtime supports it.
    pub fn member(self) -> Option<MemberId> {
        match self {
            Self::Missing => None,
            Self::Usable(member) | Self::RuntimeUnsupported(member) => Some(member),
        }
    }

    pub fn is_runtime_unsupported(self) -> bool {
        matches!(self, Self::RuntimeUnsupported(_))
    }
}

/// Decide whether `interface_member` serves as its own implementation for
/// code compiled into `assembly`.
pub fn resolve_default_body(
    arena: &SymbolArena,
    interface_member: MemberId,
    assembly: AssemblyId,
) -> DefaultBody {
    if !arena.member(interface_member).has_implementation() {
        return DefaultBody::Missing;
    }
    let supported = arena
        .assembly(assembly)
        .runtime_supports_default_interface_implementation();
    trace!(
        member = interface_member.0,
        assembly = assembly.0,
        supported,
        "default body fallback"
    );
    if supported {
        DefaultBody::Usable(interface_member)
    } else {
        DefaultBody::RuntimeUnsupported(interface_member)
    }
}

/// Error at a default body declared while the runtime cannot dispatch to it.
pub fn declaration_site_diagnostic(arena: &SymbolArena, member: MemberId) -> PendingDiagnostic {
    PendingDiagnostic::new(
        diagnostic_codes::TARGET_RUNTIME_DOES_NOT_SUPPORT_DEFAULT_INTERFACE_IMPLEMENTATION,
        arena.member(member).span.clone(),
        Vec::new(),
    )
}

/// Error at the interface list of a type that relies on a referenced
/// assembly's default body the runtime cannot dispatch to.
pub fn use_site_diagnostic(
    arena: &SymbolArena,
    implementing_type: TypeId,
    interface_member: MemberId,
) -> PendingDiagnostic {
    let ty = arena.type_symbol(implementing_type);
    let display = arena.member_display(interface_member);
    let diagnostic = PendingDiagnostic::new(
        diagnostic_codes::TARGET_RUNTIME_DOES_NOT_SUPPORT_DEFAULT_INTERFACE_IMPLEMENTATION_FOR_MEMBER,
        ty.interface_list_span.clone(),
        vec![
            DiagnosticArg::Member(display.as_str().into()),
            DiagnosticArg::Type(ty.name.clone()),
        ],
    );
    let declared_at = &arena.member(interface_member).span;
    if declared_at.is_none() {
        diagnostic
    } else {
        diagnostic.with_related(
            declared_at.clone(),
            diagnostic_codes::DECLARED_HERE,
            vec![DiagnosticArg::Member(display.into())],
        )
    }
}

#[cfg(test)]
#[path = "../tests/default_body_tests.rs"]
mod default_body_tests;

//! Member signature matching.
//!
//! Two members "match" when they have the same kind, name, and parameter
//! list (types and ref-ness, in order). Return types take no part in the
//! comparison, and neither does static-ness; the resolver checks those
//! separately so it can report why a near miss was rejected.

use smallvec::SmallVec;
use std::sync::Arc;

use crate::symbols::{AccessorKind, MemberId, MemberKind, MemberSymbol, RefKind, TypeId};

/// Shape of a member as far as matching is concerned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberKindKey {
    Method,
    Property,
    Indexer,
    Event,
    Accessor(AccessorKind),
}

impl MemberKindKey {
    pub fn of(kind: &MemberKind) -> Self {
        match kind {
            MemberKind::Method => Self::Method,
            MemberKind::Property {
                is_indexer: true, ..
            } => Self::Indexer,
            MemberKind::Property { .. } => Self::Property,
            MemberKind::Event { .. } => Self::Event,
            MemberKind::Accessor { kind, .. } => Self::Accessor(*kind),
        }
    }
}

/// Canonical, arena-independent identity of a member signature.
///
/// Used as the lookup key of per-level member tables and, together with
/// the declaring type's name, to recognise the same member after a
/// metadata round trip.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SignatureKey {
    pub kind: MemberKindKey,
    pub name: Arc<str>,
    pub parameters: SmallVec<[(Arc<str>, RefKind); 4]>,
}

impl SignatureKey {
    pub fn of(member: &MemberSymbol) -> Self {
        Self {
            kind: MemberKindKey::of(&member.kind),
            name: Arc::clone(&member.name),
            parameters: member
                .signature
                .parameters
                .iter()
                .map(|p| (Arc::clone(&p.ty.0), p.ref_kind))
                .collect(),
        }
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// Whether `candidate` has the signature of `target` for implicit
/// implementation and hiding purposes.
pub fn matches_for_implementation(candidate: &MemberSymbol, target: &MemberSymbol) -> bool {
    MemberKindKey::of(&candidate.kind) == MemberKindKey::of(&target.kind)
        && candidate.name == target.name
        && candidate.signature.parameters.len() == target.signature.parameters.len()
        && candidate
            .signature
            .parameters
            .iter()
            .zip(&target.signature.parameters)
            .all(|(a, b)| a.ty == b.ty && a.ref_kind == b.ref_kind)
}

/// Whether `candidate` is the explicit implementation bound to exactly
/// `interface_member` of `interface_type`.
///
/// Identity, not signature: explicit targets are resolved once at binding.
pub fn matches_explicit_target(
    candidate: &MemberSymbol,
    interface_member: MemberId,
    interface_type: TypeId,
) -> bool {
    candidate
        .explicit_interface_target
        .is_some_and(|t| t.member == interface_member && t.interface == interface_type)
}

/// Whether the return types (including by-ref-ness) agree.
pub fn return_types_match(candidate: &MemberSymbol, target: &MemberSymbol) -> bool {
    candidate.signature.return_type == target.signature.return_type
        && candidate.signature.returns_by_ref == target.signature.returns_by_ref
}

#[cfg(test)]
#[path = "tests/signature_tests.rs"]
mod tests;

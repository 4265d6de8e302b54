//! Symbol model: assemblies, types and members.
//!
//! Symbols live in a [`SymbolArena`](crate::SymbolArena) and refer to each other through dense
//! `u32` ids. A type owns its members (the member records its `owner`), and a
//! property or event owns its accessors (each accessor records its `parent`).
//! Everything here is plain data; binding rules live in the binder state and
//! resolution rules in the solver crate.

use dimr_common::SourceSpan;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::sync::Arc;

use crate::modifiers::{Accessibility, Modifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AssemblyId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypeId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MemberId(pub u32);

// =============================================================================
// Types
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
}

impl TypeKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Interface => "interface",
        }
    }
}

#[derive(Clone, Debug)]
pub struct TypeSymbol {
    pub id: TypeId,
    pub name: Arc<str>,
    pub kind: TypeKind,
    pub assembly: AssemblyId,
    pub modifiers: Modifiers,
    /// Base class. Always `None` for interfaces.
    pub base_type: Option<TypeId>,
    /// Interfaces listed directly on the declaration, in order.
    pub declared_interfaces: Vec<TypeId>,
    /// Top-level members in declaration order. Accessors are reached through
    /// their property or event.
    pub members: Vec<MemberId>,
    pub span: SourceSpan,
    /// Location of the base/interface list; implementation errors point here.
    pub interface_list_span: SourceSpan,
}

impl TypeSymbol {
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn is_abstract(&self) -> bool {
        self.modifiers.contains(Modifiers::ABSTRACT)
    }

    pub fn is_sealed(&self) -> bool {
        self.modifiers.contains(Modifiers::SEALED) || self.kind == TypeKind::Struct
    }
}

// =============================================================================
// Members
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorKind {
    Get,
    Set,
    Add,
    Remove,
}

impl AccessorKind {
    /// Prefix of the accessor's metadata name (`get_P`).
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }

    pub fn accessor_name(self, parent: &str) -> Arc<str> {
        format!("{}_{parent}", self.prefix()).into()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Method,
    Property {
        is_indexer: bool,
        getter: Option<MemberId>,
        setter: Option<MemberId>,
    },
    Event {
        adder: Option<MemberId>,
        remover: Option<MemberId>,
    },
    Accessor {
        kind: AccessorKind,
        parent: MemberId,
    },
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RefKind {
    #[default]
    None,
    Ref,
    Out,
    In,
}

impl RefKind {
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Ref => Some("ref"),
            Self::Out => Some("out"),
            Self::In => Some("in"),
        }
    }
}

/// A type as written in a signature.
///
/// Types are compared structurally by their spelling; the resolver never
/// needs more than that.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeRef(pub Arc<str>);

impl TypeRef {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn void() -> Self {
        Self("void".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Parameter {
    pub ty: TypeRef,
    pub ref_kind: RefKind,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    pub parameters: SmallVec<[Parameter; 4]>,
    pub return_type: TypeRef,
    pub returns_by_ref: bool,
}

/// The exact interface member an explicit implementation is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExplicitTarget {
    pub interface: TypeId,
    pub member: MemberId,
}

#[derive(Clone, Debug)]
pub struct MemberSymbol {
    pub id: MemberId,
    pub name: Arc<str>,
    pub kind: MemberKind,
    pub owner: TypeId,
    pub signature: Signature,
    /// Modifiers as written.
    pub declared_modifiers: Modifiers,
    /// Modifiers after binder normalization.
    pub modifiers: Modifiers,
    /// Bound target of an explicit implementation; `None` until target
    /// binding runs, and for every implicit member.
    pub explicit_interface_target: Option<ExplicitTarget>,
    /// The `I1` in `void I1.M()`.
    pub explicit_interface_name: Option<Arc<str>>,
    pub has_body: bool,
    pub span: SourceSpan,
}

impl MemberSymbol {
    pub fn is_static(&self) -> bool {
        self.modifiers.contains(Modifiers::STATIC)
    }

    pub fn is_abstract(&self) -> bool {
        self.modifiers.contains(Modifiers::ABSTRACT)
    }

    pub fn is_virtual(&self) -> bool {
        self.modifiers.contains(Modifiers::VIRTUAL)
    }

    pub fn is_sealed(&self) -> bool {
        self.modifiers.contains(Modifiers::SEALED)
    }

    pub fn is_extern(&self) -> bool {
        self.modifiers.contains(Modifiers::EXTERN)
    }

    pub fn is_override(&self) -> bool {
        self.modifiers.contains(Modifiers::OVERRIDE)
    }

    pub fn is_private(&self) -> bool {
        self.accessibility() == Accessibility::Private
    }

    /// Declared with `new`.
    pub fn is_new(&self) -> bool {
        self.declared_modifiers.contains(Modifiers::NEW)
    }

    /// Has a body, or is extern and gets one from outside.
    pub fn has_implementation(&self) -> bool {
        self.has_body || self.is_extern()
    }

    pub fn is_explicit_implementation(&self) -> bool {
        self.explicit_interface_name.is_some()
    }

    /// Normalized members always carry an accessibility keyword; explicit
    /// implementations are only reachable through their interface and count
    /// as private.
    pub fn accessibility(&self) -> Accessibility {
        self.modifiers
            .accessibility()
            .unwrap_or(Accessibility::Private)
    }

    pub fn is_public(&self) -> bool {
        self.accessibility() == Accessibility::Public
    }

    pub fn is_method(&self) -> bool {
        matches!(self.kind, MemberKind::Method)
    }

    pub fn is_indexer(&self) -> bool {
        matches!(
            self.kind,
            MemberKind::Property {
                is_indexer: true,
                ..
            }
        )
    }

    pub fn accessor_kind(&self) -> Option<AccessorKind> {
        match self.kind {
            MemberKind::Accessor { kind, .. } => Some(kind),
            _ => None,
        }
    }

    pub fn accessor_parent(&self) -> Option<MemberId> {
        match self.kind {
            MemberKind::Accessor { parent, .. } => Some(parent),
            _ => None,
        }
    }

    /// Accessors of a property or event, in declaration order.
    pub fn accessors(&self) -> SmallVec<[MemberId; 2]> {
        let (first, second) = match self.kind {
            MemberKind::Property { getter, setter, .. } => (getter, setter),
            MemberKind::Event { adder, remover } => (adder, remover),
            MemberKind::Method | MemberKind::Accessor { .. } => (None, None),
        };
        first.into_iter().chain(second).collect()
    }

    /// The accessor of the given kind, if this property or event has one.
    pub fn accessor(&self, kind: AccessorKind) -> Option<MemberId> {
        match (self.kind, kind) {
            (MemberKind::Property { getter, .. }, AccessorKind::Get) => getter,
            (MemberKind::Property { setter, .. }, AccessorKind::Set) => setter,
            (MemberKind::Event { adder, .. }, AccessorKind::Add) => adder,
            (MemberKind::Event { remover, .. }, AccessorKind::Remove) => remover,
            _ => None,
        }
    }
}

//! Declaration input format.
//!
//! Declarations are what a front end (or a metadata export) hands to the
//! binder: names are unresolved strings and modifiers are exactly as written.
//! They deserialize from the JSON manifest the CLI reads, and the builder
//! methods keep hand-written test fixtures short.

use dimr_common::SourceSpan;
use serde::{Deserialize, Deserializer, Serialize};

use crate::assembly::CoreLibrary;
use crate::modifiers::Modifiers;
use crate::symbols::{RefKind, TypeKind};

/// Accept `true` or `"true"` for boolean fields.
pub fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected boolean, found '{other}'"
            ))),
        },
    }
}

fn default_void() -> String {
    "void".to_string()
}

fn is_false(b: &bool) -> bool {
    !*b
}

// =============================================================================
// Assemblies and types
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_library: Option<CoreLibrary>,
    /// Names of referenced assemblies.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<String>,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

impl AssemblyDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_core_library(mut self, core_library: CoreLibrary) -> Self {
        self.core_library = Some(core_library);
        self
    }

    #[must_use]
    pub fn with_type(mut self, ty: TypeDecl) -> Self {
        self.types.push(ty);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDecl {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Base class. For a class, an interface named here is treated as the
    /// first entry of the interface list, the way a single base list reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub members: Vec<MemberDecl>,
    #[serde(default)]
    pub span: SourceSpan,
    #[serde(default)]
    pub interface_list_span: SourceSpan,
}

impl TypeDecl {
    pub fn new(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            modifiers: Modifiers::empty(),
            base: None,
            interfaces: Vec::new(),
            members: Vec::new(),
            span: SourceSpan::none(),
            interface_list_span: SourceSpan::none(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Class, name)
    }

    pub fn struct_type(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Struct, name)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(TypeKind::Interface, name)
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    #[must_use]
    pub fn with_interfaces(mut self, interfaces: &[&str]) -> Self {
        self.interfaces
            .extend(interfaces.iter().map(|s| (*s).to_string()));
        self
    }

    #[must_use]
    pub fn with_member(mut self, member: impl Into<MemberDecl>) -> Self {
        self.members.push(member.into());
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = span;
        self
    }

    #[must_use]
    pub fn with_interface_list_span(mut self, span: SourceSpan) -> Self {
        self.interface_list_span = span;
        self
    }
}

// =============================================================================
// Members
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "camelCase")]
pub enum MemberDecl {
    Method(MethodDecl),
    Property(PropertyDecl),
    Indexer(PropertyDecl),
    Event(EventDecl),
}

impl MemberDecl {
    pub fn name(&self) -> &str {
        match self {
            Self::Method(m) => &m.name,
            Self::Property(p) => &p.name,
            Self::Indexer(_) => "this",
            Self::Event(e) => &e.name,
        }
    }
}

impl From<MethodDecl> for MemberDecl {
    fn from(decl: MethodDecl) -> Self {
        Self::Method(decl)
    }
}

impl From<PropertyDecl> for MemberDecl {
    fn from(decl: PropertyDecl) -> Self {
        if decl.parameters.is_empty() {
            Self::Property(decl)
        } else {
            Self::Indexer(decl)
        }
    }
}

impl From<EventDecl> for MemberDecl {
    fn from(decl: EventDecl) -> Self {
        Self::Event(decl)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDecl {
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default)]
    pub ref_kind: RefKind,
}

impl ParameterDecl {
    pub fn value(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            ref_kind: RefKind::None,
        }
    }

    pub fn by_ref(ty: impl Into<String>, ref_kind: RefKind) -> Self {
        Self {
            ty: ty.into(),
            ref_kind,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodDecl {
    pub name: String,
    /// `I1` in `void I1.M()`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_interface: Option<String>,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub parameters: Vec<ParameterDecl>,
    #[serde(default = "default_void")]
    pub return_type: String,
    #[serde(
        default,
        deserialize_with = "deserialize_bool_or_string",
        skip_serializing_if = "is_false"
    )]
    pub returns_by_ref: bool,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub has_body: bool,
    #[serde(default)]
    pub span: SourceSpan,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            explicit_interface: None,
            modifiers: Modifiers::empty(),
            parameters: Vec::new(),
            return_type: default_void(),
            returns_by_ref: false,
            has_body: false,
            span: SourceSpan::none(),
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: Vec<ParameterDecl>) -> Self {
        self.parameters = parameters;
        self
    }

    #[must_use]
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = ty.into();
        self
    }

    #[must_use]
    pub fn returns_ref(mut self, ty: impl Into<String>) -> Self {
        self.return_type = ty.into();
        self.returns_by_ref = true;
        self
    }

    #[must_use]
    pub fn with_body(mut self) -> Self {
        self.has_body = true;
        self
    }

    #[must_use]
    pub fn explicit(mut self, interface: impl Into<String>) -> Self {
        self.explicit_interface = Some(interface.into());
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = span;
        self
    }
}

/// One `get`/`set`/`add`/`remove` clause.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessorDecl {
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub has_body: bool,
    #[serde(default)]
    pub span: SourceSpan,
}

impl AccessorDecl {
    /// `get;`
    pub fn bodiless() -> Self {
        Self::default()
    }

    /// `get { ... }`
    pub fn with_body() -> Self {
        Self {
            has_body: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = span;
        self
    }
}

/// A property, or an indexer when `parameters` is non-empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDecl {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_interface: Option<String>,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterDecl>,
    #[serde(
        default,
        deserialize_with = "deserialize_bool_or_string",
        skip_serializing_if = "is_false"
    )]
    pub returns_by_ref: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub getter: Option<AccessorDecl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setter: Option<AccessorDecl>,
    #[serde(default)]
    pub span: SourceSpan,
}

impl PropertyDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            explicit_interface: None,
            modifiers: Modifiers::empty(),
            ty: ty.into(),
            parameters: Vec::new(),
            returns_by_ref: false,
            getter: None,
            setter: None,
            span: SourceSpan::none(),
        }
    }

    pub fn indexer(ty: impl Into<String>, parameters: Vec<ParameterDecl>) -> Self {
        let mut decl = Self::new("this", ty);
        decl.parameters = parameters;
        decl
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_getter(mut self, getter: AccessorDecl) -> Self {
        self.getter = Some(getter);
        self
    }

    #[must_use]
    pub fn with_setter(mut self, setter: AccessorDecl) -> Self {
        self.setter = Some(setter);
        self
    }

    #[must_use]
    pub fn explicit(mut self, interface: impl Into<String>) -> Self {
        self.explicit_interface = Some(interface.into());
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = span;
        self
    }
}

/// An event. With neither accessor it is field-like.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_interface: Option<String>,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adder: Option<AccessorDecl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remover: Option<AccessorDecl>,
    #[serde(default)]
    pub span: SourceSpan,
}

impl EventDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            explicit_interface: None,
            modifiers: Modifiers::empty(),
            ty: ty.into(),
            adder: None,
            remover: None,
            span: SourceSpan::none(),
        }
    }

    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub fn with_accessors(mut self, adder: AccessorDecl, remover: AccessorDecl) -> Self {
        self.adder = Some(adder);
        self.remover = Some(remover);
        self
    }

    #[must_use]
    pub fn explicit(mut self, interface: impl Into<String>) -> Self {
        self.explicit_interface = Some(interface.into());
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = span;
        self
    }
}

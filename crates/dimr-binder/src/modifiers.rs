//! Declaration modifiers.
//!
//! A member keeps two modifier sets: the one written in the declaration and a
//! normalized one produced by the binder. Only the normalized set is consulted
//! by resolution; the declared set exists for diagnostics and hiding checks.

use bitflags::bitflags;
use serde::de::Deserializer;
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u16 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const INTERNAL = 1 << 2;
        const PROTECTED_INTERNAL = 1 << 3;
        const PRIVATE = 1 << 4;
        const STATIC = 1 << 5;
        const VIRTUAL = 1 << 6;
        const ABSTRACT = 1 << 7;
        const SEALED = 1 << 8;
        const OVERRIDE = 1 << 9;
        const EXTERN = 1 << 10;
        const ASYNC = 1 << 11;
        const NEW = 1 << 12;

        const ACCESSIBILITY = Self::PUBLIC.bits()
            | Self::PROTECTED.bits()
            | Self::INTERNAL.bits()
            | Self::PROTECTED_INTERNAL.bits()
            | Self::PRIVATE.bits();
        const NON_PUBLIC = Self::PROTECTED.bits()
            | Self::INTERNAL.bits()
            | Self::PROTECTED_INTERNAL.bits()
            | Self::PRIVATE.bits();
        const DISPATCH = Self::VIRTUAL.bits() | Self::ABSTRACT.bits() | Self::OVERRIDE.bits();
    }
}

impl Modifiers {
    /// Declared accessibility, if any keyword was written.
    ///
    /// When several keywords are present the widest one wins; the binder has
    /// already reported such declarations.
    pub fn accessibility(self) -> Option<Accessibility> {
        if self.contains(Self::PUBLIC) {
            Some(Accessibility::Public)
        } else if self.contains(Self::PROTECTED_INTERNAL) {
            Some(Accessibility::ProtectedInternal)
        } else if self.contains(Self::INTERNAL) {
            Some(Accessibility::Internal)
        } else if self.contains(Self::PROTECTED) {
            Some(Accessibility::Protected)
        } else if self.contains(Self::PRIVATE) {
            Some(Accessibility::Private)
        } else {
            None
        }
    }

    /// Replace the accessibility bits with `access`.
    #[must_use]
    pub fn with_accessibility(self, access: Accessibility) -> Self {
        (self - Self::ACCESSIBILITY) | access.modifier()
    }

    /// Individual keywords in source order.
    pub fn keywords(self) -> impl Iterator<Item = Modifier> {
        Modifier::ALL
            .into_iter()
            .filter(move |m| self.contains(m.flag()))
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for keyword in self.keywords() {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            f.write_str(keyword.keyword())?;
        }
        Ok(())
    }
}

impl Serialize for Modifiers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let keywords: Vec<Modifier> = self.keywords().collect();
        let mut seq = serializer.serialize_seq(Some(keywords.len()))?;
        for keyword in keywords {
            seq.serialize_element(&keyword)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Modifiers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let keywords = Vec::<Modifier>::deserialize(deserializer)?;
        Ok(keywords
            .into_iter()
            .fold(Self::empty(), |acc, m| acc | m.flag()))
    }
}

/// A single modifier keyword, the unit the declaration format is written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Internal,
    #[serde(rename = "protected internal", alias = "protectedInternal")]
    ProtectedInternal,
    Private,
    Static,
    Virtual,
    Abstract,
    Sealed,
    Override,
    Extern,
    Async,
    New,
}

impl Modifier {
    pub const ALL: [Self; 13] = [
        Self::New,
        Self::Public,
        Self::ProtectedInternal,
        Self::Protected,
        Self::Internal,
        Self::Private,
        Self::Static,
        Self::Extern,
        Self::Abstract,
        Self::Virtual,
        Self::Sealed,
        Self::Override,
        Self::Async,
    ];

    pub const fn flag(self) -> Modifiers {
        match self {
            Self::Public => Modifiers::PUBLIC,
            Self::Protected => Modifiers::PROTECTED,
            Self::Internal => Modifiers::INTERNAL,
            Self::ProtectedInternal => Modifiers::PROTECTED_INTERNAL,
            Self::Private => Modifiers::PRIVATE,
            Self::Static => Modifiers::STATIC,
            Self::Virtual => Modifiers::VIRTUAL,
            Self::Abstract => Modifiers::ABSTRACT,
            Self::Sealed => Modifiers::SEALED,
            Self::Override => Modifiers::OVERRIDE,
            Self::Extern => Modifiers::EXTERN,
            Self::Async => Modifiers::ASYNC,
            Self::New => Modifiers::NEW,
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::ProtectedInternal => "protected internal",
            Self::Private => "private",
            Self::Static => "static",
            Self::Virtual => "virtual",
            Self::Abstract => "abstract",
            Self::Sealed => "sealed",
            Self::Override => "override",
            Self::Extern => "extern",
            Self::Async => "async",
            Self::New => "new",
        }
    }
}

/// Effective accessibility of a member.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Accessibility {
    Private,
    Protected,
    Internal,
    ProtectedInternal,
    Public,
}

impl Accessibility {
    pub const fn modifier(self) -> Modifiers {
        match self {
            Self::Private => Modifiers::PRIVATE,
            Self::Protected => Modifiers::PROTECTED,
            Self::Internal => Modifiers::INTERNAL,
            Self::ProtectedInternal => Modifiers::PROTECTED_INTERNAL,
            Self::Public => Modifiers::PUBLIC,
        }
    }

    // Protected and Internal are incomparable; both share a rank.
    const fn rank(self) -> u8 {
        match self {
            Self::Private => 0,
            Self::Protected | Self::Internal => 1,
            Self::ProtectedInternal => 2,
            Self::Public => 3,
        }
    }

    /// Whether `self` grants strictly less access than `other`.
    pub const fn is_more_restrictive_than(self, other: Self) -> bool {
        self.rank() < other.rank()
    }
}

#[cfg(test)]
#[path = "tests/modifiers_tests.rs"]
mod tests;

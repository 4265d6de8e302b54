//! Language versions and the features they gate.
//!
//! The gate is purely a front-end concern: a member that uses a feature the
//! selected version lacks is reported once and then demoted by the binder, so
//! downstream passes only ever see a consistent symbol.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LanguageVersion {
    CSharp7,
    CSharp7_1,
    CSharp7_2,
    CSharp7_3,
    CSharp8,
    #[default]
    Latest,
}

impl LanguageVersion {
    /// Display form used in diagnostics (`7.3`, `8.0`, `latest`).
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::CSharp7 => "7.0",
            Self::CSharp7_1 => "7.1",
            Self::CSharp7_2 => "7.2",
            Self::CSharp7_3 => "7.3",
            Self::CSharp8 => "8.0",
            Self::Latest => "latest",
        }
    }

    pub fn supports(self, feature: Feature) -> bool {
        self >= feature.required_version()
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for LanguageVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "7" | "7.0" => Ok(Self::CSharp7),
            "7.1" => Ok(Self::CSharp7_1),
            "7.2" => Ok(Self::CSharp7_2),
            "7.3" => Ok(Self::CSharp7_3),
            "8" | "8.0" => Ok(Self::CSharp8),
            "latest" | "default" | "preview" => Ok(Self::Latest),
            other => Err(format!("unknown language version '{other}'")),
        }
    }
}

impl Serialize for LanguageVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for LanguageVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A language feature that only exists from some version onwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Interface members with bodies and non-public interface member modifiers.
    DefaultInterfaceImplementation,
}

impl Feature {
    pub const fn required_version(self) -> LanguageVersion {
        match self {
            Self::DefaultInterfaceImplementation => LanguageVersion::CSharp8,
        }
    }

    /// Name used as the `{0}` argument of the feature-availability diagnostic.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::DefaultInterfaceImplementation => "default interface implementation",
        }
    }
}

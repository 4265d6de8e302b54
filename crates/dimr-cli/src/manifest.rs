//! The JSON compilation manifest.
//!
//! A manifest lists assemblies in dependency order. Each entry is an
//! assembly declaration plus the compilation options it is bound with:
//!
//! ```json
//! {
//!   "assemblies": [
//!     { "name": "Lib", "coreLibrary": { "name": "System.Runtime",
//!       "runtimeFeatures": ["DefaultImplementationsOfInterfaces"] },
//!       "types": [] },
//!     { "name": "App", "references": ["Lib"], "languageVersion": "7.3",
//!       "runtimeSupport": "false", "types": [] }
//!   ]
//! }
//! ```

use anyhow::{Context, Result, bail};
use dimr_binder::AssemblyDecl;
use dimr_checker::CompilationOptions;
use dimr_common::LanguageVersion;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer};
use std::path::Path;

/// Boolean options accept both `true` and `"true"`.
fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(Some(true)),
            "false" | "0" | "no" | "off" => Ok(Some(false)),
            _ => Err(Error::custom(format!(
                "invalid boolean value: '{s}'. Expected true, false, 'true', or 'false'"
            ))),
        },
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub assemblies: Vec<ManifestAssembly>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestAssembly {
    #[serde(flatten)]
    pub decl: AssemblyDecl,
    #[serde(default)]
    pub language_version: LanguageVersion,
    /// Overrides what the core library says about runtime support.
    #[serde(default, deserialize_with = "deserialize_optional_bool")]
    pub runtime_support: Option<bool>,
}

impl ManifestAssembly {
    pub fn options(&self) -> CompilationOptions {
        let options = CompilationOptions::default().with_language_version(self.language_version);
        match self.runtime_support {
            Some(supported) => options.with_runtime_support(supported),
            None => options,
        }
    }
}

impl Manifest {
    pub fn parse(text: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(text).context("invalid manifest JSON")?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("failed to load manifest {}", path.display()))
    }

    /// Names are unique and every reference names an earlier assembly.
    fn validate(&self) -> Result<()> {
        if self.assemblies.is_empty() {
            bail!("manifest lists no assemblies");
        }
        let mut seen = FxHashSet::default();
        for assembly in &self.assemblies {
            let name = assembly.decl.name.as_str();
            for reference in &assembly.decl.references {
                if !seen.contains(reference.as_str()) {
                    bail!(
                        "assembly '{name}' references '{reference}', which is not listed before it"
                    );
                }
            }
            if !seen.insert(name) {
                bail!("assembly '{name}' is listed twice");
            }
        }
        Ok(())
    }
}

//! Assemblies and the runtime-support capability flag.

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::symbols::{AssemblyId, TypeId};

/// Runtime feature a core library advertises when its runtime can dispatch
/// interface calls to interface-declared bodies.
pub const DEFAULT_IMPLEMENTATIONS_OF_INTERFACES: &str = "DefaultImplementationsOfInterfaces";

/// The core library an assembly compiles against.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreLibrary {
    pub name: String,
    #[serde(default)]
    pub runtime_features: Vec<String>,
}

impl CoreLibrary {
    /// A core library for a runtime with every feature this resolver knows.
    pub fn latest() -> Self {
        Self {
            name: "System.Runtime".to_string(),
            runtime_features: vec![DEFAULT_IMPLEMENTATIONS_OF_INTERFACES.to_string()],
        }
    }

    /// A core library for a runtime without default interface dispatch.
    pub fn legacy() -> Self {
        Self {
            name: "mscorlib".to_string(),
            runtime_features: Vec::new(),
        }
    }

    pub fn supports_default_interface_implementation(&self) -> bool {
        self.runtime_features
            .iter()
            .any(|f| f == DEFAULT_IMPLEMENTATIONS_OF_INTERFACES)
    }
}

#[derive(Debug)]
pub struct AssemblySymbol {
    pub id: AssemblyId,
    pub name: Arc<str>,
    pub core_library: Option<CoreLibrary>,
    /// Assemblies this one was compiled against.
    pub references: Vec<AssemblyId>,
    /// Imported from metadata rather than bound from source.
    pub is_metadata: bool,
    /// Types in declaration order.
    pub types: Vec<TypeId>,
    runtime_support: OnceCell<bool>,
}

impl AssemblySymbol {
    pub fn new(
        id: AssemblyId,
        name: Arc<str>,
        core_library: Option<CoreLibrary>,
        is_metadata: bool,
    ) -> Self {
        Self {
            id,
            name,
            core_library,
            references: Vec::new(),
            is_metadata,
            types: Vec::new(),
            runtime_support: OnceCell::new(),
        }
    }

    /// Whether the target runtime can dispatch to interface default bodies.
    ///
    /// The first read computes the value from the core library (an assembly
    /// without one has no runtime support) and freezes it.
    pub fn runtime_supports_default_interface_implementation(&self) -> bool {
        *self.runtime_support.get_or_init(|| {
            let supported = self
                .core_library
                .as_ref()
                .is_some_and(CoreLibrary::supports_default_interface_implementation);
            debug!(
                assembly = %self.name,
                supported,
                "runtime support for default interface implementation frozen"
            );
            supported
        })
    }

    /// Override the runtime-support flag before anything has read it.
    ///
    /// # Panics
    ///
    /// Panics if the flag was already set or read. That is a bug in the
    /// caller, not a user error.
    pub fn set_runtime_supports_default_interface_implementation(&self, value: bool) {
        if let Err(value) = self.runtime_support.set(value) {
            panic!(
                "runtime support flag of assembly '{}' is frozen; cannot set it to {value}",
                self.name
            );
        }
        debug!(assembly = %self.name, value, "runtime support overridden");
    }

    /// Whether the runtime-support flag has been set or read.
    pub fn is_runtime_support_frozen(&self) -> bool {
        self.runtime_support.get().is_some()
    }
}

//! Binder state and the top-level binding driver.
//!
//! Binding turns an [`AssemblyDecl`] into symbols in four phases:
//!
//! 1. declare every type so later phases can refer to any of them by name,
//! 2. resolve base types and interface lists, then break inheritance cycles,
//! 3. bind members, validating and normalizing their modifiers,
//! 4. bind explicit interface implementations to their exact targets.
//!
//! Phase 2 lives in `state_heritage.rs`, phase 3 in `state_members.rs` and
//! phase 4 in `state_explicit.rs`.

use dimr_common::diagnostics::diagnostic_codes;
use dimr_common::{DiagnosticArg, LanguageVersion, PendingDiagnostic, SourceSpan};
use tracing::{debug, trace};

use crate::arena::SymbolArena;
use crate::declarations::{AssemblyDecl, TypeDecl};
use crate::modifiers::Modifiers;
use crate::symbols::{AssemblyId, TypeId, TypeKind, TypeSymbol};

/// Where declarations come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BindMode {
    /// Source declarations: every rule is checked and reported.
    #[default]
    Source,
    /// Declarations exported from an already-compiled assembly. They are
    /// trusted; normalization still runs but nothing is reported and the
    /// language-version gate does not apply.
    Metadata,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BinderOptions {
    pub language_version: LanguageVersion,
    pub mode: BindMode,
}

impl BinderOptions {
    pub fn source(language_version: LanguageVersion) -> Self {
        Self {
            language_version,
            mode: BindMode::Source,
        }
    }

    pub fn metadata() -> Self {
        Self {
            language_version: LanguageVersion::Latest,
            mode: BindMode::Metadata,
        }
    }
}

/// Output of binding one assembly.
#[derive(Debug)]
pub struct BindResult {
    pub assembly: AssemblyId,
    /// Types in declaration order.
    pub types: Vec<TypeId>,
    pub diagnostics: Vec<PendingDiagnostic>,
}

pub struct BinderState<'a> {
    pub(crate) arena: &'a mut SymbolArena,
    pub(crate) assembly: AssemblyId,
    pub(crate) options: BinderOptions,
    pub(crate) diagnostics: Vec<PendingDiagnostic>,
}

/// Bind `decl` into `arena` as a new assembly compiled against `references`.
pub fn bind_assembly(
    arena: &mut SymbolArena,
    decl: &AssemblyDecl,
    references: &[AssemblyId],
    options: BinderOptions,
) -> BindResult {
    let is_metadata = options.mode == BindMode::Metadata;
    let assembly = arena.add_assembly(decl.name.as_str(), decl.core_library.clone(), is_metadata);
    arena.assembly_mut(assembly).references = references.to_vec();

    let mut state = BinderState {
        arena,
        assembly,
        options,
        diagnostics: Vec::new(),
    };
    let types = state.bind(&decl.types);
    debug!(
        assembly = %decl.name,
        types = types.len(),
        diagnostics = state.diagnostics.len(),
        is_metadata,
        "bound assembly"
    );
    BindResult {
        assembly,
        types,
        diagnostics: state.diagnostics,
    }
}

impl BinderState<'_> {
    fn bind(&mut self, decls: &[TypeDecl]) -> Vec<TypeId> {
        let types = self.declare_types(decls);
        trace!(count = types.len(), "declared types");

        self.resolve_heritage(decls, &types);
        self.break_inheritance_cycles(&types);

        for (decl, &ty) in decls.iter().zip(&types) {
            self.bind_members(ty, decl);
        }

        self.bind_explicit_targets(&types);
        types
    }

    fn declare_types(&mut self, decls: &[TypeDecl]) -> Vec<TypeId> {
        decls
            .iter()
            .map(|decl| {
                let mut modifiers = decl.modifiers;
                if decl.kind == TypeKind::Interface {
                    // Interfaces are implicitly abstract.
                    modifiers |= Modifiers::ABSTRACT;
                }
                self.arena.add_type(TypeSymbol {
                    id: TypeId(0),
                    name: decl.name.as_str().into(),
                    kind: decl.kind,
                    assembly: self.assembly,
                    modifiers,
                    base_type: None,
                    declared_interfaces: Vec::new(),
                    members: Vec::new(),
                    span: decl.span.clone(),
                    interface_list_span: if decl.interface_list_span.is_none() {
                        decl.span.clone()
                    } else {
                        decl.interface_list_span.clone()
                    },
                })
            })
            .collect()
    }

    pub(crate) fn is_metadata(&self) -> bool {
        self.options.mode == BindMode::Metadata
    }

    /// Record a diagnostic. Metadata binding trusts its input and drops them.
    pub(crate) fn report(&mut self, code: u32, span: &SourceSpan, args: Vec<DiagnosticArg>) {
        if self.is_metadata() {
            trace!(code, "suppressed diagnostic while binding metadata");
            return;
        }
        trace!(code, %span, "binder diagnostic");
        self.diagnostics
            .push(PendingDiagnostic::new(code, span.clone(), args));
    }

    /// Look a type name up from the assembly being bound, reporting it when
    /// it cannot be found.
    pub(crate) fn resolve_type_name(&mut self, name: &str, span: &SourceSpan) -> Option<TypeId> {
        let found = self.arena.lookup_type(self.assembly, name);
        if found.is_none() {
            self.report(
                diagnostic_codes::TYPE_OR_NAMESPACE_NAME_COULD_NOT_BE_FOUND,
                span,
                vec![DiagnosticArg::Type(name.into())],
            );
        }
        found
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;

//! One source assembly bound against the assemblies it references.
//!
//! A `Compilation` owns its symbol arena. Referenced compilations are not
//! shared: each one is exported to declarations and re-imported in metadata
//! mode, together with everything it references in turn, so symbol ids of a
//! reference differ between the two arenas and members are matched by
//! [`MemberKey`](dimr_binder::MemberKey) when that matters.

use dimr_binder::{
    AssemblyDecl, AssemblyId, BinderOptions, MemberId, SymbolArena, TypeId, bind_assembly,
    export_assembly, import_assembly,
};
use dimr_common::{Diagnostic, LanguageVersion, PendingDiagnostic};
use dimr_solver::{ImplementationResolver, Resolution, ResolverCaches};
use std::sync::Arc;
use tracing::{debug, info_span};

use crate::cancellation::{CancellationToken, Cancelled};
use crate::implementation_map::{ImplementationEntry, implementation_map};
use crate::state::check_compilation;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CompilationOptions {
    pub language_version: LanguageVersion,
    /// Replace the runtime-support flag the core library would give.
    pub runtime_support_override: Option<bool>,
}

impl CompilationOptions {
    #[must_use]
    pub fn with_language_version(mut self, language_version: LanguageVersion) -> Self {
        self.language_version = language_version;
        self
    }

    #[must_use]
    pub fn with_runtime_support(mut self, supported: bool) -> Self {
        self.runtime_support_override = Some(supported);
        self
    }
}

pub struct Compilation {
    arena: SymbolArena,
    assembly: AssemblyId,
    options: CompilationOptions,
    binder_diagnostics: Vec<PendingDiagnostic>,
    caches: ResolverCaches,
}

impl Compilation {
    /// Bind `decl` as source against `references`.
    pub fn new(
        decl: &AssemblyDecl,
        references: &[&Compilation],
        options: CompilationOptions,
    ) -> Self {
        let _span = info_span!("compilation", assembly = %decl.name).entered();
        let mut arena = SymbolArena::new();

        let mut direct = Vec::with_capacity(references.len());
        for reference in references {
            direct.extend(reference.import_into(&mut arena));
        }

        let result = bind_assembly(
            &mut arena,
            decl,
            &direct,
            BinderOptions::source(options.language_version),
        );
        if let Some(supported) = options.runtime_support_override {
            arena
                .assembly(result.assembly)
                .set_runtime_supports_default_interface_implementation(supported);
        }
        debug!(
            assembly = %decl.name,
            references = direct.len(),
            types = result.types.len(),
            binder_diagnostics = result.diagnostics.len(),
            "compilation bound"
        );

        Self {
            arena,
            assembly: result.assembly,
            options,
            binder_diagnostics: result.diagnostics,
            caches: ResolverCaches::new(),
        }
    }

    /// Copy this compilation's assembly, and everything it references, into
    /// `target` as metadata. Assemblies already present by name are reused.
    fn import_into(&self, target: &mut SymbolArena) -> Option<AssemblyId> {
        // Ids are assigned in binding order, so references precede their users.
        for symbol in self.arena.assemblies() {
            if target.assembly_by_name(&symbol.name).is_some() {
                continue;
            }
            let decl = export_assembly(&self.arena, symbol.id);
            let references: Vec<AssemblyId> = decl
                .references
                .iter()
                .filter_map(|name| target.assembly_by_name(name))
                .collect();
            import_assembly(target, &decl, &references);
        }
        target.assembly_by_name(self.assembly_name())
    }

    pub fn arena(&self) -> &SymbolArena {
        &self.arena
    }

    pub fn assembly(&self) -> AssemblyId {
        self.assembly
    }

    pub fn assembly_name(&self) -> &str {
        &self.arena.assembly(self.assembly).name
    }

    pub fn options(&self) -> &CompilationOptions {
        &self.options
    }

    /// Source types in declaration order.
    pub fn types(&self) -> &[TypeId] {
        self.arena.types_of_assembly(self.assembly)
    }

    /// Find a type by name as source code of this assembly would see it.
    pub fn lookup_type(&self, name: &str) -> Option<TypeId> {
        self.arena.lookup_type(self.assembly, name)
    }

    pub fn lookup_member(&self, type_name: &str, member_name: &str) -> Option<MemberId> {
        let ty = self.lookup_type(type_name)?;
        self.arena.lookup_member(ty, member_name)
    }

    pub fn resolver(&self) -> ImplementationResolver<'_> {
        self.caches.resolver(&self.arena)
    }

    pub fn find_implementation(&self, ty: TypeId, interface_member: MemberId) -> Option<MemberId> {
        self.resolver().find_implementation(ty, interface_member)
    }

    pub fn find_implementation_with_details(
        &self,
        ty: TypeId,
        interface_member: MemberId,
    ) -> Resolution {
        self.resolver()
            .find_implementation_with_details(ty, interface_member)
    }

    pub fn flattened_interfaces(&self, ty: TypeId) -> Arc<[TypeId]> {
        self.resolver().flattened_interfaces(ty)
    }

    /// Reads, and so freezes, the runtime-support flag of the source assembly.
    pub fn runtime_supports_default_interface_implementation(&self) -> bool {
        self.arena
            .assembly(self.assembly)
            .runtime_supports_default_interface_implementation()
    }

    pub fn binder_diagnostics(&self) -> &[PendingDiagnostic] {
        &self.binder_diagnostics
    }

    /// Binder diagnostics followed by those of the diagnostic pass, in type
    /// declaration order.
    pub fn check(&self, token: &CancellationToken) -> Result<Vec<PendingDiagnostic>, Cancelled> {
        let mut diagnostics = self.binder_diagnostics.clone();
        diagnostics.extend(check_compilation(self, token)?);
        Ok(diagnostics)
    }

    /// Every diagnostic of the compilation, rendered.
    pub fn get_diagnostics(&self) -> Vec<Diagnostic> {
        // A token nobody else holds cannot be cancelled.
        self.check(&CancellationToken::new())
            .unwrap_or_default()
            .iter()
            .map(PendingDiagnostic::render)
            .collect()
    }

    /// Which member implements each interface member, for every source type.
    pub fn implementation_map(&self) -> Vec<ImplementationEntry> {
        implementation_map(self)
    }
}

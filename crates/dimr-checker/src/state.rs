//! Diagnostic pass state.
//!
//! Every source type is checked by its own `CheckerState`, so types can be
//! checked in parallel: the states only share the read-only arena and the
//! resolver's concurrent caches. Per-type results are concatenated in
//! declaration order, which keeps the output independent of scheduling.
//!
//! The checks themselves live in sibling modules:
//! - `state_implementations`: unimplemented interface members, rejected
//!   candidates, return-type mismatches, runtime support at use sites
//! - `state_declarations`: explicit implementations of foreign interfaces,
//!   default bodies under an unsupporting runtime, member hiding

use dimr_binder::{AssemblyId, MemberId, SymbolArena, TypeId};
use dimr_common::{DiagnosticArg, PendingDiagnostic, SourceSpan};
use dimr_solver::ImplementationResolver;
use rayon::prelude::*;
use tracing::{debug, info_span, trace};

use crate::cancellation::{CancellationToken, Cancelled};
use crate::compilation::Compilation;

pub struct CheckerState<'a> {
    pub(crate) arena: &'a SymbolArena,
    pub(crate) resolver: ImplementationResolver<'a>,
    /// The assembly being compiled.
    pub(crate) assembly: AssemblyId,
    pub(crate) diagnostics: Vec<PendingDiagnostic>,
}

impl<'a> CheckerState<'a> {
    pub fn new(compilation: &'a Compilation) -> Self {
        Self {
            arena: compilation.arena(),
            resolver: compilation.resolver(),
            assembly: compilation.assembly(),
            diagnostics: Vec::new(),
        }
    }

    /// Run every check that applies to `ty`.
    pub fn check_type(&mut self, ty: TypeId) {
        let symbol = self.arena.type_symbol(ty);
        trace!(type_name = %symbol.name, kind = symbol.kind.keyword(), "checking type");
        if symbol.is_interface() {
            self.check_default_bodies(ty);
            return;
        }
        self.check_explicit_implementations(ty);
        self.check_interface_implementations(ty);
        self.check_member_hiding(ty);
    }

    pub fn take_diagnostics(self) -> Vec<PendingDiagnostic> {
        self.diagnostics
    }

    pub(crate) fn report(&mut self, code: u32, span: &SourceSpan, args: Vec<DiagnosticArg>) {
        self.diagnostics
            .push(PendingDiagnostic::new(code, span.clone(), args));
    }

    pub(crate) fn type_arg(&self, ty: TypeId) -> DiagnosticArg {
        DiagnosticArg::Type(self.arena.type_display(ty).into())
    }

    pub(crate) fn member_arg(&self, member: MemberId) -> DiagnosticArg {
        DiagnosticArg::Member(self.arena.member_display(member).into())
    }

    /// Whether code compiled into the source assembly may rely on
    /// interface default bodies. Freezes the flag.
    pub(crate) fn runtime_supported(&self) -> bool {
        self.arena
            .assembly(self.assembly)
            .runtime_supports_default_interface_implementation()
    }
}

/// Run the diagnostic pass over every source type of `compilation`.
pub fn check_compilation(
    compilation: &Compilation,
    token: &CancellationToken,
) -> Result<Vec<PendingDiagnostic>, Cancelled> {
    let types = compilation.types();
    let _span = info_span!(
        "check_types",
        assembly = %compilation.assembly_name(),
        types = types.len()
    )
    .entered();

    let per_type: Vec<Vec<PendingDiagnostic>> = types
        .par_iter()
        .map(|&ty| {
            token.check()?;
            let mut state = CheckerState::new(compilation);
            state.check_type(ty);
            Ok(state.take_diagnostics())
        })
        .collect::<Result<_, Cancelled>>()?;

    let diagnostics: Vec<PendingDiagnostic> = per_type.into_iter().flatten().collect();
    debug!(
        assembly = %compilation.assembly_name(),
        diagnostics = diagnostics.len(),
        "diagnostic pass finished"
    );
    Ok(diagnostics)
}

//! Binds every assembly of a manifest and reports on one of them.

use anyhow::{Context, Result, bail};
use dimr_checker::{Compilation, ImplementationEntry};
use dimr_common::{Diagnostic, DiagnosticCategory};
use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, info_span};

use crate::args::CliArgs;
use crate::manifest::Manifest;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub assembly: String,
    pub diagnostics: Vec<Diagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implementations: Option<Vec<ImplementationEntry>>,
}

impl Report {
    pub fn error_count(&self) -> usize {
        self.count(DiagnosticCategory::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(DiagnosticCategory::Warning)
    }

    fn count(&self, category: DiagnosticCategory) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.category == category)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}

/// Bind the assemblies of `manifest` in order, each against the ones it
/// references.
pub fn compile_all(manifest: &Manifest) -> Result<Vec<Compilation>> {
    let mut compilations: Vec<Compilation> = Vec::with_capacity(manifest.assemblies.len());
    let mut by_name: FxHashMap<&str, usize> = FxHashMap::default();

    for assembly in &manifest.assemblies {
        let name = assembly.decl.name.as_str();
        let references = assembly
            .decl
            .references
            .iter()
            .map(|reference| {
                by_name
                    .get(reference.as_str())
                    .map(|&index| &compilations[index])
                    .with_context(|| format!("assembly '{name}' references unknown '{reference}'"))
            })
            .collect::<Result<Vec<&Compilation>>>()?;

        let compilation = Compilation::new(&assembly.decl, &references, assembly.options());
        by_name.insert(name, compilations.len());
        compilations.push(compilation);
    }
    Ok(compilations)
}

/// Run the diagnostic pass (and optionally the implementation map) for the
/// requested assembly.
pub fn report(
    compilations: &[Compilation],
    assembly: Option<&str>,
    implementations: bool,
) -> Result<Report> {
    let compilation = match assembly {
        Some(name) => match compilations.iter().find(|c| c.assembly_name() == name) {
            Some(found) => found,
            None => bail!("assembly '{name}' is not in the manifest"),
        },
        None => match compilations.last() {
            Some(last) => last,
            None => bail!("manifest lists no assemblies"),
        },
    };

    let _span = info_span!("report", assembly = %compilation.assembly_name()).entered();
    let diagnostics = compilation.get_diagnostics();
    let implementations = implementations.then(|| compilation.implementation_map());
    debug!(
        diagnostics = diagnostics.len(),
        implementations = implementations.as_ref().map_or(0, Vec::len),
        "report ready"
    );

    Ok(Report {
        assembly: compilation.assembly_name().to_string(),
        diagnostics,
        implementations,
    })
}

pub fn run(args: &CliArgs) -> Result<Report> {
    let manifest = Manifest::load(&args.manifest)?;
    let compilations = compile_all(&manifest)?;
    report(&compilations, args.assembly.as_deref(), args.implementations)
}

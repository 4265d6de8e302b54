//! Base types, interface lists and inheritance cycles.

use dimr_common::{DiagnosticArg, SourceSpan};
use dimr_common::diagnostics::diagnostic_codes;
use dimr_common::limits::MAX_INHERITANCE_DEPTH;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::declarations::TypeDecl;
use crate::symbols::{TypeId, TypeKind};

use super::state::BinderState;

impl BinderState<'_> {
    pub(crate) fn resolve_heritage(&mut self, decls: &[TypeDecl], types: &[TypeId]) {
        for (decl, &ty) in decls.iter().zip(types) {
            let span = self.arena.type_symbol(ty).interface_list_span.clone();
            let mut base_type = None;
            let mut interfaces: Vec<TypeId> = Vec::with_capacity(decl.interfaces.len() + 1);

            if let Some(name) = &decl.base
                && let Some(target) = self.resolve_type_name(name, &span)
            {
                let target_kind = self.arena.type_symbol(target).kind;
                match (decl.kind, target_kind) {
                    (_, TypeKind::Interface) => interfaces.push(target),
                    (TypeKind::Class, TypeKind::Class) => {
                        if self.arena.type_symbol(target).is_sealed() {
                            self.report_sealed_base(ty, target, &span);
                        }
                        base_type = Some(target);
                    }
                    (TypeKind::Class, TypeKind::Struct) => {
                        self.report_sealed_base(ty, target, &span);
                    }
                    (TypeKind::Struct | TypeKind::Interface, _) => {
                        self.report(
                            diagnostic_codes::TYPE_IN_INTERFACE_LIST_IS_NOT_AN_INTERFACE,
                            &span,
                            vec![DiagnosticArg::Type(name.as_str().into())],
                        );
                    }
                }
            }

            for name in &decl.interfaces {
                let Some(target) = self.resolve_type_name(name, &span) else {
                    continue;
                };
                if !self.arena.type_symbol(target).is_interface() {
                    self.report(
                        diagnostic_codes::TYPE_IN_INTERFACE_LIST_IS_NOT_AN_INTERFACE,
                        &span,
                        vec![DiagnosticArg::Type(name.as_str().into())],
                    );
                    continue;
                }
                if !interfaces.contains(&target) {
                    interfaces.push(target);
                }
            }

            let symbol = self.arena.type_mut(ty);
            symbol.base_type = base_type;
            symbol.declared_interfaces = interfaces;
        }
    }

    fn report_sealed_base(&mut self, ty: TypeId, base: TypeId, span: &SourceSpan) {
        let args = vec![
            DiagnosticArg::Type(self.arena.type_symbol(ty).name.clone()),
            DiagnosticArg::Type(self.arena.type_symbol(base).name.clone()),
        ];
        self.report(diagnostic_codes::CANNOT_DERIVE_FROM_SEALED_TYPE, span, args);
    }

    /// Drop the edge that closes each base-class or interface cycle.
    ///
    /// Only types of the assembly being bound can take part in a cycle:
    /// referenced assemblies were bound earlier and cannot point back.
    pub(crate) fn break_inheritance_cycles(&mut self, types: &[TypeId]) {
        for &ty in types {
            if let Some(base) = self.arena.type_symbol(ty).base_type
                && self.base_chain_reaches(base, ty)
            {
                debug!(type_id = ty.0, base = base.0, "breaking circular base type");
                let args = vec![
                    DiagnosticArg::Type(self.arena.type_symbol(ty).name.clone()),
                    DiagnosticArg::Type(self.arena.type_symbol(base).name.clone()),
                ];
                let span = self.arena.type_symbol(ty).interface_list_span.clone();
                self.report(diagnostic_codes::CIRCULAR_BASE_TYPE_DEPENDENCY, &span, args);
                self.arena.type_mut(ty).base_type = None;
            }
        }

        for &ty in types {
            if !self.arena.type_symbol(ty).is_interface() {
                continue;
            }
            let declared = self.arena.type_symbol(ty).declared_interfaces.clone();
            for inherited in declared {
                if !self.interface_reaches(inherited, ty) {
                    continue;
                }
                debug!(type_id = ty.0, inherited = inherited.0, "breaking interface cycle");
                let args = vec![
                    DiagnosticArg::Type(self.arena.type_symbol(ty).name.clone()),
                    DiagnosticArg::Type(self.arena.type_symbol(inherited).name.clone()),
                ];
                let span = self.arena.type_symbol(ty).interface_list_span.clone();
                self.report(diagnostic_codes::INHERITED_INTERFACE_CAUSES_A_CYCLE, &span, args);
                self.arena
                    .type_mut(ty)
                    .declared_interfaces
                    .retain(|&i| i != inherited);
            }
        }
    }

    fn base_chain_reaches(&self, start: TypeId, target: TypeId) -> bool {
        let mut current = Some(start);
        let mut steps = 0;
        while let Some(ty) = current {
            if ty == target {
                return true;
            }
            steps += 1;
            if steps > MAX_INHERITANCE_DEPTH {
                return false;
            }
            current = self.arena.type_symbol(ty).base_type;
        }
        false
    }

    fn interface_reaches(&self, start: TypeId, target: TypeId) -> bool {
        let mut visited = FxHashSet::default();
        let mut stack = vec![start];
        while let Some(ty) = stack.pop() {
            if ty == target {
                return true;
            }
            if !visited.insert(ty) {
                continue;
            }
            stack.extend(self.arena.type_symbol(ty).declared_interfaces.iter().copied());
        }
        false
    }
}

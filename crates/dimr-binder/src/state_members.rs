//! Member binding: accessor synthesis, modifier validation and normalization.
//!
//! Every rule that rejects a declaration also repairs it, so the symbol that
//! lands in the arena always has a consistent modifier set: interface
//! members end up either `abstract` (no implementation) or carrying an
//! implementation that is `virtual` unless `sealed`, `private` or `static`.

use dimr_common::diagnostics::diagnostic_codes;
use dimr_common::{DiagnosticArg, Feature, SourceSpan};
use smallvec::{SmallVec, smallvec};
use std::sync::Arc;
use tracing::trace;

use crate::declarations::{
    AccessorDecl, EventDecl, MemberDecl, MethodDecl, ParameterDecl, PropertyDecl, TypeDecl,
};
use crate::modifiers::{Accessibility, Modifiers};
use crate::symbols::{
    AccessorKind, MemberId, MemberKind, MemberSymbol, Parameter, RefKind, Signature, TypeId,
    TypeRef,
};

use super::state::BinderState;

/// Which rule set a member declaration is checked against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Container {
    Interface,
    Class,
    /// `void I1.M()`, in any kind of type.
    Explicit,
}

/// How the accessors of a class property or event get their bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AccessorBodies {
    /// Omitted bodies are generated (auto-properties, field-like events).
    Automatic,
    /// Each accessor must declare a body (events with accessor lists).
    Required,
}

fn member_arg(display: &str) -> Vec<DiagnosticArg> {
    vec![DiagnosticArg::Member(display.into())]
}

fn lower_parameters(parameters: &[ParameterDecl]) -> SmallVec<[Parameter; 4]> {
    parameters
        .iter()
        .map(|p| Parameter {
            ty: TypeRef::new(p.ty.as_str()),
            ref_kind: p.ref_kind,
        })
        .collect()
}

impl BinderState<'_> {
    pub(crate) fn bind_members(&mut self, ty: TypeId, decl: &TypeDecl) {
        for member in &decl.members {
            let id = match member {
                MemberDecl::Method(method) => self.bind_method(ty, method),
                MemberDecl::Property(property) => self.bind_property(ty, property, false),
                MemberDecl::Indexer(indexer) => self.bind_property(ty, indexer, true),
                MemberDecl::Event(event) => self.bind_event(ty, event),
            };
            self.arena.type_mut(ty).members.push(id);
        }
        trace!(
            type_name = %decl.name,
            members = decl.members.len(),
            "bound members"
        );
    }

    fn container(&self, owner: TypeId, is_explicit: bool) -> Container {
        if is_explicit {
            Container::Explicit
        } else if self.arena.type_symbol(owner).is_interface() {
            Container::Interface
        } else {
            Container::Class
        }
    }

    fn add_member(
        &mut self,
        owner: TypeId,
        name: Arc<str>,
        kind: MemberKind,
        signature: Signature,
        declared: Modifiers,
        explicit: Option<&str>,
        has_body: bool,
        span: &SourceSpan,
    ) -> MemberId {
        self.arena.add_member(MemberSymbol {
            id: MemberId(0),
            name,
            kind,
            owner,
            signature,
            declared_modifiers: declared,
            modifiers: declared,
            explicit_interface_target: None,
            explicit_interface_name: explicit.map(Arc::from),
            has_body,
            span: span.clone(),
        })
    }

    fn add_accessor(
        &mut self,
        parent: MemberId,
        owner: TypeId,
        kind: AccessorKind,
        parent_name: &str,
        signature: Signature,
        explicit: Option<&str>,
        decl: &AccessorDecl,
        parent_span: &SourceSpan,
    ) -> MemberId {
        let span = if decl.span.is_none() {
            parent_span
        } else {
            &decl.span
        };
        self.add_member(
            owner,
            kind.accessor_name(parent_name),
            MemberKind::Accessor { kind, parent },
            signature,
            decl.modifiers,
            explicit,
            decl.has_body,
            span,
        )
    }

    // =========================================================================
    // Methods
    // =========================================================================

    fn bind_method(&mut self, owner: TypeId, decl: &MethodDecl) -> MemberId {
        let signature = Signature {
            parameters: lower_parameters(&decl.parameters),
            return_type: TypeRef::new(decl.return_type.as_str()),
            returns_by_ref: decl.returns_by_ref,
        };
        let explicit = decl.explicit_interface.as_deref();
        let id = self.add_member(
            owner,
            decl.name.as_str().into(),
            MemberKind::Method,
            signature,
            decl.modifiers,
            explicit,
            decl.has_body,
            &decl.span,
        );

        let display = self.arena.member_display(id);
        let (modifiers, has_body) = match self.container(owner, explicit.is_some()) {
            Container::Explicit => self.normalize_explicit_implementation(
                &display,
                &decl.span,
                decl.modifiers,
                decl.has_body,
                true,
            ),
            Container::Interface => {
                self.normalize_interface_member(&display, &decl.span, decl.modifiers, decl.has_body)
            }
            Container::Class => self.normalize_class_member(
                owner,
                &display,
                &decl.span,
                decl.modifiers,
                decl.has_body,
                true,
            ),
        };

        let member = self.arena.member_mut(id);
        member.modifiers = modifiers;
        member.has_body = has_body;
        id
    }

    // =========================================================================
    // Properties, indexers and events
    // =========================================================================

    fn bind_property(&mut self, owner: TypeId, decl: &PropertyDecl, is_indexer: bool) -> MemberId {
        let name: Arc<str> = if is_indexer {
            "this".into()
        } else {
            decl.name.as_str().into()
        };
        let parameters = lower_parameters(&decl.parameters);
        let value_type = TypeRef::new(decl.ty.as_str());
        let explicit = decl.explicit_interface.as_deref();

        let id = self.add_member(
            owner,
            Arc::clone(&name),
            MemberKind::Property {
                is_indexer,
                getter: None,
                setter: None,
            },
            Signature {
                parameters: parameters.clone(),
                return_type: value_type.clone(),
                returns_by_ref: decl.returns_by_ref,
            },
            decl.modifiers,
            explicit,
            false,
            &decl.span,
        );

        let getter = decl.getter.as_ref().map(|accessor| {
            let signature = Signature {
                parameters: parameters.clone(),
                return_type: value_type.clone(),
                returns_by_ref: decl.returns_by_ref,
            };
            let getter = self.add_accessor(
                id,
                owner,
                AccessorKind::Get,
                &name,
                signature,
                explicit,
                accessor,
                &decl.span,
            );
            (getter, accessor)
        });
        let setter = decl.setter.as_ref().map(|accessor| {
            let mut setter_parameters = parameters.clone();
            setter_parameters.push(Parameter {
                ty: value_type.clone(),
                ref_kind: RefKind::None,
            });
            let signature = Signature {
                parameters: setter_parameters,
                return_type: TypeRef::void(),
                returns_by_ref: false,
            };
            let setter = self.add_accessor(
                id,
                owner,
                AccessorKind::Set,
                &name,
                signature,
                explicit,
                accessor,
                &decl.span,
            );
            (setter, accessor)
        });

        if let MemberKind::Property {
            getter: getter_slot,
            setter: setter_slot,
            ..
        } = &mut self.arena.member_mut(id).kind
        {
            *getter_slot = getter.map(|(g, _)| g);
            *setter_slot = setter.map(|(s, _)| s);
        }

        let accessors: SmallVec<[(MemberId, &AccessorDecl); 2]> =
            getter.into_iter().chain(setter).collect();
        self.finish_accessor_group(
            owner,
            id,
            decl.modifiers,
            explicit.is_some(),
            &decl.span,
            &accessors,
            AccessorBodies::Automatic,
            true,
        );
        id
    }

    fn bind_event(&mut self, owner: TypeId, decl: &EventDecl) -> MemberId {
        let name: Arc<str> = decl.name.as_str().into();
        let handler_type = TypeRef::new(decl.ty.as_str());
        let explicit = decl.explicit_interface.as_deref();
        let field_like = decl.adder.is_none() && decl.remover.is_none();

        let id = self.add_member(
            owner,
            Arc::clone(&name),
            MemberKind::Event {
                adder: None,
                remover: None,
            },
            Signature {
                parameters: SmallVec::new(),
                return_type: handler_type.clone(),
                returns_by_ref: false,
            },
            decl.modifiers,
            explicit,
            false,
            &decl.span,
        );

        let accessor_signature = Signature {
            parameters: smallvec![Parameter {
                ty: handler_type,
                ref_kind: RefKind::None,
            }],
            return_type: TypeRef::void(),
            returns_by_ref: false,
        };
        let adder_decl = decl.adder.clone().unwrap_or_default();
        let remover_decl = decl.remover.clone().unwrap_or_default();
        let adder = self.add_accessor(
            id,
            owner,
            AccessorKind::Add,
            &name,
            accessor_signature.clone(),
            explicit,
            &adder_decl,
            &decl.span,
        );
        let remover = self.add_accessor(
            id,
            owner,
            AccessorKind::Remove,
            &name,
            accessor_signature,
            explicit,
            &remover_decl,
            &decl.span,
        );
        self.arena.member_mut(id).kind = MemberKind::Event {
            adder: Some(adder),
            remover: Some(remover),
        };

        let accessors: SmallVec<[(MemberId, &AccessorDecl); 2]> =
            smallvec![(adder, &adder_decl), (remover, &remover_decl)];
        let bodies = if field_like {
            AccessorBodies::Automatic
        } else {
            AccessorBodies::Required
        };
        self.finish_accessor_group(
            owner,
            id,
            decl.modifiers,
            explicit.is_some(),
            &decl.span,
            &accessors,
            bodies,
            false,
        );
        id
    }

    /// Normalize a property or event and give each accessor its modifiers
    /// and body.
    fn finish_accessor_group(
        &mut self,
        owner: TypeId,
        id: MemberId,
        declared: Modifiers,
        is_explicit: bool,
        span: &SourceSpan,
        accessors: &[(MemberId, &AccessorDecl)],
        bodies: AccessorBodies,
        is_property: bool,
    ) {
        let display = self.arena.member_display(id);
        let any_body = accessors.iter().any(|(_, a)| a.has_body);
        let container = self.container(owner, is_explicit);

        let (modifiers, _) = match container {
            Container::Explicit => {
                self.normalize_explicit_implementation(&display, span, declared, any_body, false)
            }
            Container::Interface => {
                self.normalize_interface_member(&display, span, declared, any_body)
            }
            Container::Class => {
                self.normalize_class_member(owner, &display, span, declared, any_body, false)
            }
        };

        if is_property && container != Container::Explicit {
            self.check_accessor_accessibility(id, &display, modifiers, accessors);
        } else {
            self.reject_accessor_modifiers(accessors);
        }

        let implemented = !modifiers.intersects(Modifiers::ABSTRACT | Modifiers::EXTERN);
        let mut all_bodies = !accessors.is_empty();
        for &(accessor, decl) in accessors {
            let has_body = implemented && {
                let missing = !decl.has_body
                    && match container {
                        // A bodiless accessor next to a bodied one is rejected
                        // rather than read as a partially abstract property.
                        Container::Interface => any_body,
                        Container::Class | Container::Explicit => {
                            bodies == AccessorBodies::Required
                        }
                    };
                if missing {
                    let accessor_display = self.arena.member_display(accessor);
                    let accessor_span = self.arena.member(accessor).span.clone();
                    self.report(
                        diagnostic_codes::MUST_DECLARE_A_BODY_BECAUSE_IT_IS_NOT_MARKED_ABSTRACT_OR_EXTERN,
                        &accessor_span,
                        member_arg(&accessor_display),
                    );
                }
                true
            };

            let access = if container == Container::Explicit {
                None
            } else {
                decl.modifiers.accessibility()
            };
            let mut accessor_modifiers = match access {
                Some(access) => modifiers.with_accessibility(access),
                None => modifiers,
            };
            if access == Some(Accessibility::Private) {
                accessor_modifiers -= Modifiers::VIRTUAL | Modifiers::ABSTRACT;
            }

            all_bodies &= has_body;
            let symbol = self.arena.member_mut(accessor);
            symbol.modifiers = accessor_modifiers;
            symbol.has_body = has_body;
        }

        let symbol = self.arena.member_mut(id);
        symbol.modifiers = modifiers;
        symbol.has_body = all_bodies;
    }

    fn check_accessor_accessibility(
        &mut self,
        id: MemberId,
        display: &str,
        modifiers: Modifiers,
        accessors: &[(MemberId, &AccessorDecl)],
    ) {
        let property_access = modifiers.accessibility().unwrap_or(Accessibility::Public);
        let property_span = self.arena.member(id).span.clone();

        let mut restricted: SmallVec<[(MemberId, Accessibility); 2]> = SmallVec::new();
        for &(accessor, decl) in accessors {
            let span = self.arena.member(accessor).span.clone();
            for keyword in (decl.modifiers - Modifiers::ACCESSIBILITY).keywords() {
                self.report(
                    diagnostic_codes::THE_MODIFIER_IS_NOT_VALID_FOR_THIS_ITEM,
                    &span,
                    vec![DiagnosticArg::Text(keyword.keyword().into())],
                );
            }
            if let Some(access) = decl.modifiers.accessibility() {
                restricted.push((accessor, access));
            }
        }
        if restricted.is_empty() {
            return;
        }

        if restricted.len() > 1 {
            self.report(
                diagnostic_codes::CANNOT_SPECIFY_ACCESSIBILITY_FOR_BOTH_ACCESSORS,
                &property_span,
                member_arg(display),
            );
        } else if accessors.len() < 2 {
            self.report(
                diagnostic_codes::ACCESSOR_MODIFIERS_REQUIRE_BOTH_ACCESSORS,
                &property_span,
                member_arg(display),
            );
        }

        for (accessor, access) in restricted {
            let accessor_display = self.arena.member_display(accessor);
            let span = self.arena.member(accessor).span.clone();
            if !access.is_more_restrictive_than(property_access) {
                self.report(
                    diagnostic_codes::ACCESSOR_ACCESSIBILITY_MUST_BE_MORE_RESTRICTIVE,
                    &span,
                    vec![
                        DiagnosticArg::Member(accessor_display.into()),
                        DiagnosticArg::Member(display.into()),
                    ],
                );
            } else if access == Accessibility::Private && modifiers.contains(Modifiers::ABSTRACT) {
                self.report(
                    diagnostic_codes::ABSTRACT_PROPERTIES_CANNOT_HAVE_PRIVATE_ACCESSORS,
                    &span,
                    member_arg(&accessor_display),
                );
            }
        }
    }

    fn reject_accessor_modifiers(&mut self, accessors: &[(MemberId, &AccessorDecl)]) {
        for &(accessor, decl) in accessors {
            if decl.modifiers.is_empty() {
                continue;
            }
            let span = self.arena.member(accessor).span.clone();
            for keyword in decl.modifiers.keywords() {
                self.report(
                    diagnostic_codes::THE_MODIFIER_IS_NOT_VALID_FOR_THIS_ITEM,
                    &span,
                    vec![DiagnosticArg::Text(keyword.keyword().into())],
                );
            }
        }
    }

    // =========================================================================
    // Modifier normalization
    // =========================================================================

    /// Validate an interface member declaration and compute its effective
    /// modifiers and body.
    fn normalize_interface_member(
        &mut self,
        display: &str,
        span: &SourceSpan,
        declared: Modifiers,
        has_body: bool,
    ) -> (Modifiers, bool) {
        let feature = Feature::DefaultInterfaceImplementation;
        let version = self.options.language_version;
        if !self.is_metadata() && !version.supports(feature) {
            let gated = declared - Modifiers::NEW;
            if has_body || !gated.is_empty() {
                self.report(
                    diagnostic_codes::FEATURE_NOT_AVAILABLE_IN_LANGUAGE_VERSION,
                    span,
                    vec![
                        DiagnosticArg::Text(feature.display_name().into()),
                        DiagnosticArg::Text(version.display_name().into()),
                        DiagnosticArg::Text(feature.required_version().display_name().into()),
                    ],
                );
                let demoted = (declared & Modifiers::NEW) | Modifiers::PUBLIC | Modifiers::ABSTRACT;
                return (demoted, false);
            }
        }

        let mut m = declared;
        let mut body = has_body;
        let mut body_synthesized = false;

        if m.contains(Modifiers::OVERRIDE) {
            self.report(
                diagnostic_codes::THE_MODIFIER_IS_NOT_VALID_FOR_THIS_ITEM,
                span,
                vec![DiagnosticArg::Text("override".into())],
            );
            m.remove(Modifiers::OVERRIDE);
        }
        if m.contains(Modifiers::ABSTRACT) && body {
            self.report(
                diagnostic_codes::CANNOT_DECLARE_A_BODY_BECAUSE_IT_IS_MARKED_ABSTRACT,
                span,
                member_arg(display),
            );
            body = false;
        }
        if m.contains(Modifiers::EXTERN) && body {
            self.report(
                diagnostic_codes::CANNOT_BE_EXTERN_AND_DECLARE_A_BODY,
                span,
                member_arg(display),
            );
            body = false;
        }
        if m.contains(Modifiers::ABSTRACT | Modifiers::EXTERN) {
            self.report(
                diagnostic_codes::CANNOT_BE_BOTH_EXTERN_AND_ABSTRACT,
                span,
                member_arg(display),
            );
            m.remove(Modifiers::EXTERN);
        }
        if m.contains(Modifiers::ABSTRACT | Modifiers::SEALED) {
            self.report(
                diagnostic_codes::CANNOT_BE_BOTH_ABSTRACT_AND_SEALED,
                span,
                member_arg(display),
            );
            m.remove(Modifiers::SEALED);
        }
        if m.contains(Modifiers::ABSTRACT | Modifiers::VIRTUAL) {
            self.report(
                diagnostic_codes::ABSTRACT_MEMBER_CANNOT_BE_MARKED_VIRTUAL,
                span,
                member_arg(display),
            );
            m.remove(Modifiers::VIRTUAL);
        }
        if m.contains(Modifiers::SEALED) && !body && !m.contains(Modifiers::EXTERN) {
            self.report(
                diagnostic_codes::CANNOT_BE_SEALED_BECAUSE_IT_IS_NOT_AN_OVERRIDE,
                span,
                member_arg(display),
            );
            m.remove(Modifiers::SEALED);
        }
        if m.contains(Modifiers::SEALED | Modifiers::VIRTUAL) {
            self.report(
                diagnostic_codes::THE_MODIFIER_IS_NOT_VALID_FOR_THIS_ITEM,
                span,
                vec![DiagnosticArg::Text("sealed".into())],
            );
            m.remove(Modifiers::SEALED);
        }
        if m.contains(Modifiers::PRIVATE) && m.intersects(Modifiers::VIRTUAL | Modifiers::ABSTRACT) {
            self.report(
                diagnostic_codes::VIRTUAL_OR_ABSTRACT_MEMBERS_CANNOT_BE_PRIVATE,
                span,
                member_arg(display),
            );
            m.remove(Modifiers::VIRTUAL | Modifiers::ABSTRACT);
            body_synthesized = true;
        }
        if m.contains(Modifiers::STATIC) && m.intersects(Modifiers::VIRTUAL | Modifiers::ABSTRACT) {
            self.report(
                diagnostic_codes::STATIC_MEMBER_CANNOT_BE_MARKED_OVERRIDE_VIRTUAL_OR_ABSTRACT,
                span,
                member_arg(display),
            );
            m.remove(Modifiers::VIRTUAL | Modifiers::ABSTRACT);
            body_synthesized = true;
        }
        if !body
            && !m.intersects(Modifiers::EXTERN | Modifiers::ABSTRACT)
            && m.intersects(Modifiers::VIRTUAL | Modifiers::PRIVATE | Modifiers::STATIC)
        {
            if !body_synthesized {
                self.report(
                    diagnostic_codes::MUST_DECLARE_A_BODY_BECAUSE_IT_IS_NOT_MARKED_ABSTRACT_OR_EXTERN,
                    span,
                    member_arg(display),
                );
            }
            body = true;
        }

        let implemented = body || m.contains(Modifiers::EXTERN);
        if !implemented {
            m.insert(Modifiers::ABSTRACT);
        } else if !m.intersects(Modifiers::SEALED | Modifiers::PRIVATE | Modifiers::STATIC) {
            m.insert(Modifiers::VIRTUAL);
        }
        if m.accessibility().is_none() {
            m.insert(Modifiers::PUBLIC);
        }
        (m, body)
    }

    fn normalize_class_member(
        &mut self,
        owner: TypeId,
        display: &str,
        span: &SourceSpan,
        declared: Modifiers,
        has_body: bool,
        requires_body: bool,
    ) -> (Modifiers, bool) {
        let mut m = declared;
        let mut body = has_body;

        if m.contains(Modifiers::ABSTRACT) && body {
            self.report(
                diagnostic_codes::CANNOT_DECLARE_A_BODY_BECAUSE_IT_IS_MARKED_ABSTRACT,
                span,
                member_arg(display),
            );
            body = false;
        }
        if m.contains(Modifiers::EXTERN) && body {
            self.report(
                diagnostic_codes::CANNOT_BE_EXTERN_AND_DECLARE_A_BODY,
                span,
                member_arg(display),
            );
            body = false;
        }
        if m.contains(Modifiers::ABSTRACT | Modifiers::EXTERN) {
            self.report(
                diagnostic_codes::CANNOT_BE_BOTH_EXTERN_AND_ABSTRACT,
                span,
                member_arg(display),
            );
            m.remove(Modifiers::EXTERN);
        }
        if m.contains(Modifiers::ABSTRACT | Modifiers::VIRTUAL) {
            self.report(
                diagnostic_codes::ABSTRACT_MEMBER_CANNOT_BE_MARKED_VIRTUAL,
                span,
                member_arg(display),
            );
            m.remove(Modifiers::VIRTUAL);
        }
        if m.contains(Modifiers::STATIC) && m.intersects(Modifiers::DISPATCH) {
            self.report(
                diagnostic_codes::STATIC_MEMBER_CANNOT_BE_MARKED_OVERRIDE_VIRTUAL_OR_ABSTRACT,
                span,
                member_arg(display),
            );
            m.remove(Modifiers::DISPATCH);
        }
        if m.contains(Modifiers::PRIVATE) && m.intersects(Modifiers::VIRTUAL | Modifiers::ABSTRACT) {
            self.report(
                diagnostic_codes::VIRTUAL_OR_ABSTRACT_MEMBERS_CANNOT_BE_PRIVATE,
                span,
                member_arg(display),
            );
            m.remove(Modifiers::VIRTUAL | Modifiers::ABSTRACT);
        }
        if m.contains(Modifiers::SEALED) && !m.contains(Modifiers::OVERRIDE) {
            self.report(
                diagnostic_codes::CANNOT_BE_SEALED_BECAUSE_IT_IS_NOT_AN_OVERRIDE,
                span,
                member_arg(display),
            );
            m.remove(Modifiers::SEALED);
        }
        if m.contains(Modifiers::ABSTRACT | Modifiers::SEALED) {
            self.report(
                diagnostic_codes::CANNOT_BE_BOTH_ABSTRACT_AND_SEALED,
                span,
                member_arg(display),
            );
            m.remove(Modifiers::SEALED);
        }
        if m.contains(Modifiers::ABSTRACT) && !self.arena.type_symbol(owner).is_abstract() {
            let type_name = self.arena.type_symbol(owner).name.clone();
            self.report(
                diagnostic_codes::ABSTRACT_MEMBER_IN_NON_ABSTRACT_TYPE,
                span,
                vec![
                    DiagnosticArg::Member(display.into()),
                    DiagnosticArg::Type(type_name),
                ],
            );
        }
        if requires_body && !body && !m.intersects(Modifiers::ABSTRACT | Modifiers::EXTERN) {
            self.report(
                diagnostic_codes::MUST_DECLARE_A_BODY_BECAUSE_IT_IS_NOT_MARKED_ABSTRACT_OR_EXTERN,
                span,
                member_arg(display),
            );
            body = true;
        }
        if m.accessibility().is_none() {
            m.insert(Modifiers::PRIVATE);
        }
        (m, body)
    }

    /// Explicit implementations take no accessibility or dispatch modifiers.
    fn normalize_explicit_implementation(
        &mut self,
        display: &str,
        span: &SourceSpan,
        declared: Modifiers,
        has_body: bool,
        requires_body: bool,
    ) -> (Modifiers, bool) {
        let invalid = declared
            & (Modifiers::ACCESSIBILITY
                | Modifiers::STATIC
                | Modifiers::VIRTUAL
                | Modifiers::ABSTRACT
                | Modifiers::SEALED
                | Modifiers::OVERRIDE
                | Modifiers::NEW);
        for keyword in invalid.keywords() {
            self.report(
                diagnostic_codes::THE_MODIFIER_IS_NOT_VALID_FOR_THIS_ITEM,
                span,
                vec![DiagnosticArg::Text(keyword.keyword().into())],
            );
        }

        let m = declared - invalid;
        let mut body = has_body;
        if m.contains(Modifiers::EXTERN) && body {
            self.report(
                diagnostic_codes::CANNOT_BE_EXTERN_AND_DECLARE_A_BODY,
                span,
                member_arg(display),
            );
            body = false;
        }
        if requires_body && !body && !m.contains(Modifiers::EXTERN) {
            self.report(
                diagnostic_codes::MUST_DECLARE_A_BODY_BECAUSE_IT_IS_NOT_MARKED_ABSTRACT_OR_EXTERN,
                span,
                member_arg(display),
            );
            body = true;
        }
        (m, body)
    }
}

use super::*;
use crate::modifiers::Modifiers;
use crate::symbols::{ExplicitTarget, Parameter, Signature, TypeRef};
use dimr_common::SourceSpan;
use smallvec::smallvec;

fn method(name: &str, params: &[(&str, RefKind)], ret: &str) -> MemberSymbol {
    MemberSymbol {
        id: MemberId(0),
        name: name.into(),
        kind: MemberKind::Method,
        owner: TypeId(0),
        signature: Signature {
            parameters: params
                .iter()
                .map(|(ty, ref_kind)| Parameter {
                    ty: TypeRef::new(*ty),
                    ref_kind: *ref_kind,
                })
                .collect(),
            return_type: TypeRef::new(ret),
            returns_by_ref: false,
        },
        declared_modifiers: Modifiers::PUBLIC,
        modifiers: Modifiers::PUBLIC,
        explicit_interface_target: None,
        explicit_interface_name: None,
        has_body: true,
        span: SourceSpan::none(),
    }
}

#[test]
fn test_matching_ignores_return_type() {
    let target = method("M", &[("int", RefKind::None)], "void");
    let candidate = method("M", &[("int", RefKind::None)], "int");
    assert!(matches_for_implementation(&candidate, &target));
    assert!(!return_types_match(&candidate, &target));
}

#[test]
fn test_matching_is_case_sensitive_and_checks_ref_kind() {
    let target = method("M", &[("int", RefKind::Ref)], "void");
    assert!(!matches_for_implementation(
        &method("m", &[("int", RefKind::Ref)], "void"),
        &target
    ));
    assert!(!matches_for_implementation(
        &method("M", &[("int", RefKind::Out)], "void"),
        &target
    ));
    assert!(!matches_for_implementation(
        &method("M", &[("int", RefKind::Ref), ("int", RefKind::None)], "void"),
        &target
    ));
    assert!(matches_for_implementation(
        &method("M", &[("int", RefKind::Ref)], "void"),
        &target
    ));
}

#[test]
fn test_matching_distinguishes_member_kinds() {
    let target = method("P", &[], "int");
    let mut property = method("P", &[], "int");
    property.kind = MemberKind::Property {
        is_indexer: false,
        getter: None,
        setter: None,
    };
    assert!(!matches_for_implementation(&property, &target));

    let mut getter = method("get_P", &[], "int");
    getter.kind = MemberKind::Accessor {
        kind: AccessorKind::Get,
        parent: MemberId(1),
    };
    let mut setter = getter.clone();
    setter.kind = MemberKind::Accessor {
        kind: AccessorKind::Set,
        parent: MemberId(1),
    };
    assert!(!matches_for_implementation(&getter, &setter));
}

#[test]
fn test_explicit_target_is_identity() {
    let mut candidate = method("M", &[], "void");
    candidate.explicit_interface_name = Some("I1".into());
    candidate.explicit_interface_target = Some(ExplicitTarget {
        interface: TypeId(3),
        member: MemberId(7),
    });
    assert!(matches_explicit_target(&candidate, MemberId(7), TypeId(3)));
    assert!(!matches_explicit_target(&candidate, MemberId(8), TypeId(3)));
    assert!(!matches_explicit_target(&candidate, MemberId(7), TypeId(4)));
    assert!(!matches_explicit_target(&method("M", &[], "void"), MemberId(7), TypeId(3)));
}

#[test]
fn test_signature_key_equality_across_symbols() {
    let a = method("M", &[("int", RefKind::In)], "void");
    let mut b = method("M", &[("int", RefKind::In)], "string");
    b.id = MemberId(42);
    b.owner = TypeId(9);
    assert_eq!(SignatureKey::of(&a), SignatureKey::of(&b));
    assert_eq!(SignatureKey::of(&a).arity(), 1);

    let indexer = MemberSymbol {
        kind: MemberKind::Property {
            is_indexer: true,
            getter: None,
            setter: None,
        },
        signature: Signature {
            parameters: smallvec![Parameter {
                ty: TypeRef::new("int"),
                ref_kind: RefKind::None,
            }],
            return_type: TypeRef::new("int"),
            returns_by_ref: false,
        },
        ..method("this", &[], "int")
    };
    assert_eq!(SignatureKey::of(&indexer).kind, MemberKindKey::Indexer);
}

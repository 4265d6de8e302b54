use super::*;
use crate::declarations::{AccessorDecl, MethodDecl, PropertyDecl};

fn fixture() -> AssemblyDecl {
    AssemblyDecl::new("Lib")
        .with_type(
            TypeDecl::interface("I1")
                .with_member(MethodDecl::new("M1").with_body())
                .with_member(
                    PropertyDecl::new("P", "int")
                        .with_getter(AccessorDecl::bodiless())
                        .with_setter(AccessorDecl::bodiless()),
                ),
        )
        .with_type(
            TypeDecl::class("C")
                .with_interfaces(&["I1"])
                .with_member(MethodDecl::new("M1").explicit("I1").with_body())
                .with_member(
                    MethodDecl::new("M1")
                        .with_modifiers(Modifiers::PUBLIC)
                        .with_body(),
                ),
        )
}

#[test]
fn test_key_distinguishes_explicit_from_implicit() {
    let mut arena = SymbolArena::new();
    let assembly = import_assembly(&mut arena, &fixture(), &[]);
    let c = arena.lookup_type_in(assembly, "C").expect("C");
    let members = arena.type_symbol(c).members.clone();
    let explicit = MemberKey::of(&arena, members[0]);
    let implicit = MemberKey::of(&arena, members[1]);
    assert_ne!(explicit, implicit);
    assert_eq!(explicit.explicit_interface.as_deref(), Some("I1"));
    assert_eq!(explicit.resolve(&arena), Some(members[0]));
    assert_eq!(implicit.resolve(&arena), Some(members[1]));
}

#[test]
fn test_accessor_keys_resolve_in_a_fresh_arena() {
    let mut first = SymbolArena::new();
    let a = import_assembly(&mut first, &fixture(), &[]);
    let i1 = first.lookup_type_in(a, "I1").expect("I1");
    let p = first.lookup_member(i1, "P").expect("P");
    let setter = first.member(p).accessors()[1];
    let key = MemberKey::of(&first, setter);

    let mut second = SymbolArena::new();
    let exported = export_assembly(&first, a);
    let b = import_assembly(&mut second, &exported, &[]);
    let resolved = key.resolve(&second).expect("setter resolves");
    assert_eq!(second.member_display(resolved), "I1.P.set");
    assert_eq!(MemberKey::of(&second, resolved), key);
    assert_eq!(second.types_of_assembly(b).len(), 2);
}

#[test]
fn test_keys_are_usable_as_set_members() {
    let mut arena = SymbolArena::new();
    let assembly = import_assembly(&mut arena, &fixture(), &[]);
    let c = arena.lookup_type_in(assembly, "C").expect("C");
    let members = arena.type_symbol(c).members.clone();

    let ordered: std::collections::BTreeSet<MemberKey> = members
        .iter()
        .chain(members.iter())
        .map(|&m| MemberKey::of(&arena, m))
        .collect();
    assert_eq!(ordered.len(), 2);

    let hashed: rustc_hash::FxHashSet<MemberKey> = ordered.iter().cloned().collect();
    assert!(hashed.contains(&MemberKey::of(&arena, members[1])));
}

use super::*;
use crate::declarations::AssemblyDecl;

fn bind_source(decl: &AssemblyDecl) -> (SymbolArena, BindResult) {
    let mut arena = SymbolArena::new();
    let result = bind_assembly(&mut arena, decl, &[], BinderOptions::default());
    (arena, result)
}

fn codes(result: &BindResult) -> Vec<u32> {
    result.diagnostics.iter().map(|d| d.code).collect()
}

#[test]
fn test_types_keep_declaration_order() {
    let decl = AssemblyDecl::new("A")
        .with_type(TypeDecl::interface("I1"))
        .with_type(TypeDecl::class("C"))
        .with_type(TypeDecl::struct_type("S"));
    let (arena, result) = bind_source(&decl);
    let names: Vec<String> = result.types.iter().map(|&t| arena.type_display(t)).collect();
    assert_eq!(names, vec!["I1", "C", "S"]);
    assert!(arena.type_symbol(result.types[0]).is_abstract());
    assert!(arena.type_symbol(result.types[2]).is_sealed());
}

#[test]
fn test_interface_named_as_base_joins_interface_list() {
    let decl = AssemblyDecl::new("A")
        .with_type(TypeDecl::interface("I1"))
        .with_type(TypeDecl::interface("I2"))
        .with_type(TypeDecl::class("C").with_base("I1").with_interfaces(&["I2", "I1"]));
    let (arena, result) = bind_source(&decl);
    assert!(result.diagnostics.is_empty());
    let c = arena.type_symbol(result.types[2]);
    assert_eq!(c.base_type, None);
    assert_eq!(c.declared_interfaces, vec![result.types[0], result.types[1]]);
}

#[test]
fn test_unknown_and_non_interface_names_are_reported() {
    let decl = AssemblyDecl::new("A")
        .with_type(TypeDecl::class("Base"))
        .with_type(TypeDecl::class("C").with_interfaces(&["Missing", "Base"]));
    let (arena, result) = bind_source(&decl);
    assert_eq!(
        codes(&result),
        vec![
            diagnostic_codes::TYPE_OR_NAMESPACE_NAME_COULD_NOT_BE_FOUND,
            diagnostic_codes::TYPE_IN_INTERFACE_LIST_IS_NOT_AN_INTERFACE,
        ]
    );
    assert!(arena.type_symbol(result.types[1]).declared_interfaces.is_empty());
}

#[test]
fn test_sealed_base_is_reported_but_kept() {
    let decl = AssemblyDecl::new("A")
        .with_type(TypeDecl::class("Base").with_modifiers(Modifiers::SEALED))
        .with_type(TypeDecl::class("Derived").with_base("Base"));
    let (arena, result) = bind_source(&decl);
    assert_eq!(
        codes(&result),
        vec![diagnostic_codes::CANNOT_DERIVE_FROM_SEALED_TYPE]
    );
    assert_eq!(
        arena.type_symbol(result.types[1]).base_type,
        Some(result.types[0])
    );
}

#[test]
fn test_circular_base_types_are_broken_once() {
    let decl = AssemblyDecl::new("A")
        .with_type(TypeDecl::class("A1").with_base("B1"))
        .with_type(TypeDecl::class("B1").with_base("A1"));
    let (arena, result) = bind_source(&decl);
    assert_eq!(
        codes(&result),
        vec![diagnostic_codes::CIRCULAR_BASE_TYPE_DEPENDENCY]
    );
    assert_eq!(arena.type_symbol(result.types[0]).base_type, None);
    assert_eq!(
        arena.type_symbol(result.types[1]).base_type,
        Some(result.types[0])
    );
}

#[test]
fn test_interface_cycles_are_broken() {
    let decl = AssemblyDecl::new("A")
        .with_type(TypeDecl::interface("I1").with_interfaces(&["I2"]))
        .with_type(TypeDecl::interface("I2").with_interfaces(&["I3"]))
        .with_type(TypeDecl::interface("I3").with_interfaces(&["I1"]));
    let (arena, result) = bind_source(&decl);
    assert_eq!(
        codes(&result),
        vec![diagnostic_codes::INHERITED_INTERFACE_CAUSES_A_CYCLE]
    );
    let rendered = result.diagnostics[0].render();
    assert_eq!(
        rendered.message_text,
        "Inherited interface 'I2' causes a cycle in the interface hierarchy of 'I1'"
    );
    assert!(arena.type_symbol(result.types[0]).declared_interfaces.is_empty());
    assert_eq!(arena.type_symbol(result.types[2]).declared_interfaces.len(), 1);
}

#[test]
fn test_metadata_mode_reports_nothing() {
    let decl = AssemblyDecl::new("A").with_type(TypeDecl::class("C").with_interfaces(&["Missing"]));
    let mut arena = SymbolArena::new();
    let result = bind_assembly(&mut arena, &decl, &[], BinderOptions::metadata());
    assert!(result.diagnostics.is_empty());
    assert!(arena.assembly(result.assembly).is_metadata);
}

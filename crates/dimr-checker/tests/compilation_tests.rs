//! Compilations over references, the query API and the implementation map.

use dimr_binder::{
    AccessorDecl, AssemblyDecl, CoreLibrary, MemberKey, MethodDecl, Modifiers, PropertyDecl,
    TypeDecl,
};
use dimr_checker::{CancellationToken, Cancelled, Compilation, CompilationOptions};
use serde_json::json;

fn source(decl: AssemblyDecl, references: &[&Compilation]) -> Compilation {
    Compilation::new(
        &decl.with_core_library(CoreLibrary::latest()),
        references,
        CompilationOptions::default(),
    )
}

/// `interface I1 { void M1(); void M2() {} }` and `class Base : I1` with a
/// public `M1`.
fn library() -> Compilation {
    source(
        AssemblyDecl::new("Lib")
            .with_type(
                TypeDecl::interface("I1")
                    .with_member(MethodDecl::new("M1"))
                    .with_member(MethodDecl::new("M2").with_body()),
            )
            .with_type(
                TypeDecl::class("Base").with_interfaces(&["I1"]).with_member(
                    MethodDecl::new("M1")
                        .with_modifiers(Modifiers::PUBLIC)
                        .with_body(),
                ),
            ),
        &[],
    )
}

fn app(lib: &Compilation) -> Compilation {
    source(
        AssemblyDecl::new("App")
            .with_type(TypeDecl::class("Derived").with_base("Base"))
            .with_type(TypeDecl::class("Test").with_interfaces(&["I1"])),
        &[lib],
    )
}

// =============================================================================
// References
// =============================================================================

#[test]
fn test_lookup_sees_referenced_types() {
    let lib = library();
    let app = app(&lib);
    assert_eq!(app.assembly_name(), "App");
    assert_eq!(app.types().len(), 2);
    assert!(app.lookup_type("I1").is_some());
    assert!(app.lookup_member("Base", "M1").is_some());
    assert_eq!(app.lookup_member("Base", "M9"), None);
    assert_eq!(app.lookup_type("Missing"), None);
}

#[test]
fn test_inherited_implementation_from_referenced_base() {
    let lib = library();
    let app = app(&lib);
    let derived = app.lookup_type("Derived").expect("Derived");
    let m1 = app.lookup_member("I1", "M1").expect("I1.M1");
    let found = app.find_implementation(derived, m1).expect("implementation");
    assert_eq!(app.arena().member_display(found), "Base.M1()");
}

#[test]
fn test_answers_agree_across_compilations() {
    let lib = library();
    let app = app(&lib);

    let in_lib = lib
        .find_implementation(
            lib.lookup_type("Base").expect("Base"),
            lib.lookup_member("I1", "M1").expect("I1.M1"),
        )
        .expect("implementation in Lib");
    let in_app = app
        .find_implementation(
            app.lookup_type("Base").expect("Base"),
            app.lookup_member("I1", "M1").expect("I1.M1"),
        )
        .expect("implementation in App");

    assert_eq!(
        MemberKey::of(lib.arena(), in_lib),
        MemberKey::of(app.arena(), in_app)
    );
    assert_eq!(
        MemberKey::of(lib.arena(), in_lib).resolve(app.arena()),
        Some(in_app)
    );
}

#[test]
fn test_references_are_imported_transitively() {
    let core = source(
        AssemblyDecl::new("Core")
            .with_type(TypeDecl::interface("I0").with_member(MethodDecl::new("M0").with_body())),
        &[],
    );
    let lib = source(
        AssemblyDecl::new("Lib").with_type(TypeDecl::interface("I1").with_interfaces(&["I0"])),
        &[&core],
    );
    let app = source(
        AssemblyDecl::new("App").with_type(TypeDecl::class("Test").with_interfaces(&["I1"])),
        &[&lib],
    );

    assert!(app.arena().assembly_by_name("Core").is_some());
    let test = app.lookup_type("Test").expect("Test");
    let names: Vec<String> = app
        .flattened_interfaces(test)
        .iter()
        .map(|&i| app.arena().type_display(i))
        .collect();
    assert_eq!(names, vec!["I1", "I0"]);
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn test_referenced_types_are_not_checked() {
    let lib = library();
    let app = app(&lib);
    // Only Test is missing M1; Base in Lib is fine and not rechecked.
    let codes: Vec<u32> = app.get_diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![535]);
}

#[test]
fn test_binder_diagnostics_come_first() {
    let compilation = source(
        AssemblyDecl::new("App")
            .with_type(TypeDecl::interface("I1").with_member(MethodDecl::new("M1")))
            .with_type(TypeDecl::class("Test").with_interfaces(&["I1"]))
            .with_type(
                TypeDecl::class("Other")
                    .with_member(MethodDecl::new("M1").explicit("Nope").with_body()),
            ),
        &[],
    );
    assert_eq!(compilation.binder_diagnostics().len(), 1);
    let codes: Vec<u32> = compilation
        .get_diagnostics()
        .iter()
        .map(|d| d.code)
        .collect();
    assert_eq!(codes, vec![246, 535]);
}

#[test]
fn test_diagnostics_are_stable_across_runs() {
    let decl = (0..24).fold(
        AssemblyDecl::new("App").with_type(
            TypeDecl::interface("I1")
                .with_member(MethodDecl::new("M1"))
                .with_member(MethodDecl::new("M2")),
        ),
        |decl, i| decl.with_type(TypeDecl::class(format!("C{i}")).with_interfaces(&["I1"])),
    );
    let first = source(decl.clone(), &[]).get_diagnostics();
    assert_eq!(first.len(), 48);
    for _ in 0..4 {
        assert_eq!(source(decl.clone(), &[]).get_diagnostics(), first);
    }
    let compilation = source(decl, &[]);
    assert_eq!(compilation.get_diagnostics(), compilation.get_diagnostics());
}

#[test]
fn test_cancelled_token_stops_the_pass() {
    let lib = library();
    let app = app(&lib);
    let token = CancellationToken::new();
    token.cancel();
    assert_eq!(app.check(&token), Err(Cancelled));
    assert_eq!(app.check(&CancellationToken::new()).map(|d| d.len()), Ok(1));
}

// =============================================================================
// Implementation map
// =============================================================================

#[test]
fn test_implementation_map_lists_every_query() {
    let compilation = source(
        AssemblyDecl::new("App")
            .with_type(
                TypeDecl::interface("I1")
                    .with_member(MethodDecl::new("M1"))
                    .with_member(MethodDecl::new("M2").with_body())
                    .with_member(MethodDecl::new("M3"))
                    .with_member(
                        PropertyDecl::new("P", "int").with_getter(AccessorDecl::bodiless()),
                    ),
            )
            .with_type(
                TypeDecl::class("Test")
                    .with_interfaces(&["I1"])
                    .with_member(MethodDecl::new("M1").explicit("I1").with_body())
                    .with_member(
                        PropertyDecl::new("P", "int")
                            .with_modifiers(Modifiers::PUBLIC)
                            .with_getter(AccessorDecl::bodiless()),
                    ),
            ),
        &[],
    );
    let entries = compilation.implementation_map();
    let rows: Vec<(&str, Option<&str>, Option<&str>)> = entries
        .iter()
        .map(|e| {
            assert_eq!(e.type_name, "Test");
            (
                e.interface_member.as_str(),
                e.implementation.as_deref(),
                e.source,
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            ("I1.M1()", Some("Test.I1.M1()"), Some("explicit")),
            ("I1.M2()", Some("I1.M2()"), Some("default")),
            ("I1.M3()", None, None),
            ("I1.P", Some("Test.P"), Some("implicit")),
            ("I1.P.get", Some("Test.P.get"), Some("implicit")),
        ]
    );

    assert_eq!(
        serde_json::to_value(&entries[0]).expect("serialize"),
        json!({
            "type": "Test",
            "interfaceMember": "I1.M1()",
            "implementation": "Test.I1.M1()",
            "source": "explicit",
        })
    );
    assert_eq!(
        serde_json::to_value(&entries[2]).expect("serialize"),
        json!({
            "type": "Test",
            "interfaceMember": "I1.M3()",
            "implementation": null,
            "source": null,
        })
    );
}

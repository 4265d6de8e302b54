use super::*;
use crate::fixtures::Fixture;
use dimr_binder::{AssemblyDecl, CoreLibrary, MethodDecl, Modifiers, TypeDecl};
use dimr_common::SourceSpan;

fn library(core: CoreLibrary) -> Fixture {
    Fixture::bind(
        AssemblyDecl::new("Lib")
            .with_core_library(core)
            .with_type(
                TypeDecl::interface("I1")
                    .with_member(
                        MethodDecl::new("M1")
                            .with_body()
                            .with_span(SourceSpan::new("lib.cs", 40, 2)),
                    )
                    .with_member(MethodDecl::new("M2"))
                    .with_member(MethodDecl::new("M3").with_modifiers(Modifiers::EXTERN)),
            )
            .with_type(
                TypeDecl::class("Test2")
                    .with_interfaces(&["I1"])
                    .with_interface_list_span(SourceSpan::new("lib.cs", 100, 4)),
            ),
    )
}

#[test]
fn test_bodiless_member_has_no_default() {
    let fixture = library(CoreLibrary::latest());
    let m2 = fixture.member("I1", "M2");
    let outcome = resolve_default_body(&fixture.arena, m2, fixture.assembly);
    assert_eq!(outcome, DefaultBody::Missing);
    assert_eq!(outcome.member(), None);
    // Nothing asked the runtime.
    assert!(!fixture.arena.assembly(fixture.assembly).is_runtime_support_frozen());
}

#[test]
fn test_supported_runtime_uses_the_body() {
    let fixture = library(CoreLibrary::latest());
    let m1 = fixture.member("I1", "M1");
    let outcome = resolve_default_body(&fixture.arena, m1, fixture.assembly);
    assert_eq!(outcome, DefaultBody::Usable(m1));
    assert!(!outcome.is_runtime_unsupported());
    assert!(fixture.arena.assembly(fixture.assembly).is_runtime_support_frozen());
}

#[test]
fn test_extern_member_counts_as_a_body() {
    let fixture = library(CoreLibrary::latest());
    let m3 = fixture.member("I1", "M3");
    assert_eq!(
        resolve_default_body(&fixture.arena, m3, fixture.assembly),
        DefaultBody::Usable(m3)
    );
}

#[test]
fn test_legacy_runtime_still_names_the_body() {
    let fixture = library(CoreLibrary::legacy());
    let m1 = fixture.member("I1", "M1");
    let outcome = resolve_default_body(&fixture.arena, m1, fixture.assembly);
    assert_eq!(outcome, DefaultBody::RuntimeUnsupported(m1));
    assert_eq!(outcome.member(), Some(m1));
    assert!(outcome.is_runtime_unsupported());
}

#[test]
fn test_override_decides_before_first_read() {
    let fixture = library(CoreLibrary::legacy());
    fixture
        .arena
        .assembly(fixture.assembly)
        .set_runtime_supports_default_interface_implementation(true);
    let m1 = fixture.member("I1", "M1");
    assert_eq!(
        resolve_default_body(&fixture.arena, m1, fixture.assembly),
        DefaultBody::Usable(m1)
    );
}

#[test]
fn test_declaration_site_diagnostic_points_at_member() {
    let fixture = library(CoreLibrary::legacy());
    let diagnostic = declaration_site_diagnostic(&fixture.arena, fixture.member("I1", "M1"));
    assert_eq!(
        diagnostic.code,
        diagnostic_codes::TARGET_RUNTIME_DOES_NOT_SUPPORT_DEFAULT_INTERFACE_IMPLEMENTATION
    );
    assert_eq!(diagnostic.span, SourceSpan::new("lib.cs", 40, 2));
    assert!(diagnostic.is_error());
    assert_eq!(
        diagnostic.render().message_text,
        "Target runtime doesn't support default interface implementation."
    );
}

#[test]
fn test_use_site_diagnostic_points_at_interface_list() {
    let fixture = library(CoreLibrary::legacy());
    let diagnostic = use_site_diagnostic(
        &fixture.arena,
        fixture.ty("Test2"),
        fixture.member("I1", "M1"),
    );
    assert_eq!(diagnostic.span, SourceSpan::new("lib.cs", 100, 4));

    let rendered = diagnostic.render();
    assert_eq!(rendered.code, 8707);
    assert_eq!(rendered.args, ["I1.M1()", "Test2"]);
    assert_eq!(
        rendered.message_text,
        "Type 'Test2' cannot implement interface member 'I1.M1()' with its default implementation because the target runtime doesn't support default interface implementation."
    );
    assert_eq!(rendered.related_information.len(), 1);
    assert_eq!(rendered.related_information[0].start, 40);
    assert_eq!(
        rendered.related_information[0].message_text,
        "'I1.M1()' is declared here."
    );
}

#[test]
fn test_use_site_diagnostic_without_declaration_location() {
    let fixture = library(CoreLibrary::legacy());
    // M2 was declared without a span.
    let diagnostic = use_site_diagnostic(
        &fixture.arena,
        fixture.ty("Test2"),
        fixture.member("I1", "M2"),
    );
    assert!(diagnostic.related.is_empty());
}

use dimr_binder::{MemberDecl, Modifiers, TypeKind};
use dimr_common::LanguageVersion;

use super::manifest::Manifest;

const TWO_ASSEMBLIES: &str = r#"{
  "assemblies": [
    {
      "name": "Lib",
      "coreLibrary": { "name": "System.Runtime", "runtimeFeatures": ["DefaultImplementationsOfInterfaces"] },
      "types": [
        {
          "name": "I1",
          "kind": "interface",
          "members": [
            { "member": "method", "name": "M1", "hasBody": true },
            { "member": "method", "name": "M2", "returnType": "int" }
          ]
        }
      ]
    },
    {
      "name": "App",
      "references": ["Lib"],
      "languageVersion": "7.3",
      "runtimeSupport": "false",
      "types": [
        {
          "name": "Test",
          "kind": "class",
          "interfaces": ["I1"],
          "interfaceListSpan": { "file": "app.cs", "start": 12, "length": 2 },
          "members": [
            { "member": "method", "name": "M2", "modifiers": ["public"], "returnType": "int", "hasBody": "true" }
          ]
        }
      ]
    }
  ]
}"#;

#[test]
fn parses_assemblies_with_options() {
    let manifest = Manifest::parse(TWO_ASSEMBLIES).expect("manifest should parse");
    assert_eq!(manifest.assemblies.len(), 2);

    let lib = &manifest.assemblies[0];
    assert_eq!(lib.decl.name, "Lib");
    assert_eq!(lib.language_version, LanguageVersion::Latest);
    assert_eq!(lib.runtime_support, None);
    assert!(
        lib.decl
            .core_library
            .as_ref()
            .is_some_and(|core| core.supports_default_interface_implementation())
    );
    assert_eq!(lib.decl.types[0].kind, TypeKind::Interface);

    let app = &manifest.assemblies[1];
    assert_eq!(app.decl.references, vec!["Lib"]);
    assert_eq!(app.language_version, LanguageVersion::CSharp7_3);
    assert_eq!(app.runtime_support, Some(false));
    let options = app.options();
    assert_eq!(options.language_version, LanguageVersion::CSharp7_3);
    assert_eq!(options.runtime_support_override, Some(false));

    let MemberDecl::Method(m2) = &app.decl.types[0].members[0] else {
        panic!("expected a method");
    };
    assert_eq!(m2.modifiers, Modifiers::PUBLIC);
    assert!(m2.has_body);
    assert_eq!(m2.return_type, "int");
}

#[test]
fn accepts_boolean_runtime_support() {
    let manifest =
        Manifest::parse(r#"{ "assemblies": [ { "name": "A", "runtimeSupport": true } ] }"#)
            .expect("manifest should parse");
    assert_eq!(manifest.assemblies[0].runtime_support, Some(true));
    assert!(manifest.assemblies[0].decl.types.is_empty());
}

#[test]
fn rejects_invalid_boolean_strings() {
    let err =
        Manifest::parse(r#"{ "assemblies": [ { "name": "A", "runtimeSupport": "maybe" } ] }"#)
            .expect_err("invalid boolean should fail");
    assert!(format!("{err:#}").contains("invalid boolean value"));
}

#[test]
fn rejects_forward_references() {
    let err = Manifest::parse(
        r#"{ "assemblies": [ { "name": "App", "references": ["Lib"] }, { "name": "Lib" } ] }"#,
    )
    .expect_err("forward reference should fail");
    assert_eq!(
        err.to_string(),
        "assembly 'App' references 'Lib', which is not listed before it"
    );
}

#[test]
fn rejects_duplicate_names() {
    let err = Manifest::parse(r#"{ "assemblies": [ { "name": "A" }, { "name": "A" } ] }"#)
        .expect_err("duplicate should fail");
    assert_eq!(err.to_string(), "assembly 'A' is listed twice");
}

#[test]
fn rejects_empty_manifest() {
    assert!(Manifest::parse(r#"{ "assemblies": [] }"#).is_err());
    assert!(Manifest::parse("not json").is_err());
}

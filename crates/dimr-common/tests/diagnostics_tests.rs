use dimr_common::diagnostics::{
    DIAGNOSTIC_MESSAGES, diagnostic_codes, format_code, get_diagnostic_category,
    get_message_template,
};
use dimr_common::{
    DiagnosticArg, DiagnosticCategory, Feature, LanguageVersion, PendingDiagnostic, SourceSpan,
    format_message,
};

#[test]
fn test_format_message_replaces_positional_args() {
    let text = format_message("'{0}' does not implement interface member '{1}'", &["C", "I.M()"]);
    assert_eq!(text, "'C' does not implement interface member 'I.M()'");
}

#[test]
fn test_codes_are_unique() {
    let mut codes: Vec<u32> = DIAGNOSTIC_MESSAGES.iter().map(|m| m.code).collect();
    let total = codes.len();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), total);
}

#[test]
fn test_hiding_warnings_are_warnings() {
    assert_eq!(
        get_diagnostic_category(diagnostic_codes::HIDES_INHERITED_MEMBER_USE_THE_NEW_KEYWORD),
        Some(DiagnosticCategory::Warning)
    );
    assert_eq!(
        get_diagnostic_category(diagnostic_codes::DOES_NOT_IMPLEMENT_INTERFACE_MEMBER),
        Some(DiagnosticCategory::Error)
    );
    assert!(get_message_template(4242).is_none());
}

#[test]
fn test_pending_diagnostic_render() {
    let span = SourceSpan::new("a.cs", 10, 5);
    let pending = PendingDiagnostic::new(
        diagnostic_codes::TARGET_RUNTIME_DOES_NOT_SUPPORT_DEFAULT_INTERFACE_IMPLEMENTATION_FOR_MEMBER,
        span.clone(),
        vec![
            DiagnosticArg::Member("I1.M1()".into()),
            DiagnosticArg::Type("Test2".into()),
        ],
    )
    .with_related(
        SourceSpan::new("b.cs", 0, 2),
        diagnostic_codes::DECLARED_HERE,
        vec![DiagnosticArg::Member("I1.M1()".into())],
    );

    let diag = pending.render();
    assert_eq!(diag.code, 8707);
    assert_eq!(diag.file, "a.cs");
    assert_eq!((diag.start, diag.length), (10, 5));
    assert!(diag.is_error());
    assert_eq!(
        diag.message_text,
        "Type 'Test2' cannot implement interface member 'I1.M1()' with its default implementation because the target runtime doesn't support default interface implementation."
    );
    assert_eq!(diag.args, vec!["I1.M1()", "Test2"]);
    assert_eq!(diag.related_information.len(), 1);
    assert_eq!(
        diag.related_information[0].message_text,
        "'I1.M1()' is declared here."
    );
}

#[test]
fn test_format_code_pads() {
    assert_eq!(format_code(106), "CS0106");
    assert_eq!(format_code(8701), "CS8701");
}

#[test]
fn test_language_version_gate() {
    assert!(!LanguageVersion::CSharp7_3.supports(Feature::DefaultInterfaceImplementation));
    assert!(LanguageVersion::CSharp8.supports(Feature::DefaultInterfaceImplementation));
    assert!(LanguageVersion::Latest.supports(Feature::DefaultInterfaceImplementation));
    assert_eq!("7.3".parse::<LanguageVersion>(), Ok(LanguageVersion::CSharp7_3));
    assert!("9.9".parse::<LanguageVersion>().is_err());

    let parsed: LanguageVersion = serde_json::from_str("\"8.0\"").expect("valid version");
    assert_eq!(parsed, LanguageVersion::CSharp8);
}

#[test]
fn test_span_display() {
    assert_eq!(SourceSpan::none().to_string(), "<metadata>");
    assert_eq!(SourceSpan::new("x.cs", 3, 4).to_string(), "x.cs(3..7)");
}

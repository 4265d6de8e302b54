use clap::Parser;
use std::path::Path;

use super::args::CliArgs;

#[test]
fn parses_defaults() {
    let args =
        CliArgs::try_parse_from(["dimr", "manifest.json"]).expect("default args should parse");

    assert_eq!(args.manifest, Path::new("manifest.json"));
    assert_eq!(args.assembly, None);
    assert!(!args.implementations);
    assert!(!args.json);
    assert_eq!(args.pretty, None);
}

#[test]
fn parses_all_flags() {
    let args = CliArgs::try_parse_from([
        "dimr",
        "build/manifest.json",
        "--assembly",
        "Lib",
        "--implementations",
        "--json",
        "--pretty",
        "false",
    ])
    .expect("flagged args should parse");

    assert_eq!(args.manifest, Path::new("build/manifest.json"));
    assert_eq!(args.assembly.as_deref(), Some("Lib"));
    assert!(args.implementations);
    assert!(args.json);
    assert_eq!(args.pretty, Some(false));
}

#[test]
fn requires_a_manifest() {
    assert!(CliArgs::try_parse_from(["dimr"]).is_err());
}

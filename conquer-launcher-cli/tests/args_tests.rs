//! Argument parsing checks.

use std::path::PathBuf;

use clap::Parser;
use pretty_assertions::assert_eq;
use rstest::rstest;

use conquer_launcher_cli::Args;

#[test]
fn test_no_arguments_yield_the_defaults() {
    let args = Args::try_parse_from(["conquer"]).unwrap();
    assert!(args.jvm_options.is_empty());
    assert!(args.classpaths.is_empty());
    assert!(args.base_dir.is_none());
    assert!(args.jvm_library.is_none());
    assert!(!args.dry_run);
}

#[test]
fn test_repeated_jvm_options_accumulate_in_order() {
    let args = Args::try_parse_from([
        "conquer",
        "-J",
        "-Xmx2g",
        "--jvm-option",
        "-Dconquer.debug=true",
    ])
    .unwrap();
    assert_eq!(
        args.jvm_options,
        vec!["-Xmx2g".to_owned(), "-Dconquer.debug=true".to_owned()]
    );
}

#[rstest]
#[case::separated(&["conquer", "-J", "-Xmx2g"], "-Xmx2g")]
#[case::attached(&["conquer", "-J-Xms128m"], "-Xms128m")]
#[case::long_form(&["conquer", "--jvm-option", "-verbose:gc"], "-verbose:gc")]
fn test_jvm_option_forms(#[case] argv: &[&str], #[case] expected: &str) {
    let args = Args::try_parse_from(argv.iter().copied()).unwrap();
    assert_eq!(args.jvm_options, vec![expected.to_owned()]);
}

#[test]
fn test_repeated_classpath_roots_accumulate_in_order() {
    let args = Args::try_parse_from(["conquer", "-c", "mods", "--classpath", "extra"]).unwrap();
    assert_eq!(args.classpaths, vec!["mods".to_owned(), "extra".to_owned()]);
}

#[test]
fn test_base_dir_and_jvm_override_are_paths() {
    let args = Args::try_parse_from([
        "conquer",
        "--base-dir",
        "/opt/conquer",
        "--jvm",
        "/usr/lib/jvm/java-21/lib/server/libjvm.so",
    ])
    .unwrap();
    assert_eq!(args.base_dir, Some(PathBuf::from("/opt/conquer")));
    assert_eq!(
        args.jvm_library,
        Some(PathBuf::from("/usr/lib/jvm/java-21/lib/server/libjvm.so"))
    );
}

#[test]
fn test_dry_run_flag() {
    let args = Args::try_parse_from(["conquer", "--dry-run"]).unwrap();
    assert!(args.dry_run);
}

#[test]
fn test_unknown_flags_are_rejected() {
    assert!(Args::try_parse_from(["conquer", "--definitely-unknown"]).is_err());
}

#[test]
fn test_configuration_carries_the_arguments() {
    let args = Args::try_parse_from([
        "conquer",
        "-J",
        "-Xmx2g",
        "-c",
        "mods",
        "--base-dir",
        "/opt/conquer",
    ])
    .unwrap();

    let config = args.to_configuration();
    assert_eq!(config.options, vec!["-Xmx2g".to_owned()]);
    assert_eq!(config.classpaths, vec!["mods".to_owned()]);
    assert_eq!(config.base_directory, PathBuf::from("/opt/conquer"));
    assert_eq!(config.runtime_library, None);
}

#[test]
fn test_default_base_directory_is_filled_in() {
    let args = Args::try_parse_from(["conquer"]).unwrap();
    let config = args.to_configuration();
    assert!(!config.base_directory.as_os_str().is_empty());
}

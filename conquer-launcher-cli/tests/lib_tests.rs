//! End-to-end runs of the launcher surface with a fake VM.

use std::fs::{self, File};
use std::io::Cursor;

use clap::Parser;

use conquer_launcher::vm::{EntryOutcome, FakeJvmLoader};
use conquer_launcher_cli::{run_launcher, Args};

fn run(args: &Args, loader: &FakeJvmLoader) -> (anyhow::Result<EntryOutcome>, String, String) {
    let mut out = Cursor::new(Vec::new());
    let mut diag = Cursor::new(Vec::new());
    let outcome = run_launcher(args, loader, &mut out, &mut diag);
    let out = String::from_utf8(out.into_inner()).unwrap_or_default();
    let diag = String::from_utf8(diag.into_inner()).unwrap_or_default();
    (outcome, out, diag)
}

#[test]
fn test_dry_run_prints_the_plan_and_never_loads() -> std::io::Result<()> {
    let base = tempfile::tempdir()?;
    let libs = base.path().join("libs");
    fs::create_dir(&libs)?;
    File::create(libs.join("game.jar"))?;

    let base_dir = base.path().display().to_string();
    let args = Args::try_parse_from([
        "conquer",
        "--dry-run",
        "--base-dir",
        &base_dir,
        "-J",
        "-Xmx256m",
    ])
    .unwrap();
    let loader = FakeJvmLoader::new();
    let log = loader.log();

    let (outcome, out, diag) = run(&args, &loader);

    assert_eq!(outcome.unwrap(), EntryOutcome::Completed);
    assert_eq!(log.loads(), 0, "a dry run must not touch any library");
    assert!(out.contains("classpath entries:"));
    assert!(out.contains(&format!("{base_dir}/libs/game.jar")));
    assert!(out.contains("options:"));
    assert!(out.contains("--enable-preview"));
    assert!(out.contains("-Xmx256m"));
    assert_eq!(diag, "");
    Ok(())
}

#[test]
fn test_launch_wires_the_loader_through_one_cycle() {
    let args = Args::try_parse_from(["conquer", "--base-dir", "/opt/conquer"]).unwrap();
    let loader = FakeJvmLoader::new();
    let log = loader.log();

    let (outcome, out, _) = run(&args, &loader);

    assert_eq!(outcome.unwrap(), EntryOutcome::Completed);
    assert_eq!(log.loads(), 1);
    assert_eq!(log.invocations(), 1);
    assert_eq!(log.destructions(), 1);
    assert_eq!(out, "", "a real launch prints nothing on success");
}

#[test]
fn test_creation_failure_surfaces_as_an_error_with_the_status() {
    let args = Args::try_parse_from(["conquer", "--base-dir", "/opt/conquer"]).unwrap();
    let loader = FakeJvmLoader::new().failing_creation(-6);

    let (outcome, _, diag) = run(&args, &loader);

    let error = outcome.unwrap_err();
    assert!(format!("{error:#}").contains("Couldn't create JVM: -6"));
    assert!(diag.contains("Couldn't create JVM: -6"));
}

#[test]
fn test_uncaught_exception_still_counts_as_ran() {
    let args = Args::try_parse_from(["conquer", "--base-dir", "/opt/conquer"]).unwrap();
    let loader = FakeJvmLoader::new().with_entry_outcome(EntryOutcome::UncaughtException);
    let log = loader.log();

    let (outcome, _, diag) = run(&args, &loader);

    assert_eq!(outcome.unwrap(), EntryOutcome::UncaughtException);
    assert_eq!(log.destructions(), 1);
    assert!(diag.contains("Uncaught exception in org/jel/gui/Intro.main"));
}

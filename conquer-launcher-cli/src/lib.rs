//! Command-line surface of the Conquer launcher.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use conquer_launcher::bootstrap::Bootstrapper;
use conquer_launcher::classpath::ClasspathBuilder;
use conquer_launcher::config::Configuration;
use conquer_launcher::options::OptionVector;
use conquer_launcher::platform::{default_base_directory, host_paths};
use conquer_launcher::scan::OsDirectoryLister;
use conquer_launcher::vm::JvmLoader;
use conquer_launcher::{EntryOutcome, EntryPoint};

/// Starts the Conquer game in an in-process JVM.
#[derive(Parser, Debug)]
#[command(name = "conquer", version, about = "Launches the Conquer game in an in-process JVM")]
pub struct Args {
    /// Extra option passed to the JVM (repeatable)
    #[arg(
        short = 'J',
        long = "jvm-option",
        value_name = "OPTION",
        allow_hyphen_values = true
    )]
    pub jvm_options: Vec<String>,

    /// Extra classpath root directory (repeatable)
    #[arg(short = 'c', long = "classpath", value_name = "DIR")]
    pub classpaths: Vec<String>,

    /// Installation directory holding the libs/ tree
    /// (default: the directory containing this executable)
    #[arg(long = "base-dir", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Explicit path to the JVM shared library
    #[arg(long = "jvm", value_name = "FILE")]
    pub jvm_library: Option<PathBuf>,

    /// Print the assembled classpath and options without starting a JVM
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    /// The launch configuration these arguments describe.
    pub fn to_configuration(&self) -> Configuration {
        Configuration {
            options: self.jvm_options.clone(),
            classpaths: self.classpaths.clone(),
            base_directory: self
                .base_dir
                .clone()
                .unwrap_or_else(default_base_directory),
            runtime_library: self.jvm_library.clone(),
        }
    }
}

/// Runs one launch as described by `args`.
///
/// Dry-run output goes to `out`, launch diagnostics to `diag`. Returns how
/// the hosted application ended; a dry run reports `Completed` without
/// loading anything.
pub fn run_launcher<W: Write, D: Write>(
    args: &Args,
    loader: &dyn JvmLoader,
    out: &mut W,
    diag: &mut D,
) -> anyhow::Result<EntryOutcome> {
    let config = args.to_configuration();

    if args.dry_run {
        let platform = host_paths();
        let lister = OsDirectoryLister;
        let builder = ClasspathBuilder::new(&config, platform.as_ref(), &lister);
        writeln!(out, "classpath entries:")?;
        for entry in builder.entries() {
            writeln!(out, "  {entry}")?;
        }
        let options = OptionVector::assemble(builder.build(), &config);
        writeln!(out, "options:")?;
        for option in options.iter() {
            writeln!(out, "  {}", option.as_str())?;
        }
        return Ok(EntryOutcome::Completed);
    }

    let entry = EntryPoint::default();
    let outcome = Bootstrapper::new(loader)
        .run(&config, &entry, diag)
        .with_context(|| format!("launching {}", entry.class))?;
    Ok(outcome)
}

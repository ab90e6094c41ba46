//! The launch pipeline: classpath, option vector, load, create, invoke,
//! destroy.

use std::io::Write;

use crate::abi::EntryPoint;
use crate::classpath::ClasspathBuilder;
use crate::config::Configuration;
use crate::error::{LaunchError, Result};
use crate::options::OptionVector;
use crate::platform::{host_paths, PlatformPaths};
use crate::scan::{DirectoryLister, OsDirectoryLister};
use crate::vm::{EntryOutcome, JvmLoader};

/// Drives one VM lifecycle: assemble the classpath and option vector, load
/// the JVM library through the injected loader, create the VM, invoke the
/// entry point, shut the VM down.
///
/// One call per process is the expected use. The entry invocation blocks the
/// calling thread for the lifetime of the hosted application; this is the
/// application's main thread.
pub struct Bootstrapper<'a> {
    loader: &'a dyn JvmLoader,
    platform: Box<dyn PlatformPaths>,
    lister: Box<dyn DirectoryLister>,
}

impl<'a> Bootstrapper<'a> {
    /// Bootstrapper for the host platform, scanning the real filesystem.
    pub fn new(loader: &'a dyn JvmLoader) -> Self {
        Bootstrapper {
            loader,
            platform: host_paths(),
            lister: Box::new(OsDirectoryLister),
        }
    }

    /// Replaces the platform path provider.
    pub fn with_platform(mut self, platform: Box<dyn PlatformPaths>) -> Self {
        self.platform = platform;
        self
    }

    /// Replaces the directory lister.
    pub fn with_lister(mut self, lister: Box<dyn DirectoryLister>) -> Self {
        self.lister = lister;
        self
    }

    /// Runs one full lifecycle and reports how the entry invocation ended.
    ///
    /// A failed creation writes `Couldn't create JVM: <status>` to `diag` and
    /// returns the error without a VM to destroy. An uncaught exception from
    /// the entry method is described on `diag` and is not a failure; the VM
    /// is destroyed on that path and on entry-resolution failures alike. A
    /// failing `diag` sink never skips the shutdown and never masks a
    /// creation failure. The option vector and the classpath it owns live
    /// exactly as long as this call, on every exit edge.
    pub fn run<W: Write>(
        &self,
        config: &Configuration,
        entry: &EntryPoint,
        diag: &mut W,
    ) -> Result<EntryOutcome> {
        let classpath =
            ClasspathBuilder::new(config, self.platform.as_ref(), self.lister.as_ref()).build();
        let options = OptionVector::assemble(classpath, config);

        let library = self.loader.load(config)?;
        let mut vm = match library.create_vm(&options) {
            Ok(vm) => vm,
            Err(error) => {
                if let LaunchError::RuntimeCreation { status } = &error {
                    // The status must reach the caller even when the sink fails.
                    let _ = writeln!(diag, "Couldn't create JVM: {status}");
                }
                return Err(error);
            }
        };

        let outcome = vm.invoke_entry(entry);
        let described = if let Ok(EntryOutcome::UncaughtException) = outcome {
            writeln!(diag, "Uncaught exception in {}.{}", entry.class, entry.method)
        } else {
            Ok(())
        };
        // No early return while the VM is running: shut down first, then
        // report errors in precedence order.
        let shutdown = vm.shut_down();

        let outcome = outcome?;
        described?;
        shutdown?;
        Ok(outcome)
    }
}

//! JVM capability traits and their in-crate fakes.
//!
//! The production implementation lives in the `conquer-jvm` crate; the fakes
//! here are used for testing and as a placeholder where no real VM should be
//! started.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::abi::EntryPoint;
use crate::config::Configuration;
use crate::error::{LaunchError, Result};
use crate::options::OptionVector;

/// How an entry-point invocation that reached managed code ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The entry method returned with no pending exception.
    Completed,
    /// The entry method ended with an uncaught exception. Described to the
    /// diagnostic stream; not a launch failure.
    UncaughtException,
}

/// Loads the JVM shared library and resolves its creation symbol.
pub trait JvmLoader {
    fn load(&self, config: &Configuration) -> Result<Box<dyn JvmLibrary>>;
}

/// A loaded JVM library with its creation function resolved.
pub trait JvmLibrary {
    /// Starts a VM with the given options. A non-success creation status maps
    /// to [`LaunchError::RuntimeCreation`] carrying the numeric status; no VM
    /// object exists on that path.
    fn create_vm(&self, options: &OptionVector<'_>) -> Result<Box<dyn Jvm>>;
}

/// A running VM, owned until shut down.
pub trait Jvm {
    /// Resolves and synchronously invokes the entry method. Blocks for the
    /// lifetime of the hosted application.
    fn invoke_entry(&mut self, entry: &EntryPoint) -> Result<EntryOutcome>;

    /// Waits for remaining managed threads and destroys the VM.
    fn shut_down(self: Box<Self>) -> Result<()>;
}

/// Observation log shared by the fake VM family.
#[derive(Debug, Default)]
pub struct FakeVmLog {
    pub loads: AtomicUsize,
    pub creations: AtomicUsize,
    pub invocations: AtomicUsize,
    pub destructions: AtomicUsize,
    /// Option strings passed to the most recent creation call.
    pub seen_options: Mutex<Vec<String>>,
    /// Entry points passed to invocation, in call order.
    pub seen_entries: Mutex<Vec<EntryPoint>>,
}

impl FakeVmLog {
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn creations(&self) -> usize {
        self.creations.load(Ordering::SeqCst)
    }

    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }

    pub fn destructions(&self) -> usize {
        self.destructions.load(Ordering::SeqCst)
    }
}

/// Scripted loader; counts every call and never touches a real library.
pub struct FakeJvmLoader {
    log: Arc<FakeVmLog>,
    fail_load: bool,
    creation_status: Option<i32>,
    fail_entry: bool,
    entry_outcome: EntryOutcome,
}

impl FakeJvmLoader {
    pub fn new() -> Self {
        FakeJvmLoader {
            log: Arc::new(FakeVmLog::default()),
            fail_load: false,
            creation_status: None,
            fail_entry: false,
            entry_outcome: EntryOutcome::Completed,
        }
    }

    /// Scripts a library-load failure.
    pub fn failing_load(mut self) -> Self {
        self.fail_load = true;
        self
    }

    /// Scripts a non-success creation status.
    pub fn failing_creation(mut self, status: i32) -> Self {
        self.creation_status = Some(status);
        self
    }

    /// Scripts an entry-resolution failure inside the running VM.
    pub fn failing_entry(mut self) -> Self {
        self.fail_entry = true;
        self
    }

    /// Scripts how the entry invocation ends.
    pub fn with_entry_outcome(mut self, outcome: EntryOutcome) -> Self {
        self.entry_outcome = outcome;
        self
    }

    /// The log this loader and everything it produces writes to.
    pub fn log(&self) -> Arc<FakeVmLog> {
        Arc::clone(&self.log)
    }
}

impl Default for FakeJvmLoader {
    fn default() -> Self {
        FakeJvmLoader::new()
    }
}

impl JvmLoader for FakeJvmLoader {
    fn load(&self, _config: &Configuration) -> Result<Box<dyn JvmLibrary>> {
        self.log.loads.fetch_add(1, Ordering::SeqCst);
        if self.fail_load {
            return Err(LaunchError::LibraryLoad {
                path: PathBuf::from("fake-jvm"),
                reason: "scripted load failure".to_owned(),
            });
        }
        Ok(Box::new(FakeJvmLibrary {
            log: Arc::clone(&self.log),
            creation_status: self.creation_status,
            fail_entry: self.fail_entry,
            entry_outcome: self.entry_outcome,
        }))
    }
}

/// Library handle produced by [`FakeJvmLoader`]; snapshots the option strings
/// passed to creation.
pub struct FakeJvmLibrary {
    log: Arc<FakeVmLog>,
    creation_status: Option<i32>,
    fail_entry: bool,
    entry_outcome: EntryOutcome,
}

impl JvmLibrary for FakeJvmLibrary {
    fn create_vm(&self, options: &OptionVector<'_>) -> Result<Box<dyn Jvm>> {
        self.log.creations.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut seen) = self.log.seen_options.lock() {
            *seen = options.iter().map(|slot| slot.as_str().to_owned()).collect();
        }
        if let Some(status) = self.creation_status {
            return Err(LaunchError::RuntimeCreation { status });
        }
        Ok(Box::new(FakeJvm {
            log: Arc::clone(&self.log),
            fail_entry: self.fail_entry,
            entry_outcome: self.entry_outcome,
        }))
    }
}

/// VM produced by [`FakeJvmLibrary`].
pub struct FakeJvm {
    log: Arc<FakeVmLog>,
    fail_entry: bool,
    entry_outcome: EntryOutcome,
}

impl Jvm for FakeJvm {
    fn invoke_entry(&mut self, entry: &EntryPoint) -> Result<EntryOutcome> {
        self.log.invocations.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut seen) = self.log.seen_entries.lock() {
            seen.push(entry.clone());
        }
        if self.fail_entry {
            return Err(LaunchError::EntryClassMissing {
                class: entry.class.clone(),
            });
        }
        Ok(self.entry_outcome)
    }

    fn shut_down(self: Box<Self>) -> Result<()> {
        self.log.destructions.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

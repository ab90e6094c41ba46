//! Error types for the launch pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for launcher operations
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Could not load the JVM library {path:?}: {reason}")]
    LibraryLoad { path: PathBuf, reason: String },

    #[error("Could not resolve symbol {symbol}: {reason}")]
    SymbolResolve {
        symbol: &'static str,
        reason: String,
    },

    #[error("Couldn't create JVM: {status}")]
    RuntimeCreation { status: i32 },

    #[error("Interior NUL byte in a string passed to the VM: {text:?}")]
    InvalidOption { text: String },

    #[error("Entry class {class} not found in the running JVM")]
    EntryClassMissing { class: String },

    #[error("Entry method {class}.{method}{signature} not found")]
    EntryMethodMissing {
        class: String,
        method: String,
        signature: String,
    },

    #[error("Could not construct the entry argument array: {reason}")]
    EntryArguments { reason: String },

    #[error("DestroyJavaVM failed with status {status}")]
    RuntimeShutdown { status: i32 },

    #[error("Diagnostic stream failure: {0}")]
    Diagnostics(#[from] std::io::Error),
}

/// Convenient Result type
pub type Result<T> = std::result::Result<T, LaunchError>;

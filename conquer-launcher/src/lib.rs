//! In-process JVM bootstrap for the Conquer game.
//!
//! The pipeline assembles a classpath from bundled archives, caller roots,
//! scanned archive directories and fixed asset paths, builds the startup
//! option vector, loads a JVM library through an injected capability,
//! invokes `org/jel/gui/Intro.main` and tears the VM down, releasing the
//! option vector exactly once on every exit path.
//!
//! The production JVM capability lives in the `conquer-jvm` crate; the
//! command-line binary in `conquer-launcher-cli`.

#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod abi;
pub mod bootstrap;
pub mod classpath;
pub mod config;
pub mod error;
pub mod options;
pub mod platform;
pub mod scan;
pub mod vm;

pub use abi::EntryPoint;
pub use bootstrap::Bootstrapper;
pub use classpath::ClasspathBuilder;
pub use config::Configuration;
pub use error::{LaunchError, Result};
pub use options::{LaunchOption, OptionVector};
pub use vm::{EntryOutcome, Jvm, JvmLibrary, JvmLoader};

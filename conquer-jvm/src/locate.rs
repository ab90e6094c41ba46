//! JVM shared-library discovery.

use std::env;
use std::path::{Path, PathBuf};

use conquer_launcher::config::Configuration;

/// Platform file name of the JVM shared library.
#[cfg(target_os = "windows")]
pub const JVM_LIBRARY_NAME: &str = "jvm.dll";
#[cfg(target_os = "macos")]
pub const JVM_LIBRARY_NAME: &str = "libjvm.dylib";
#[cfg(not(any(target_os = "windows", target_os = "macos")))]
pub const JVM_LIBRARY_NAME: &str = "libjvm.so";

/// JDK-relative directories that may hold the library, current layouts
/// first, legacy `jre/` layouts last.
#[cfg(target_os = "windows")]
const JDK_SUBDIRS: [&str; 2] = [r"bin\server", r"bin\client"];
#[cfg(not(target_os = "windows"))]
const JDK_SUBDIRS: [&str; 4] = [
    "lib/server",
    "lib/client",
    "jre/lib/server",
    "jre/lib/client",
];

/// Candidate library paths under one JDK root, in probe order.
pub fn candidates_under(java_home: &Path) -> Vec<PathBuf> {
    JDK_SUBDIRS
        .iter()
        .map(|subdir| java_home.join(subdir).join(JVM_LIBRARY_NAME))
        .collect()
}

/// Resolves the library to load: the explicit configuration override first,
/// then the first existing candidate under `JAVA_HOME`, then the bare
/// library name for the system loader's default search path.
pub fn locate_runtime_library(config: &Configuration) -> PathBuf {
    let java_home = env::var_os("JAVA_HOME").map(PathBuf::from);
    locate_with_home(config, java_home.as_deref())
}

fn locate_with_home(config: &Configuration, java_home: Option<&Path>) -> PathBuf {
    if let Some(path) = &config.runtime_library {
        return path.clone();
    }
    if let Some(home) = java_home {
        for candidate in candidates_under(home) {
            if candidate.is_file() {
                return candidate;
            }
        }
    }
    PathBuf::from(JVM_LIBRARY_NAME)
}

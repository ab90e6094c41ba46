//! Caller-supplied launch configuration.

use std::path::PathBuf;

/// Input to one launch.
///
/// Read-only to the pipeline: option strings stay owned by this value and are
/// only borrowed into the option vector, classpath roots are copied into the
/// assembled classpath in the order given.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    /// Extra VM options, appended after the fixed launcher options.
    pub options: Vec<String>,
    /// Extra classpath root directories, in precedence order.
    pub classpaths: Vec<String>,
    /// Directory holding this installation's `libs/` tree.
    pub base_directory: PathBuf,
    /// Explicit JVM shared-library path; `None` selects discovery.
    pub runtime_library: Option<PathBuf>,
}

impl Configuration {
    /// Configuration with no extra options or roots, anchored at `base`.
    pub fn at_base<P: Into<PathBuf>>(base: P) -> Self {
        Configuration {
            base_directory: base.into(),
            ..Configuration::default()
        }
    }
}

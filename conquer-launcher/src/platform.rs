//! Platform path providers for the fixed classpath sources.

use std::env;
use std::path::{Path, PathBuf};

/// Fixed, platform-conditional classpath sources plus the path-list
/// separator.
///
/// One implementation per supported install layout; both compile on every
/// host so the assembly algorithm can be exercised against either.
pub trait PlatformPaths {
    /// Bundled application archives, absolute paths in fixed order.
    fn bundled_archives(&self) -> Vec<String>;

    /// Plugin and extension directories scanned for extra archives.
    fn plugin_dirs(&self) -> Vec<PathBuf>;

    /// System-wide asset directories appended after the archives.
    fn system_asset_dirs(&self) -> Vec<String>;

    /// Separator between classpath entries.
    fn path_list_separator(&self) -> char;
}

/// The `/usr/share` layout installed by the Unix packages.
#[derive(Debug, Default)]
pub struct UnixPaths;

impl PlatformPaths for UnixPaths {
    fn bundled_archives(&self) -> Vec<String> {
        vec![
            "/usr/share/java/Conquer.jar".to_owned(),
            "/usr/share/java/Conquer_frontend.jar".to_owned(),
        ]
    }

    fn plugin_dirs(&self) -> Vec<PathBuf> {
        vec![
            PathBuf::from("/usr/share/java/conquer/plugins"),
            PathBuf::from("/usr/share/java/conquer/strategies"),
        ]
    }

    fn system_asset_dirs(&self) -> Vec<String> {
        vec![
            "/usr/share/conquer/music".to_owned(),
            "/usr/share/conquer/sounds".to_owned(),
            "/usr/share/conquer/images".to_owned(),
        ]
    }

    fn path_list_separator(&self) -> char {
        ':'
    }
}

/// The Program Files layout targeted by the Windows installer.
///
/// The install root comes from the `ProgramFiles` environment variable, the
/// same special folder the installer writes to. No plugin or system asset
/// directories exist in this layout.
#[derive(Debug, Default)]
pub struct WindowsPaths;

impl WindowsPaths {
    fn program_files() -> String {
        env::var("ProgramFiles").unwrap_or_else(|_| r"C:\Program Files".to_owned())
    }
}

impl PlatformPaths for WindowsPaths {
    fn bundled_archives(&self) -> Vec<String> {
        let programs = WindowsPaths::program_files();
        vec![
            format!(r"{programs}\Conquer\Conquer.jar"),
            format!(r"{programs}\Conquer\Conquer_frontend.jar"),
        ]
    }

    fn plugin_dirs(&self) -> Vec<PathBuf> {
        Vec::new()
    }

    fn system_asset_dirs(&self) -> Vec<String> {
        Vec::new()
    }

    fn path_list_separator(&self) -> char {
        ';'
    }
}

/// Path provider for the platform this launcher was built for.
pub fn host_paths() -> Box<dyn PlatformPaths> {
    #[cfg(windows)]
    {
        Box::new(WindowsPaths)
    }
    #[cfg(not(windows))]
    {
        Box::new(UnixPaths)
    }
}

/// Directory anchoring relative resource lookup: the directory containing
/// the launcher executable, falling back to the current directory.
pub fn default_base_directory() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_layout_is_the_packaged_share_tree() {
        let paths = UnixPaths;
        assert_eq!(paths.bundled_archives()[0], "/usr/share/java/Conquer.jar");
        assert_eq!(paths.plugin_dirs().len(), 2);
        assert_eq!(paths.system_asset_dirs().len(), 3);
        assert_eq!(paths.path_list_separator(), ':');
    }

    #[test]
    fn test_windows_layout_has_no_shared_directories() {
        let paths = WindowsPaths;
        let archives = paths.bundled_archives();
        assert!(archives[0].ends_with(r"\Conquer\Conquer.jar"));
        assert!(archives[1].ends_with(r"\Conquer\Conquer_frontend.jar"));
        assert!(paths.plugin_dirs().is_empty());
        assert!(paths.system_asset_dirs().is_empty());
        assert_eq!(paths.path_list_separator(), ';');
    }

    #[test]
    fn test_default_base_directory_is_never_empty() {
        let base = default_base_directory();
        assert!(!base.as_os_str().is_empty());
    }
}

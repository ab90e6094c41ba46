//! Classpath assembly from the five ordered sources.

use std::path::Path;

use crate::abi::{
    ARCHIVE_SUFFIX, ASSET_SUBDIRS, CLASSPATH_PROPERTY, CURRENT_DIR_ENTRY, LIB_SUBDIR,
};
use crate::config::Configuration;
use crate::platform::PlatformPaths;
use crate::scan::DirectoryLister;

/// Assembles the classpath for one launch.
///
/// Entry order is fixed: bundled archives, caller roots, archives found in
/// `<base>/libs/`, archives found in the platform plugin directories, system
/// asset directories, per-installation asset directories, and the final `.`
/// fallback. Order inside one scanned directory is whatever the lister
/// reports, which the OS does not guarantee to be stable.
pub struct ClasspathBuilder<'a> {
    config: &'a Configuration,
    platform: &'a dyn PlatformPaths,
    lister: &'a dyn DirectoryLister,
}

impl<'a> ClasspathBuilder<'a> {
    pub fn new(
        config: &'a Configuration,
        platform: &'a dyn PlatformPaths,
        lister: &'a dyn DirectoryLister,
    ) -> Self {
        ClasspathBuilder {
            config,
            platform,
            lister,
        }
    }

    /// The ordered entry list, one string per classpath element.
    pub fn entries(&self) -> Vec<String> {
        let libs_dir = self.config.base_directory.join(LIB_SUBDIR);

        let mut entries = self.platform.bundled_archives();
        for root in &self.config.classpaths {
            entries.push(format!("{root}/"));
        }
        self.append_archives(&mut entries, &libs_dir);
        for dir in self.platform.plugin_dirs() {
            self.append_archives(&mut entries, &dir);
        }
        entries.extend(self.platform.system_asset_dirs());
        for asset in ASSET_SUBDIRS {
            entries.push(format!("{}/{asset}", libs_dir.display()));
        }
        entries.push(CURRENT_DIR_ENTRY.to_owned());
        entries
    }

    /// The full `-Djava.class.path=` property string, entries joined with the
    /// platform path-list separator.
    pub fn build(&self) -> String {
        let separator = self.platform.path_list_separator().to_string();
        format!("{CLASSPATH_PROPERTY}{}", self.entries().join(&separator))
    }

    /// Appends every archive in `dir`, in listing order. A missing or
    /// unreadable directory contributes nothing.
    fn append_archives(&self, entries: &mut Vec<String>, dir: &Path) {
        let Ok(listing) = self.lister.list(dir) else {
            return;
        };
        for entry in listing {
            if entry.is_file && entry.name.ends_with(ARCHIVE_SUFFIX) {
                entries.push(format!("{}/{}", dir.display(), entry.name));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::platform::UnixPaths;
    use crate::scan::{FixedDirectoryLister, ScanEntry};

    fn libs_listing(entries: Vec<ScanEntry>) -> FixedDirectoryLister {
        FixedDirectoryLister::new().with_listing("/opt/conquer/libs", entries)
    }

    #[rstest]
    #[case("x.jar", true)]
    #[case("x.JAR", false)]
    #[case("ajar", false)]
    #[case(".jar", true)]
    #[case("x.jar.bak", false)]
    #[case("readme.txt", false)]
    fn test_archive_suffix_filter_is_case_sensitive_and_exact(
        #[case] name: &str,
        #[case] included: bool,
    ) {
        let config = Configuration::at_base("/opt/conquer");
        let lister = libs_listing(vec![ScanEntry::file(name)]);
        let builder = ClasspathBuilder::new(&config, &UnixPaths, &lister);

        let entry = format!("/opt/conquer/libs/{name}");
        assert_eq!(
            builder.entries().contains(&entry),
            included,
            "{name} inclusion"
        );
    }

    #[test]
    fn test_directories_named_like_archives_are_skipped() {
        let config = Configuration::at_base("/opt/conquer");
        let lister = libs_listing(vec![ScanEntry::dir("fake.jar"), ScanEntry::file("real.jar")]);
        let builder = ClasspathBuilder::new(&config, &UnixPaths, &lister);

        let entries = builder.entries();
        assert!(!entries.contains(&"/opt/conquer/libs/fake.jar".to_owned()));
        assert!(entries.contains(&"/opt/conquer/libs/real.jar".to_owned()));
    }

    #[test]
    fn test_plugin_entries_are_joined_with_a_separator() {
        let config = Configuration::at_base("/opt/conquer");
        let lister = FixedDirectoryLister::new()
            .with_listing("/usr/share/java/conquer/plugins", vec![ScanEntry::file("p.jar")]);
        let builder = ClasspathBuilder::new(&config, &UnixPaths, &lister);

        assert!(builder
            .entries()
            .contains(&"/usr/share/java/conquer/plugins/p.jar".to_owned()));
    }
}

//! The contract with the JVM and the hosted application.
//!
//! Everything the runtime observes byte-for-byte lives here: the classpath
//! property syntax, the mandatory flags, the entry point coordinates and the
//! creation symbol. Changing any value changes what the hosted jars see.

/// Property prefix the JVM parses for the application classpath.
pub const CLASSPATH_PROPERTY: &str = "-Djava.class.path=";

/// Preview-feature flag required by the Conquer jars.
pub const ENABLE_PREVIEW_FLAG: &str = "--enable-preview";

/// Flag enabling detailed code context in runtime exception messages.
pub const SHOW_CODE_DETAILS_FLAG: &str = "-XX:+ShowCodeDetailsInExceptionMessages";

/// Launcher-provided option slots preceding the caller's options
/// (classpath plus the two fixed flags).
pub const FIXED_OPTION_COUNT: usize = 3;

/// Case-sensitive filename suffix marking an archive eligible for the classpath.
pub const ARCHIVE_SUFFIX: &str = ".jar";

/// Subdirectory of the base directory scanned for archives and assets.
pub const LIB_SUBDIR: &str = "libs";

/// Asset subdirectories appended to the classpath after all archives.
pub const ASSET_SUBDIRS: [&str; 3] = ["music", "sounds", "images"];

/// Final fallback classpath entry.
pub const CURRENT_DIR_ENTRY: &str = ".";

/// Symbol exported by the JVM library that creates a VM in-process.
pub const CREATE_VM_SYMBOL: &str = "JNI_CreateJavaVM";

/// JNI interface version requested at creation (JNI 10).
pub const RUNTIME_ABI_VERSION: i32 = 0x000a_0000;

/// Unrecognized options are ignored rather than rejected at creation.
pub const IGNORE_UNRECOGNIZED_OPTIONS: bool = true;

/// JVM name of the entry argument array's element class.
pub const STRING_CLASS: &str = "java/lang/String";

/// Coordinates of the static method invoked once the VM is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    pub class: String,
    pub method: String,
    pub signature: String,
}

impl Default for EntryPoint {
    /// The Conquer GUI entry point.
    fn default() -> Self {
        EntryPoint {
            class: "org/jel/gui/Intro".to_owned(),
            method: "main".to_owned(),
            signature: "([Ljava/lang/String;)V".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_abi_version_encodes_jni_10() {
        assert_eq!(RUNTIME_ABI_VERSION, 10 << 16);
    }

    #[test]
    fn test_default_entry_point_is_the_conquer_gui() {
        let entry = EntryPoint::default();
        assert_eq!(entry.class, "org/jel/gui/Intro");
        assert_eq!(entry.method, "main");
        assert_eq!(entry.signature, "([Ljava/lang/String;)V");
    }
}

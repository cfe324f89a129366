//! Root paths for the three data sources a scan reads.

use std::path::PathBuf;

pub const SYS_BLOCK: &str = "/sys/block/";
pub const RUN_UDEV_DATA: &str = "/run/udev/data";
pub const PROC_MOUNTS: &str = "/proc/mounts";

/// Environment variable holding a root directory that overrides any prefix
/// passed by the caller.
pub const CHROOT_ENV: &str = "GHW_CHROOT";

/// Block device tree, udev database and mount table locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub sys_block: PathBuf,
    pub run_udev_data: PathBuf,
    pub proc_mounts: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new("")
    }
}

impl Paths {
    /// Paths on the live host, optionally rooted under `prefix`.
    ///
    /// An empty prefix selects the live host paths. A trailing `/` on the
    /// prefix is ignored.
    pub fn new(prefix: &str) -> Self {
        let prefix = prefix.trim_end_matches('/');
        Self {
            sys_block: PathBuf::from(format!("{prefix}{SYS_BLOCK}")),
            run_udev_data: PathBuf::from(format!("{prefix}{RUN_UDEV_DATA}")),
            proc_mounts: PathBuf::from(format!("{prefix}{PROC_MOUNTS}")),
        }
    }

    /// Like [`Paths::new`], but `override_root` wins over `prefix` when set.
    pub fn with_override(override_root: Option<&str>, prefix: &str) -> Self {
        match override_root {
            Some(root) => Self::new(root),
            None => Self::new(prefix),
        }
    }

    /// Reads [`CHROOT_ENV`] once and resolves the paths from it and `prefix`.
    pub fn from_env(prefix: &str) -> Self {
        let root = std::env::var(CHROOT_ENV).ok();
        Self::with_override(root.as_deref(), prefix)
    }
}

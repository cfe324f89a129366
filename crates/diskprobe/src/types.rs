use serde::Serialize;

/// Placeholder for identity fields that could not be resolved.
pub const UNKNOWN: &str = "unknown";

/// Bytes per sector in the sysfs `size` files.
pub const SECTOR_SIZE: u64 = 512;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// A top-level block device and the partitions found on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Disk {
    pub name: String,
    pub size_bytes: u64,
    pub uuid: String,
    pub partitions: Vec<Partition>,
}

impl Disk {
    /// Full device node path, e.g. `/dev/sda`.
    pub fn device_path(&self) -> String {
        dev_path(&self.name)
    }
}

/// A partition of a [`Disk`].
///
/// `size` is in megabytes (bytes / 1 MiB, truncated).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition {
    pub name: String,
    pub size: u64,
    pub mount_point: String,
    pub uuid: String,
    pub filesystem_label: String,
    pub fs: String,
    pub path: String,
    pub disk: String,
}

impl Partition {
    pub fn is_mounted(&self) -> bool {
        !self.mount_point.is_empty()
    }
}

pub(crate) fn dev_path(name: &str) -> String {
    format!("/dev/{name}")
}

pub(crate) fn bytes_to_mb(bytes: u64) -> u64 {
    bytes / BYTES_PER_MB
}

/// Flattens the partitions of every disk, keeping disk order.
pub fn all_partitions(disks: &[Disk]) -> Vec<&Partition> {
    disks.iter().flat_map(|d| d.partitions.iter()).collect()
}

//! Readers for the per-device files under `/sys/block`.

use crate::error::{ProbeError, ProbeResult};
use crate::types::SECTOR_SIZE;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Name prefix of device-mapper nodes (`dm-0`, `dm-1`, ...).
pub const DM_PREFIX: &str = "dm-";

const LOOP_PREFIX: &str = "loop";

/// `major:minor` pair from a sysfs `dev` file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceNumber {
    pub major: u32,
    pub minor: u32,
}

impl fmt::Display for DeviceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.major, self.minor)
    }
}

impl FromStr for DeviceNumber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| "expected major:minor".to_string())?;
        let major = major.parse().map_err(|e| format!("major: {e}"))?;
        let minor = minor.parse().map_err(|e| format!("minor: {e}"))?;
        Ok(Self { major, minor })
    }
}

/// Lists entry names of a sysfs directory in directory order.
pub fn list_entries(dir: &Path) -> ProbeResult<Vec<String>> {
    let entries = fs::read_dir(dir).map_err(|e| ProbeError::access(dir, e))?;
    Ok(entries
        .flatten()
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect())
}

/// Reads the block device size from `<dev_dir>/size`.
///
/// The `size` file is expressed in 512-byte sectors.
pub fn block_device_size_bytes(dev_dir: &Path) -> ProbeResult<u64> {
    let path = dev_dir.join("size");
    let content = read_file(&path)?;
    let sectors: u64 = content
        .trim()
        .parse()
        .map_err(|e| ProbeError::parse(&path, content.as_str(), e))?;
    Ok(sectors.saturating_mul(SECTOR_SIZE))
}

/// Size in bytes, or 0 when the `size` file is missing or malformed.
pub(crate) fn size_bytes_or_zero(dev_dir: &Path) -> u64 {
    log::debug!("Reading disk size from {}", dev_dir.display());
    match block_device_size_bytes(dev_dir) {
        Ok(size) => {
            log::trace!("Got size {} for {}", size, dev_dir.display());
            size
        }
        Err(err) => {
            log::error!("Failed to read device size: {}", err);
            0
        }
    }
}

/// Reads `<dev_dir>/dev`.
pub fn read_device_number(dev_dir: &Path) -> ProbeResult<DeviceNumber> {
    let path = dev_dir.join("dev");
    let content = read_file(&path)?;
    content
        .parse()
        .map_err(|reason: String| ProbeError::parse(&path, content.trim(), reason))
}

/// Reads the device-mapper UUID from `<dev_dir>/dm/uuid`, trimmed.
pub fn dm_uuid(dev_dir: &Path) -> ProbeResult<String> {
    let path = dev_dir.join("dm").join("uuid");
    Ok(read_file(&path)?.trim().to_string())
}

pub fn is_multipath_device(name: &str) -> bool {
    name.starts_with(DM_PREFIX)
}

pub(crate) fn is_unused_loop(name: &str, size_bytes: u64) -> bool {
    name.starts_with(LOOP_PREFIX) && size_bytes == 0
}

/// Whether a device-mapper UUID names a partition of a multipath map rather
/// than a map of its own, e.g. `part1-mpath-3600...` or `mpath-3600...-part1`.
pub fn is_multipath_partition_uuid(uuid: &str) -> bool {
    uuid.starts_with("part")
        || uuid.contains("-part")
        || (uuid.contains("mpath") && uuid.contains("part"))
}

/// Whether the top-level entry `name` is a partition of a multipath device.
///
/// Only `dm-` entries qualify; an unreadable `dm/uuid` means "no".
pub fn is_multipath_partition(sys_block: &Path, name: &str) -> bool {
    if !is_multipath_device(name) {
        return false;
    }
    match dm_uuid(&sys_block.join(name)) {
        Ok(uuid) => is_multipath_partition_uuid(&uuid),
        Err(err) => {
            log::trace!("No dm uuid for {}: {}", name, err);
            false
        }
    }
}

fn read_file(path: &Path) -> ProbeResult<String> {
    fs::read_to_string(path).map_err(|e| ProbeError::access(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn size_tolerates_whitespace_and_saturates() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("size"), "  41943040 \n").unwrap();
        assert_eq!(block_device_size_bytes(tmp.path()).unwrap(), 21_474_836_480);

        fs::write(tmp.path().join("size"), format!("{}\n", u64::MAX)).unwrap();
        assert_eq!(block_device_size_bytes(tmp.path()).unwrap(), u64::MAX);
    }

    #[test]
    fn block_device_size_bytes_reports_access_and_parse_errors() {
        let tmp = tempdir().unwrap();
        assert!(block_device_size_bytes(tmp.path()).unwrap_err().is_access());

        fs::write(tmp.path().join("size"), "lots\n").unwrap();
        assert!(block_device_size_bytes(tmp.path()).unwrap_err().is_parse());
        assert_eq!(size_bytes_or_zero(tmp.path()), 0);
    }

    #[test]
    fn device_number_parses_and_displays() {
        let dev: DeviceNumber = "253:1\n".parse().unwrap();
        assert_eq!(dev, DeviceNumber { major: 253, minor: 1 });
        assert_eq!(dev.to_string(), "253:1");
        assert!("253".parse::<DeviceNumber>().is_err());
        assert!("a:1".parse::<DeviceNumber>().is_err());
    }

    #[test]
    fn read_device_number_flags_garbage() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("dev"), "nonsense\n").unwrap();
        assert!(read_device_number(tmp.path()).unwrap_err().is_parse());
    }

    #[test]
    fn multipath_partition_uuid_patterns() {
        assert!(is_multipath_partition_uuid("part1-mpath-3600a098"));
        assert!(is_multipath_partition_uuid("mpath-abc-part1"));
        assert!(is_multipath_partition_uuid("LVM-xyz-part2"));
        assert!(is_multipath_partition_uuid("mpathpart"));
        assert!(!is_multipath_partition_uuid("mpath-xyz"));
        assert!(!is_multipath_partition_uuid("CRYPT-LUKS2-abc"));
        assert!(!is_multipath_partition_uuid(""));
    }

    #[test]
    fn is_multipath_partition_requires_dm_prefix_and_uuid() {
        let tmp = tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("dm-1/dm")).unwrap();
        fs::write(tmp.path().join("dm-1/dm/uuid"), "  mpath-abc-part1\n").unwrap();
        fs::create_dir_all(tmp.path().join("dm-2")).unwrap();
        fs::create_dir_all(tmp.path().join("sda/dm")).unwrap();
        fs::write(tmp.path().join("sda/dm/uuid"), "part1\n").unwrap();

        assert!(is_multipath_partition(tmp.path(), "dm-1"));
        assert!(!is_multipath_partition(tmp.path(), "dm-2"));
        assert!(!is_multipath_partition(tmp.path(), "sda"));
    }

    #[test]
    fn unused_loop_only_when_empty() {
        assert!(is_unused_loop("loop0", 0));
        assert!(!is_unused_loop("loop0", 4096));
        assert!(!is_unused_loop("sda", 0));
    }
}

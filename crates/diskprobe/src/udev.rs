//! Reader for the udev runtime database (`/run/udev/data/b<major>:<minor>`).

use crate::error::{ProbeError, ProbeResult};
use crate::sysfs::block::{read_device_number, DeviceNumber};
use crate::types::UNKNOWN;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const ID_FS_LABEL: &str = "ID_FS_LABEL";
pub const ID_FS_TYPE: &str = "ID_FS_TYPE";
pub const ID_PART_ENTRY_UUID: &str = "ID_PART_ENTRY_UUID";
pub const ID_PART_TABLE_UUID: &str = "ID_PART_TABLE_UUID";

/// Properties (`E:` lines) of one udev database record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UdevRecord {
    properties: HashMap<String, String>,
}

impl UdevRecord {
    pub fn parse(content: &str) -> Self {
        let properties = content
            .lines()
            .filter_map(|line| line.strip_prefix("E:"))
            .filter_map(|kv| kv.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self { properties }
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn property_or_unknown(&self, key: &str) -> String {
        self.property(key).unwrap_or(UNKNOWN).to_string()
    }

    pub fn fs_label(&self) -> String {
        self.property_or_unknown(ID_FS_LABEL)
    }

    pub fn fs_type(&self) -> String {
        self.property_or_unknown(ID_FS_TYPE)
    }

    pub fn part_entry_uuid(&self) -> String {
        self.property_or_unknown(ID_PART_ENTRY_UUID)
    }

    pub fn part_table_uuid(&self) -> String {
        self.property_or_unknown(ID_PART_TABLE_UUID)
    }

    pub fn properties(&self) -> &HashMap<String, String> {
        &self.properties
    }
}

/// Reads the record for a block device number.
pub fn udev_info(udev_root: &Path, dev: DeviceNumber) -> ProbeResult<UdevRecord> {
    let path = udev_root.join(format!("b{dev}"));
    log::debug!("Reading udev record {}", path.display());
    let content = fs::read_to_string(&path).map_err(|e| ProbeError::access(&path, e))?;
    Ok(UdevRecord::parse(&content))
}

/// Resolves the record through the `dev` file of `<sys_block>/<disk>[/<partition>]`.
pub fn udev_info_by_name(
    sys_block: &Path,
    udev_root: &Path,
    disk: &str,
    partition: Option<&str>,
) -> ProbeResult<UdevRecord> {
    let mut dev_dir = sys_block.join(disk);
    if let Some(partition) = partition {
        dev_dir.push(partition);
    }
    let dev = read_device_number(&dev_dir)?;
    udev_info(udev_root, dev)
}

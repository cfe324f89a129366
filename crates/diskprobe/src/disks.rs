//! Disk enumeration over the top level of the block device tree.

use crate::partition::PartitionHandler;
use crate::paths::Paths;
use crate::procfs::mounts::MountTable;
use crate::sysfs::block::{is_multipath_partition, is_unused_loop, list_entries, size_bytes_or_zero};
use crate::types::{Disk, UNKNOWN};
use crate::udev::udev_info_by_name;

/// One scan of the host's block devices.
///
/// The mount table is read when the scanner is built and reused for every
/// device. Build a new scanner for a fresh snapshot.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    paths: &'a Paths,
    mounts: MountTable,
}

impl<'a> Scanner<'a> {
    pub fn new(paths: &'a Paths) -> Self {
        Self {
            paths,
            mounts: MountTable::load(&paths.proc_mounts),
        }
    }

    /// Scanner over an already parsed mount table.
    pub fn with_mounts(paths: &'a Paths, mounts: MountTable) -> Self {
        Self { paths, mounts }
    }

    /// Lists the disks and their partitions.
    ///
    /// An unreadable block device root gives an empty list.
    pub fn disks(&self) -> Vec<Disk> {
        let sys_block = &self.paths.sys_block;
        log::debug!("Scanning for disks in {}", sys_block.display());
        let entries = match list_entries(sys_block) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("Failed to list block devices: {}", err);
                return Vec::new();
            }
        };

        let mut disks = Vec::new();
        for name in entries {
            log::debug!("Reading block device {}", name);

            // Picked up later through the holders of the parent map.
            if is_multipath_partition(sys_block, &name) {
                log::debug!("Skipping multipath partition {}", name);
                continue;
            }

            let size_bytes = size_bytes_or_zero(&sys_block.join(&name));
            if is_unused_loop(&name, size_bytes) {
                continue;
            }

            let uuid = self.disk_uuid(&name);
            let handler = PartitionHandler::for_disk(&name);
            let partitions = handler.partitions(self.paths, &self.mounts);

            disks.push(Disk {
                name,
                size_bytes,
                uuid,
                partitions,
            });
        }
        disks
    }

    fn disk_uuid(&self, name: &str) -> String {
        match udev_info_by_name(&self.paths.sys_block, &self.paths.run_udev_data, name, None) {
            Ok(record) => record.part_table_uuid(),
            Err(err) => {
                log::debug!("No udev data for disk {}: {}", name, err);
                UNKNOWN.to_string()
            }
        }
    }
}

/// Scans the block devices under `paths` in one go.
pub fn get_disks(paths: &Paths) -> Vec<Disk> {
    Scanner::new(paths).disks()
}

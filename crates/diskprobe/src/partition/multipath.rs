use crate::paths::Paths;
use crate::procfs::mounts::MountTable;
use crate::sysfs::block::{
    is_multipath_device, is_multipath_partition, list_entries, read_device_number,
    size_bytes_or_zero,
};
use crate::types::{bytes_to_mb, dev_path, Partition};
use crate::udev::udev_info;

/// Partitions of a multipath map: `dm-*` holders of the map whose own
/// `dm/uuid` marks them as partitions.
pub(super) fn partitions(disk: &str, paths: &Paths, mounts: &MountTable) -> Vec<Partition> {
    let holders_dir = paths.sys_block.join(disk).join("holders");
    log::debug!("Reading multipath holders {}", holders_dir.display());
    let holders = match list_entries(&holders_dir) {
        Ok(holders) => holders,
        Err(err) => {
            log::error!("Failed to read holders directory: {}", err);
            return Vec::new();
        }
    };

    let mut out = Vec::new();
    for holder in holders.into_iter().filter(|h| is_multipath_device(h)) {
        // The holder must also be listed at the top level of the tree.
        let top_level = match list_entries(&paths.sys_block) {
            Ok(entries) => entries,
            Err(err) => {
                log::debug!("Could not list block devices for {}: {}", holder, err);
                continue;
            }
        };
        if !top_level.iter().any(|name| *name == holder) {
            log::debug!("No block device entry for holder {}", holder);
            continue;
        }
        if !is_multipath_partition(&paths.sys_block, &holder) {
            log::debug!("Holder {} is not a multipath partition", holder);
            continue;
        }
        log::debug!("Found multipath partition {}", holder);

        let holder_dir = paths.sys_block.join(&holder);
        let size = size_bytes_or_zero(&holder_dir);
        let (mount_point, fs) = mounts.lookup(&holder);

        let dev = match read_device_number(&holder_dir) {
            Ok(dev) => dev,
            Err(err) => {
                log::error!("Failed to read device number: {}", err);
                continue;
            }
        };
        let udev = match udev_info(&paths.run_udev_data, dev) {
            Ok(record) => record,
            Err(err) => {
                log::error!("Failed to get udev info for {}: {}", dev, err);
                continue;
            }
        };

        out.push(Partition {
            size: bytes_to_mb(size),
            mount_point,
            uuid: udev.part_entry_uuid(),
            filesystem_label: udev.fs_label(),
            fs: if fs.is_empty() { udev.fs_type() } else { fs },
            path: dev_path(&holder),
            disk: dev_path(disk),
            name: holder,
        });
    }
    out
}

use crate::paths::Paths;
use crate::procfs::mounts::MountTable;
use crate::sysfs::block::{list_entries, size_bytes_or_zero};
use crate::types::{bytes_to_mb, dev_path, Partition};
use crate::udev::{udev_info_by_name, UdevRecord};

/// Partitions nested as `<sys_block>/<disk>/<disk>N`.
pub(super) fn partitions(disk: &str, paths: &Paths, mounts: &MountTable) -> Vec<Partition> {
    let disk_dir = paths.sys_block.join(disk);
    log::debug!("Reading disk directory {}", disk_dir.display());
    let entries = match list_entries(&disk_dir) {
        Ok(entries) => entries,
        Err(err) => {
            log::error!("Failed to read disk partitions: {}", err);
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter(|name| name.starts_with(disk))
        .map(|name| {
            log::debug!("Reading partition {}", name);
            let size = size_bytes_or_zero(&disk_dir.join(&name));
            let (mount_point, mut fs) = mounts.lookup(&name);

            let udev =
                udev_info_by_name(&paths.sys_block, &paths.run_udev_data, disk, Some(&name))
                    .unwrap_or_else(|err| {
                        log::warn!("No udev data for {}: {}", name, err);
                        UdevRecord::default()
                    });
            if fs.is_empty() {
                fs = udev.fs_type();
            }

            Partition {
                size: bytes_to_mb(size),
                mount_point,
                uuid: udev.part_entry_uuid(),
                filesystem_label: udev.fs_label(),
                fs,
                path: dev_path(&name),
                disk: dev_path(disk),
                name,
            }
        })
        .collect()
}

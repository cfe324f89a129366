//! Partition discovery strategies.
//!
//! Ordinary disks nest their partitions under their own sysfs directory.
//! Multipath maps do not: each partition is a separate top-level `dm-N`
//! entry that shows up in the parent's `holders/` directory.

mod direct;
mod multipath;

use crate::paths::Paths;
use crate::procfs::mounts::MountTable;
use crate::sysfs::block::is_multipath_device;
use crate::types::Partition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartitionHandler<'a> {
    Direct { disk: &'a str },
    Multipath { disk: &'a str },
}

impl<'a> PartitionHandler<'a> {
    /// Picks the strategy from the disk name: `dm-*` is multipath.
    pub fn for_disk(disk: &'a str) -> Self {
        if is_multipath_device(disk) {
            PartitionHandler::Multipath { disk }
        } else {
            PartitionHandler::Direct { disk }
        }
    }

    pub fn partitions(&self, paths: &Paths, mounts: &MountTable) -> Vec<Partition> {
        match self {
            PartitionHandler::Direct { disk } => direct::partitions(disk, paths, mounts),
            PartitionHandler::Multipath { disk } => multipath::partitions(disk, paths, mounts),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_is_chosen_by_name() {
        assert_eq!(
            PartitionHandler::for_disk("dm-0"),
            PartitionHandler::Multipath { disk: "dm-0" }
        );
        assert_eq!(
            PartitionHandler::for_disk("nvme0n1"),
            PartitionHandler::Direct { disk: "nvme0n1" }
        );
    }
}

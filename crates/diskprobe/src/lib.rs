//! Point-in-time discovery of disks and partitions on a Linux host.
//!
//! A scan walks `/sys/block`, reads identity data from the udev runtime
//! database and mount data from `/proc/mounts`. It never writes anything.
//! Every read is best-effort: failures are logged through the `log` facade
//! and the affected field falls back to `0` or [`UNKNOWN`].
//!
//! ```no_run
//! let paths = diskprobe::Paths::from_env("");
//! for disk in diskprobe::get_disks(&paths) {
//!     println!("{} {} bytes", disk.name, disk.size_bytes);
//! }
//! ```

pub mod disks;
pub mod error;
pub mod partition;
pub mod paths;
pub mod procfs;
pub mod sysfs;
pub mod types;
pub mod udev;

pub use disks::{get_disks, Scanner};
pub use error::{ProbeError, ProbeResult};
pub use partition::PartitionHandler;
pub use paths::Paths;
pub use procfs::mounts::MountTable;
pub use types::{all_partitions, Disk, Partition, UNKNOWN};
pub use udev::UdevRecord;

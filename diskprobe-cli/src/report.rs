//! Human readable rendering of a scan.

use diskprobe::{all_partitions, Disk, Partition};
use std::fmt::{self, Write};

const GIB: f64 = (1024 * 1024 * 1024) as f64;

const NOT_MOUNTED: &str = "(not mounted)";

pub fn render(disks: &[Disk]) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, disks)?;
    Ok(out)
}

pub fn write_report<W: Write>(out: &mut W, disks: &[Disk]) -> fmt::Result {
    writeln!(out, "DISKS ({})", disks.len())?;
    writeln!(out, "────────────────────")?;
    for (i, disk) in disks.iter().enumerate() {
        writeln!(out, "  [{}] Name: {}", i + 1, disk.name)?;
        writeln!(
            out,
            "      Size: {:.2} GB ({} bytes)",
            disk.size_bytes as f64 / GIB,
            disk.size_bytes
        )?;
        writeln!(out, "      UUID: {}", disk.uuid)?;
        writeln!(out)?;
    }

    let partitions = all_partitions(disks);
    writeln!(out, "PARTITIONS ({})", partitions.len())?;
    writeln!(out, "─────────────────────────")?;
    for part in partitions {
        write_partition(out, part)?;
    }
    Ok(())
}

fn write_partition<W: Write>(out: &mut W, part: &Partition) -> fmt::Result {
    let mount_point = if part.is_mounted() {
        part.mount_point.as_str()
    } else {
        NOT_MOUNTED
    };
    writeln!(out, "    Name: {}", part.name)?;
    writeln!(out, "    Path: {}", part.path)?;
    writeln!(out, "    Disk: {}", part.disk)?;
    writeln!(out, "    Label: {}", part.filesystem_label)?;
    writeln!(out, "    Mount Point: {}", mount_point)?;
    writeln!(out, "    FS: {}", part.fs)?;
    writeln!(out, "    Size: {} MB", part.size)?;
    writeln!(out)
}

//! Parsing helpers for `/proc/mounts`.

use crate::error::{ProbeError, ProbeResult};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountEntry {
    pub device: String,
    pub mount_point: String,
    pub fs_type: String,
    pub options: Vec<String>,
}

/// Snapshot of the mount table, parsed once per scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountTable {
    entries: Vec<MountEntry>,
}

impl MountTable {
    pub fn parse(content: &str) -> Self {
        Self {
            entries: content.lines().filter_map(parse_mount_entry).collect(),
        }
    }

    pub fn read(path: &Path) -> ProbeResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ProbeError::access(path, e))?;
        Ok(Self::parse(&content))
    }

    /// Reads the mount table, treating an unreadable file as "nothing mounted".
    pub fn load(path: &Path) -> Self {
        log::debug!("Reading mount table {}", path.display());
        Self::read(path).unwrap_or_else(|err| {
            log::warn!("Failed to read mount table: {}", err);
            Self::default()
        })
    }

    /// Returns `(mount_point, fs_type)` for a device, or two empty strings
    /// when it is not mounted. Accepts `/dev/sda1` or just `sda1`.
    pub fn lookup(&self, device: &str) -> (String, String) {
        let device = if device.starts_with("/dev") {
            device.to_string()
        } else {
            format!("/dev/{device}")
        };
        self.entries
            .iter()
            .find(|entry| entry.device == device)
            .map(|entry| (entry.mount_point.clone(), entry.fs_type.clone()))
            .unwrap_or_default()
    }

    pub fn entries(&self) -> &[MountEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_mount_entry(line: &str) -> Option<MountEntry> {
    // <device> <mount point> <fstype> <options> <dump> <pass>
    if !line.starts_with('/') {
        return None;
    }
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return None;
    }
    Some(MountEntry {
        device: fields[0].to_string(),
        mount_point: unescape_mount_path(fields[1]),
        fs_type: fields[2].to_string(),
        options: fields[3].split(',').map(str::to_string).collect(),
    })
}

pub fn unescape_mount_path(raw: &str) -> String {
    raw.replace("\\040", " ")
        .replace("\\011", "\t")
        .replace("\\012", "\n")
        .replace("\\134", "\\")
}

#![allow(dead_code)]

use diskprobe::Paths;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

/// Synthetic host snapshot: `sys/block`, `run/udev/data` and `proc/mounts`
/// under a temporary root.
pub struct Snapshot {
    pub tmp: TempDir,
    pub paths: Paths,
}

impl Snapshot {
    pub fn new() -> Self {
        let tmp = tempdir().unwrap();
        let paths = Paths::new(tmp.path().to_str().unwrap());
        fs::create_dir_all(&paths.sys_block).unwrap();
        fs::create_dir_all(&paths.run_udev_data).unwrap();
        fs::create_dir_all(paths.proc_mounts.parent().unwrap()).unwrap();
        fs::write(&paths.proc_mounts, "").unwrap();
        Self { tmp, paths }
    }

    pub fn root(&self) -> &str {
        self.tmp.path().to_str().unwrap()
    }

    fn dev_dir(&self, rel: &str) -> PathBuf {
        let dir = self.paths.sys_block.join(rel);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    pub fn disk(&self, name: &str, sectors: u64, dev: &str) -> &Self {
        let dir = self.dev_dir(name);
        fs::write(dir.join("size"), format!("{sectors}\n")).unwrap();
        fs::write(dir.join("dev"), format!("{dev}\n")).unwrap();
        self
    }

    pub fn partition(&self, disk: &str, name: &str, sectors: u64, dev: &str) -> &Self {
        let dir = self.dev_dir(&format!("{disk}/{name}"));
        fs::write(dir.join("size"), format!("{sectors}\n")).unwrap();
        fs::write(dir.join("dev"), format!("{dev}\n")).unwrap();
        self
    }

    pub fn dm(&self, name: &str, uuid: &str, sectors: u64, dev: &str) -> &Self {
        self.disk(name, sectors, dev);
        let dir = self.dev_dir(&format!("{name}/dm"));
        fs::write(dir.join("uuid"), format!("{uuid}\n")).unwrap();
        self.dev_dir(&format!("{name}/holders"));
        self
    }

    pub fn holder(&self, parent: &str, holder: &str) -> &Self {
        self.dev_dir(&format!("{parent}/holders/{holder}"));
        self
    }

    pub fn udev(&self, dev: &str, props: &[(&str, &str)]) -> &Self {
        let mut content = String::from("W:4\n");
        for (k, v) in props {
            content.push_str(&format!("E:{k}={v}\n"));
        }
        fs::write(self.paths.run_udev_data.join(format!("b{dev}")), content).unwrap();
        self
    }

    pub fn mount(&self, device: &str, target: &str, fstype: &str) -> &Self {
        let mut content = fs::read_to_string(&self.paths.proc_mounts).unwrap();
        content.push_str(&format!("{device} {target} {fstype} rw,relatime 0 0\n"));
        fs::write(&self.paths.proc_mounts, content).unwrap();
        self
    }
}

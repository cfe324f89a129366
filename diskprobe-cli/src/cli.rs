use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "diskprobe")]
#[command(author, version, about = "Discover disks and partitions on this host")]
pub struct Cli {
    /// Read sysfs, udev data and the mount table from under this directory
    #[arg(long, default_value = "")]
    pub root: String,

    /// Root directory that overrides --root (defaults to $GHW_CHROOT)
    #[arg(long)]
    pub chroot: Option<String>,

    /// Print the disks as JSON instead of a report
    #[arg(long)]
    pub json: bool,

    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: log::LevelFilter,

    /// Shortcut for --log-level debug
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn level(&self) -> log::LevelFilter {
        if self.verbose {
            log::LevelFilter::Debug.max(self.log_level)
        } else {
            self.log_level
        }
    }
}

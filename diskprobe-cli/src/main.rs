use anyhow::{bail, Context};
use clap::Parser;

mod cli;
mod logging;
mod report;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.level());

    let paths = match cli.chroot.as_deref() {
        Some(root) => diskprobe::Paths::with_override(Some(root), &cli.root),
        None => diskprobe::Paths::from_env(&cli.root),
    };
    log::debug!("Using paths {:?}", paths);

    log::info!("Discovering available disks...");
    let disks = diskprobe::get_disks(&paths);
    if disks.is_empty() {
        bail!("no disks found under {}", paths.sys_block.display());
    }
    log::info!(
        "Discovered {} disk(s) with {} partition(s)",
        disks.len(),
        diskprobe::all_partitions(&disks).len()
    );

    if cli.json {
        let json = serde_json::to_string_pretty(&disks).context("serialize disks")?;
        println!("{json}");
    } else {
        print!("{}", report::render(&disks)?);
    }
    Ok(())
}

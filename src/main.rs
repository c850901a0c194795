use anyhow::Result;
use clap::Parser;

use uscget::{commands, core::config::Config};

/// Downloads the current bulk United States Code XML archive and unpacks
/// it next to the executable. Takes no arguments; every run re-fetches
/// the link, the archive, and the extracted tree.
#[derive(Parser)]
#[clap(name = "uscget")]
#[clap(about = "Fetches and unpacks the bulk USC XML archive from uscode.house.gov")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let result = Config::new().and_then(|config| commands::fetch::fetch_bulk_xml(&config));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

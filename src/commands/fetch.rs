use crate::core::{
    config::Config, download::Downloader, progress::DownloadBar, uscode::UscodeClient,
};
use crate::error::Result;
use crate::utils::fs;

/// Runs the whole acquisition in strict sequence: prepare directories,
/// resolve the current bulk ZIP link, download it, extract it. Any
/// failure aborts the run; partial output is left on disk as-is.
pub fn fetch_bulk_xml(config: &Config) -> Result<()> {
    fs::ensure_dir_exists(&config.get_raw_dir())?;
    fs::ensure_dir_exists(&config.get_xml_dir())?;

    let client = UscodeClient::new(&config.site_origin);
    let url = client.resolve_bulk_xml_url()?;
    println!("Found bulk XML ZIP URL: {url}");

    let downloader = Downloader::new();
    let zip_path = config.get_zip_path();
    let mut progress = DownloadBar::new();
    downloader.download_file(&url, &zip_path, &mut progress)?;

    downloader.extract_zip(&zip_path, &config.get_xml_dir())?;

    println!("USC XML download and extraction complete.");
    Ok(())
}

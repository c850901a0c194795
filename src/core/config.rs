use crate::error::{Result, UscGetError};
use std::path::{Path, PathBuf};

/// Fixed values the run needs, computed once at startup and passed
/// explicitly into each step.
#[derive(Debug, Clone)]
pub struct Config {
    pub site_origin: String,
    pub data_dir: PathBuf,
}

pub const SITE_ORIGIN: &str = "https://uscode.house.gov";
pub const DOWNLOAD_PAGE_PATH: &str = "/download/download.shtml";

const ZIP_FILE_NAME: &str = "usc.zip";

impl Config {
    /// Production configuration: the fixed site origin, with data kept in
    /// a `data/` directory next to the executable.
    pub fn new() -> Result<Self> {
        let data_dir = get_exe_dir()?.join("data");

        Ok(Config {
            site_origin: SITE_ORIGIN.to_string(),
            data_dir,
        })
    }

    pub fn with_paths(site_origin: &str, data_dir: &Path) -> Self {
        Config {
            site_origin: site_origin.to_string(),
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// Staging directory the archive is downloaded into.
    pub fn get_raw_dir(&self) -> PathBuf {
        self.data_dir.join("raw")
    }

    /// Destination directory for the extracted XML files.
    pub fn get_xml_dir(&self) -> PathBuf {
        self.data_dir.join("xml")
    }

    pub fn get_zip_path(&self) -> PathBuf {
        self.get_raw_dir().join(ZIP_FILE_NAME)
    }

    pub fn get_download_page_url(&self) -> String {
        format!("{}{}", self.site_origin, DOWNLOAD_PAGE_PATH)
    }
}

fn get_exe_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or(UscGetError::ExeDirectoryNotFound)
}

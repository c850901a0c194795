use crate::core::progress::Progress;
use crate::error::{Result, UscGetError};
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use zip::ZipArchive;

/// Transfer chunk size. The archive is large, so the body is streamed
/// rather than buffered in memory.
const CHUNK_SIZE: usize = 8192;

const UA: &str = concat!("uscget/", env!("CARGO_PKG_VERSION"));

pub struct Downloader {
    client: Client,
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}

impl Downloader {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Streams `url` to `destination`, overwriting any previous file.
    ///
    /// The progress observer is seeded with the Content-Length when the
    /// server sends one and advanced by each chunk written.
    pub fn download_file(
        &self,
        url: &str,
        destination: &Path,
        progress: &mut dyn Progress,
    ) -> Result<()> {
        println!("Downloading {url} to {destination:?}...");

        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut response = self.client.get(url).header(USER_AGENT, UA).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(UscGetError::Network {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut file = File::create(destination)?;
        progress.begin(response.content_length());
        copy_stream(&mut response, &mut file, progress)?;
        progress.finish();

        println!("Download completed successfully.");
        Ok(())
    }

    /// Extracts every entry of the ZIP at `archive_path` into
    /// `destination`, preserving the archive's internal relative paths.
    pub fn extract_zip(&self, archive_path: &Path, destination: &Path) -> Result<()> {
        println!("Unzipping {archive_path:?} to {destination:?}...");

        let file = File::open(archive_path)?;
        let mut archive = ZipArchive::new(file).map_err(|e| UscGetError::Archive {
            path: archive_path.to_path_buf(),
            message: e.to_string(),
        })?;

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i).map_err(|e| UscGetError::Archive {
                path: archive_path.to_path_buf(),
                message: e.to_string(),
            })?;

            // Entries with names that escape the destination are skipped.
            let outpath = match entry.enclosed_name() {
                Some(path) => destination.join(path),
                None => continue,
            };

            if entry.name().ends_with('/') {
                std::fs::create_dir_all(&outpath)?;
            } else {
                if let Some(p) = outpath.parent() {
                    if !p.exists() {
                        std::fs::create_dir_all(p)?;
                    }
                }
                let mut outfile = File::create(&outpath)?;
                std::io::copy(&mut entry, &mut outfile)?;
            }

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Some(mode) = entry.unix_mode() {
                    std::fs::set_permissions(&outpath, std::fs::Permissions::from_mode(mode))?;
                }
            }
        }

        println!("Unzip complete.");
        Ok(())
    }
}

/// Copies `reader` to `writer` in fixed-size chunks, advancing `progress`
/// by each chunk's byte length. Returns the number of bytes written.
pub fn copy_stream(
    reader: &mut dyn Read,
    writer: &mut dyn Write,
    progress: &mut dyn Progress,
) -> Result<u64> {
    let mut buf = [0u8; CHUNK_SIZE];
    let mut written: u64 = 0;

    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        writer.write_all(&buf[..n])?;
        progress.advance(n as u64);
        written += n as u64;
    }

    writer.flush()?;
    Ok(written)
}

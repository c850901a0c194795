use indicatif::{ProgressBar, ProgressStyle};

/// Byte-level progress reporting for the downloader.
///
/// The downloader only talks to this trait; rendering stays out of the
/// transfer loop.
pub trait Progress {
    /// Called once before the first chunk, with the expected total size
    /// when the response declared one.
    fn begin(&mut self, total: Option<u64>);

    fn advance(&mut self, bytes: u64);

    fn finish(&mut self);
}

const BAR_TEMPLATE: &str =
    "{msg} [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})";
const SPINNER_TEMPLATE: &str = "{msg} {spinner} {bytes} ({bytes_per_sec})";

/// Console progress bar; falls back to a spinner when the total size is
/// unknown.
pub struct DownloadBar {
    bar: Option<ProgressBar>,
}

impl DownloadBar {
    pub fn new() -> Self {
        Self { bar: None }
    }
}

impl Default for DownloadBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for DownloadBar {
    fn begin(&mut self, total: Option<u64>) {
        let bar = match total {
            Some(len) => ProgressBar::new(len).with_style(style(BAR_TEMPLATE)),
            None => ProgressBar::new_spinner().with_style(style(SPINNER_TEMPLATE)),
        };
        bar.set_message("Downloading ZIP");
        self.bar = Some(bar);
    }

    fn advance(&mut self, bytes: u64) {
        if let Some(bar) = &self.bar {
            bar.inc(bytes);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish();
        }
    }
}

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_bar())
}

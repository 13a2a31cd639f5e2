//! Progress display while decoding source images

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static LOAD_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "Loading [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over the files of one source directory
///
/// A hidden bar accepts the same calls and draws nothing.
pub struct LoadProgress {
    bar: ProgressBar,
}

impl LoadProgress {
    /// Create a bar for `total` files, drawn only when `visible`
    pub fn new(total: usize, visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(LOAD_STYLE.clone());
            bar
        } else {
            ProgressBar::hidden()
        };
        bar.set_length(total as u64);

        Self { bar }
    }

    /// Show the file currently being decoded
    pub fn start_file(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(display_name);
    }

    /// Count one file as done
    pub fn advance(&self) {
        self.bar.inc(1);
    }

    /// Number of files counted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

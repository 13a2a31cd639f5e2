//! Command-line interface for building one collage from a directory of images

use crate::compose::Composer;
use crate::io::error::Result;
use crate::io::prompt::PromptSession;
use crate::io::source::{DirectorySource, ImageSource};
use crate::layout::OutlineStyle;
use crate::params::{CollageParameters, ParameterCollector};
use clap::Parser;
use log::info;
use std::io::{BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gridcollage")]
#[command(
    author,
    version,
    about = "Assemble a directory of images into a titled grid collage"
)]
/// Command-line arguments for the collage tool
pub struct Cli {
    /// Directory containing the source images (jpg, jpeg, png)
    #[arg(value_name = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// Title drawn in the header band
    #[arg(short, long)]
    pub title: Option<String>,

    /// Grid size as ROWSxCOLS; malformed values keep the default
    #[arg(short, long, value_name = "ROWSxCOLS")]
    pub grid: Option<String>,

    /// Collage size as WIDTHxHEIGHT; malformed values keep the default
    #[arg(short, long, value_name = "WIDTHxHEIGHT")]
    pub size: Option<String>,

    /// Output format (png, jpeg, bmp, ...)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Convert every image to grayscale
    #[arg(long)]
    pub grayscale: bool,

    /// Directory the collage file is written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Font file for the title (defaults to a well-known system font)
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Geometry of the cell outlines
    #[arg(long, value_enum, default_value_t = OutlineStyle::HeaderOffset)]
    pub outline: OutlineStyle,

    /// Ask for each parameter on the terminal before composing
    #[arg(short, long)]
    pub interactive: bool,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter when `RUST_LOG` is unset
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet { "error" } else { "info" }
    }

    /// Feed the command-line values through a collector
    ///
    /// Options that were not given leave the defaults untouched.
    pub fn collector(&self) -> ParameterCollector {
        let mut collector = ParameterCollector::new();
        collector.set_directory(self.directory.clone());
        if let Some(title) = &self.title {
            collector.set_title(Some(title.as_str()));
        }
        if let Some(grid) = &self.grid {
            collector.set_grid(grid);
        }
        collector.set_grayscale(self.grayscale);
        if let Some(size) = &self.size {
            collector.set_canvas_size(size);
        }
        if let Some(format) = &self.format {
            collector.set_format(Some(format.as_str()));
        }
        collector
    }

    /// Parameters described by the command line alone
    pub fn parameters(&self) -> CollageParameters {
        self.collector().finish()
    }

    /// Composer configured from the command line
    pub fn composer(&self) -> Composer {
        Composer::new()
            .with_outline_style(self.outline)
            .with_font(self.font.clone())
    }
}

/// Install the `env_logger` backend with `default_filter` unless `RUST_LOG` overrides it
///
/// Returns `false` if a logger was already installed.
pub fn init_logging(default_filter: &str) -> bool {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .try_init()
        .is_ok()
}

/// Runs one collage request described by the command line
pub struct CollageSession {
    cli: Cli,
}

impl CollageSession {
    /// Create a session for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Compose and save the collage, prompting on the terminal in interactive mode
    ///
    /// # Errors
    ///
    /// Returns an error if no directory was chosen, the layout is impossible,
    /// the directory cannot be read or the collage cannot be saved
    pub fn run(&self) -> Result<PathBuf> {
        let source = DirectorySource::new(self.cli.should_show_progress());
        let stdin = std::io::stdin();
        self.run_with(stdin.lock(), std::io::stderr(), &source)
    }

    /// Same as [`run`](Self::run) with explicit terminal streams and image source
    ///
    /// # Errors
    ///
    /// Returns an error if no directory was chosen, the layout is impossible,
    /// the source cannot be loaded, the terminal fails or the collage cannot be saved
    pub fn run_with<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W,
        source: &impl ImageSource,
    ) -> Result<PathBuf> {
        let mut collector = self.cli.collector();
        if self.cli.interactive {
            PromptSession::new(input, output).collect(&mut collector)?;
        }
        let params = collector.finish();

        let path = self
            .cli
            .composer()
            .create(&params, source, &self.cli.output_dir)?;
        info!("Collage written to {}", path.display());

        Ok(path)
    }
}

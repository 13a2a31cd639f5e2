//! Tests for command-line parsing and the collage session

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gridcollage::CollageError;
    use gridcollage::io::cli::{Cli, CollageSession, init_logging};
    use gridcollage::io::source::ImageSource;
    use gridcollage::layout::{CanvasSize, GridSize, OutlineStyle};
    use image::{DynamicImage, Rgb, RgbImage};
    use std::io::Cursor;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    struct FixedSource(usize);

    impl ImageSource for FixedSource {
        fn load(&self, _directory: &Path) -> gridcollage::Result<Vec<DynamicImage>> {
            Ok(vec![
                DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([90, 90, 90])));
                self.0
            ])
        }
    }

    // Tests CLI parsing with no arguments at all
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.directory, None);
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert_eq!(cli.outline, OutlineStyle::HeaderOffset);
        assert!(!cli.interactive);
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_filter(), "info");

        let params = cli.parameters();
        assert_eq!(params.grid, GridSize::new(2, 2));
        assert_eq!(params.canvas, CanvasSize::new(800, 600));
        assert_eq!(params.format, "png");
    }

    // Tests CLI parsing with every option
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "photos",
            "--title",
            "Summer",
            "--grid",
            "3x4",
            "--size",
            "1200x900",
            "--format",
            "JPEG",
            "--grayscale",
            "--output-dir",
            "out",
            "--font",
            "font.ttf",
            "--outline",
            "cell-bounds",
            "--interactive",
            "--quiet",
        ]);

        assert_eq!(cli.font, Some(PathBuf::from("font.ttf")));
        assert_eq!(cli.outline, OutlineStyle::CellBounds);
        assert!(cli.interactive);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_filter(), "error");

        let params = cli.parameters();
        assert_eq!(params.directory, Some(PathBuf::from("photos")));
        assert_eq!(params.title, "Summer");
        assert_eq!(params.grid, GridSize::new(3, 4));
        assert_eq!(params.canvas, CanvasSize::new(1200, 900));
        assert_eq!(params.format, "JPEG");
        assert!(params.grayscale);
    }

    // Tests short flags
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "-t", "T", "-g", "1x3", "-s", "600x400", "-f", "bmp", "-q"]);

        let params = cli.parameters();
        assert_eq!(params.title, "T");
        assert_eq!(params.grid, GridSize::new(1, 3));
        assert_eq!(params.canvas, CanvasSize::new(600, 400));
        assert_eq!(params.format, "bmp");
        assert!(cli.quiet);
    }

    // Tests that malformed numeric options fall back to the defaults
    // Verified by rejecting the whole command line on malformed grids
    #[test]
    fn test_cli_malformed_numbers_keep_defaults() {
        let cli = Cli::parse_from(["program", "--grid", "three", "--size", "800x"]);

        let params = cli.parameters();
        assert_eq!(params.grid, GridSize::new(2, 2));
        assert_eq!(params.canvas, CanvasSize::new(800, 600));
    }

    // Tests a non-interactive session writing into the output directory
    #[test]
    fn test_session_writes_collage() {
        let output = TempDir::new().unwrap();
        let cli = Cli::parse_from([
            "program",
            "photos",
            "--quiet",
            "--output-dir",
            output.path().to_str().unwrap(),
        ]);

        let path = CollageSession::new(cli)
            .run_with(Cursor::new(Vec::new()), Vec::new(), &FixedSource(6))
            .unwrap();

        assert_eq!(path, output.path().join("collage.png"));
        assert!(path.exists());
    }

    // Tests that a session without a directory writes nothing
    // Verified by substituting the current directory
    #[test]
    fn test_session_missing_directory() {
        let output = TempDir::new().unwrap();
        let cli = Cli::parse_from(["program", "-o", output.path().to_str().unwrap()]);

        let result =
            CollageSession::new(cli).run_with(Cursor::new(Vec::new()), Vec::new(), &FixedSource(2));

        assert!(matches!(result, Err(CollageError::MissingDirectory)));
        assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
    }

    // Tests that interactive answers override command-line values
    #[test]
    fn test_session_interactive() {
        let output = TempDir::new().unwrap();
        let cli = Cli::parse_from([
            "program",
            "--interactive",
            "--quiet",
            "-o",
            output.path().to_str().unwrap(),
        ]);
        let answers = "photos\n\n1x1\nno\n300x200\nbmp\n";

        let path = CollageSession::new(cli)
            .run_with(Cursor::new(answers.as_bytes()), Vec::new(), &FixedSource(3))
            .unwrap();

        assert_eq!(path, output.path().join("collage.bmp"));
        let reopened = image::open(&path).unwrap();
        assert_eq!((reopened.width(), reopened.height()), (300, 200));
    }

    // Tests that installing the logger twice reports the second attempt
    #[test]
    fn test_init_logging_once() {
        init_logging("error");

        assert!(!init_logging("error"));
    }
}

//! Tests for collage composition, grayscale handling and the create workflow

#[cfg(test)]
mod tests {
    use gridcollage::io::source::ImageSource;
    use gridcollage::layout::{CanvasSize, GridSize, OutlineStyle};
    use gridcollage::{CollageError, CollageParameters, Composer};
    use image::{ColorType, DynamicImage, GenericImageView, Rgb, RgbImage};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const FIXTURE_FONT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/DejaVuSans.ttf");

    const COLORS: [[u8; 3]; 5] = [
        [220, 20, 20],
        [20, 220, 20],
        [20, 20, 220],
        [220, 220, 20],
        [20, 220, 220],
    ];

    struct FixedSource(Vec<DynamicImage>);

    impl ImageSource for FixedSource {
        fn load(&self, _directory: &Path) -> gridcollage::Result<Vec<DynamicImage>> {
            Ok(self.0.clone())
        }
    }

    fn solid_images(count: usize) -> Vec<DynamicImage> {
        COLORS
            .iter()
            .cycle()
            .take(count)
            .map(|color| DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 48, Rgb(*color))))
            .collect()
    }

    fn params_with_directory() -> CollageParameters {
        CollageParameters {
            directory: Some(PathBuf::from("unused")),
            ..CollageParameters::default()
        }
    }

    fn assert_close(actual: [u8; 4], expected: [u8; 3]) {
        for (a, e) in actual.iter().zip(expected) {
            assert!(a.abs_diff(e) <= 2, "pixel {actual:?} != {expected:?}");
        }
    }

    // Tests that each image lands in its cell on the reference layout
    // Verified by pasting every image at the first origin
    #[test]
    fn test_compose_places_images() {
        let collage = Composer::new()
            .compose(&params_with_directory(), solid_images(4))
            .unwrap();

        assert_eq!(collage.placed, 4);
        assert_eq!(collage.dropped, 0);
        assert_eq!(collage.image.dimensions(), (800, 600));
        assert_close(collage.image.get_pixel(200, 180).0, COLORS[0]);
        assert_close(collage.image.get_pixel(600, 180).0, COLORS[1]);
        assert_close(collage.image.get_pixel(200, 450).0, COLORS[2]);
        assert_close(collage.image.get_pixel(600, 450).0, COLORS[3]);
    }

    // Tests that the fifth image is dropped silently
    #[test]
    fn test_compose_truncates() {
        let collage = Composer::new()
            .compose(&params_with_directory(), solid_images(5))
            .unwrap();

        assert_eq!(collage.placed, 4);
        assert_eq!(collage.dropped, 1);
    }

    // Tests outlines and untouched background
    #[test]
    fn test_compose_outline_and_background() {
        let collage = Composer::new()
            .compose(&params_with_directory(), solid_images(1))
            .unwrap();

        assert_close(collage.image.get_pixel(5, 55).0, [0, 0, 0]);
        assert_close(collage.image.get_pixel(200, 56).0, [0, 0, 0]);
        assert_close(collage.image.get_pixel(600, 180).0, [255, 255, 255]);
    }

    // Tests that an untitled collage leaves the header band white
    // Verified by drawing outlines from the canvas top
    #[test]
    fn test_header_band_empty_without_title() {
        let collage = Composer::new()
            .compose(&params_with_directory(), solid_images(4))
            .unwrap();
        let rgb = collage.image.to_rgb8();

        assert!(!collage.title_rendered);
        for y in 0..50 {
            for x in 0..800 {
                assert_eq!(*rgb.get_pixel(x, y), Rgb([255, 255, 255]));
            }
        }
    }

    // Tests the title is drawn inside the header band from its top-left anchor
    // Verified by anchoring the title at the canvas origin
    #[test]
    fn test_title_rendered_in_header_band() {
        let params = CollageParameters {
            title: "Test".to_string(),
            ..params_with_directory()
        };

        let collage = Composer::new()
            .with_font(Some(PathBuf::from(FIXTURE_FONT)))
            .compose(&params, solid_images(4))
            .unwrap();
        let rgb = collage.image.to_rgb8();

        assert!(collage.title_rendered);
        let ink: Vec<_> = (0..50)
            .flat_map(|y| (0..800).map(move |x| (x, y)))
            .filter(|&(x, y)| rgb.get_pixel(x, y).0[0] < 128)
            .collect();
        assert!(!ink.is_empty());
        assert!(ink.iter().all(|&(x, y)| (5..200).contains(&x) && y >= 10));
    }

    // Tests that a failing font only omits the title
    // Verified by propagating the font error
    #[test]
    fn test_font_failure_keeps_composing() {
        let params = CollageParameters {
            title: "Test".to_string(),
            ..params_with_directory()
        };

        let collage = Composer::new()
            .with_font(Some(PathBuf::from("/nonexistent/title.ttf")))
            .compose(&params, solid_images(4))
            .unwrap();

        assert!(!collage.title_rendered);
        assert_eq!(collage.placed, 4);
    }

    // Tests grayscale output mode with unchanged layout
    // Verified by skipping the final luma conversion
    #[test]
    fn test_grayscale_mode() {
        let params = CollageParameters {
            grayscale: true,
            ..params_with_directory()
        };

        let gray = Composer::new().compose(&params, solid_images(5)).unwrap();
        let color = Composer::new()
            .compose(&params_with_directory(), solid_images(5))
            .unwrap();

        assert_eq!(gray.image.color(), ColorType::L8);
        assert_eq!(color.image.color(), ColorType::Rgb8);
        assert_eq!(gray.image.dimensions(), (800, 600));
        assert_eq!(gray.placed, color.placed);
        assert_eq!(gray.dropped, color.dropped);
    }

    // Tests which outline geometry reaches below the last row
    // Verified by ignoring the selected outline style
    #[test]
    fn test_outline_styles_differ() {
        let params = CollageParameters {
            grid: GridSize::new(7, 1),
            canvas: CanvasSize::new(100, 133),
            ..params_with_directory()
        };

        let historical = Composer::new()
            .with_outline_style(OutlineStyle::HeaderOffset)
            .compose(&params, solid_images(7))
            .unwrap();
        let bounded = Composer::new()
            .with_outline_style(OutlineStyle::CellBounds)
            .compose(&params, solid_images(7))
            .unwrap();

        assert_close(historical.image.get_pixel(50, 132).0, [255, 255, 255]);
        assert_close(bounded.image.get_pixel(50, 132).0, [0, 0, 0]);
    }

    // Tests that impossible geometry is rejected before composing
    #[test]
    fn test_compose_rejects_tiny_canvas() {
        let params = CollageParameters {
            canvas: CanvasSize::new(800, 40),
            ..params_with_directory()
        };

        let result = Composer::new().compose(&params, solid_images(1));
        assert!(matches!(result, Err(CollageError::Layout { .. })));
    }

    // Tests that a missing directory aborts before writing anything
    // Verified by defaulting to the current directory
    #[test]
    fn test_create_without_directory() {
        let output = TempDir::new().unwrap();
        let source = FixedSource(solid_images(2));

        let result = Composer::new().create(&CollageParameters::default(), &source, output.path());

        assert!(matches!(result, Err(CollageError::MissingDirectory)));
        assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
    }

    // Tests the full workflow writing collage.png
    #[test]
    fn test_create_writes_file() {
        let output = TempDir::new().unwrap();
        let source = FixedSource(solid_images(3));

        let path = Composer::new()
            .create(&params_with_directory(), &source, output.path())
            .unwrap();

        assert_eq!(path, output.path().join("collage.png"));
        let reopened = image::open(&path).unwrap();
        assert_eq!(reopened.dimensions(), (800, 600));
        assert_eq!(reopened.color(), ColorType::Rgb8);
    }

    // Tests that an unknown format is reported and leaves no file
    #[test]
    fn test_create_unsupported_format() {
        let output = TempDir::new().unwrap();
        let source = FixedSource(solid_images(3));
        let params = CollageParameters {
            format: "xyz".to_string(),
            ..params_with_directory()
        };

        let result = Composer::new().create(&params, &source, output.path());

        assert!(matches!(
            result,
            Err(CollageError::UnsupportedFormat { ref format }) if format == "xyz"
        ));
        assert!(!output.path().join("collage.xyz").exists());
    }
}

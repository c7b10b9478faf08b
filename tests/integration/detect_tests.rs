//! Detection without modification.

use std::fs;

use slide_crop::{
    BorderDetector, CropAxes, CropOptions, CropOutcome, CropPipeline, CropRect, Detection,
    ImageLoader, Pixel, PixelBuffer,
};

use super::test_utils::{slide_image, write_png};

#[test]
fn test_detect_leaves_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(
        dir.path(),
        "slide.png",
        &slide_image(80, 60, CropRect::new(10, 20, 29, 39)),
    );
    let before = fs::read(&path).unwrap();

    let pipeline = CropPipeline::new(CropOptions::default()).unwrap();
    let outcome = pipeline.detect(&path).unwrap();

    assert_eq!(
        outcome,
        CropOutcome::Cropped {
            rect: CropRect::new(7, 17, 32, 42),
            original_width: 80,
            original_height: 60,
        }
    );
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_detect_report_json_shape() {
    let outcome = CropOutcome::Cropped {
        rect: CropRect::new(1, 2, 3, 4),
        original_width: 10,
        original_height: 10,
    };
    let json = serde_json::to_value(outcome).unwrap();

    assert_eq!(json["status"], "cropped");
    assert_eq!(json["rect"]["left"], 1);
    assert_eq!(json["rect"]["bottom"], 4);
    assert_eq!(json["original_width"], 10);
}

#[test]
fn test_detector_on_decoded_slide() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(
        dir.path(),
        "slide.png",
        &slide_image(20, 20, CropRect::new(5, 7, 5, 7)),
    );
    let buffer = ImageLoader::new().load(&fs::read(&path).unwrap()).unwrap();

    let detector = BorderDetector::from_options(&CropOptions::new(CropAxes::Both, 2));
    assert_eq!(
        detector.detect(&buffer),
        Detection::Crop(CropRect::new(3, 5, 7, 9))
    );
}

#[test]
fn test_large_padding_on_corner_pixel() {
    let mut buffer = PixelBuffer::filled(10, 10, Pixel::WHITE).unwrap();
    buffer.set(0, 0, Pixel::BLACK).unwrap();

    let rect = BorderDetector::new(true, true, 5).bounds(&buffer);
    assert_eq!(rect.left, 0);
    assert_eq!(rect.top, 0);
    assert_eq!(rect, CropRect::new(0, 0, 5, 5));
}

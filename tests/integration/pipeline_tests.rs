//! In-place crop tests.

use std::fs;

use image::ImageFormat;

use slide_crop::{CodecError, CropAxes, CropError, CropOptions, CropOutcome, CropPipeline, CropRect};

use super::test_utils::{
    blank_image, encode, is_png, read_rgb, slide_image, write_png, INK, PAPER,
};

fn pipeline(axes: CropAxes, padding: usize) -> CropPipeline {
    CropPipeline::new(CropOptions::new(axes, padding)).unwrap()
}

#[test]
fn test_crop_overwrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(
        dir.path(),
        "slide.png",
        &slide_image(160, 120, CropRect::new(40, 30, 99, 79)),
    );

    let outcome = pipeline(CropAxes::Both, 3).process(&path).unwrap();
    assert_eq!(
        outcome,
        CropOutcome::Cropped {
            rect: CropRect::new(37, 27, 102, 82),
            original_width: 160,
            original_height: 120,
        }
    );

    assert!(is_png(&fs::read(&path).unwrap()));
    let cropped = read_rgb(&path);
    assert_eq!(cropped.dimensions(), (66, 56));
    assert_eq!(cropped.get_pixel(0, 0), &PAPER);
    assert_eq!(cropped.get_pixel(3, 3), &INK);
    assert_eq!(cropped.get_pixel(62, 52), &INK);
    assert_eq!(cropped.get_pixel(63, 53), &PAPER);
}

#[test]
fn test_width_only_keeps_height() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(
        dir.path(),
        "slide.png",
        &slide_image(100, 60, CropRect::new(20, 10, 69, 29)),
    );

    pipeline(CropAxes::Width, 0).process(&path).unwrap();
    assert_eq!(read_rgb(&path).dimensions(), (50, 60));
}

#[test]
fn test_height_only_keeps_width() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(
        dir.path(),
        "slide.png",
        &slide_image(100, 60, CropRect::new(20, 10, 69, 29)),
    );

    pipeline(CropAxes::Height, 2).process(&path).unwrap();
    assert_eq!(read_rgb(&path).dimensions(), (100, 24));
}

#[test]
fn test_blank_slide_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "blank.png", &blank_image(64, 48));
    let before = fs::read(&path).unwrap();

    let outcome = pipeline(CropAxes::Both, 3).process(&path).unwrap();
    assert_eq!(
        outcome,
        CropOutcome::Unchanged {
            width: 64,
            height: 48
        }
    );
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn test_second_pass_is_noop_without_padding() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(
        dir.path(),
        "slide.png",
        &slide_image(50, 50, CropRect::new(10, 10, 19, 29)),
    );
    let pipeline = pipeline(CropAxes::Both, 0);

    assert!(pipeline.process(&path).unwrap().is_cropped());
    assert_eq!(
        pipeline.process(&path).unwrap(),
        CropOutcome::Unchanged {
            width: 10,
            height: 20
        }
    );
}

#[test]
fn test_bmp_keeps_container() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slide.bmp");
    fs::write(
        &path,
        encode(
            &slide_image(40, 40, CropRect::new(5, 5, 14, 14)),
            ImageFormat::Bmp,
        ),
    )
    .unwrap();

    pipeline(CropAxes::Both, 1).process(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"BM"));
    assert_eq!(read_rgb(&path).dimensions(), (12, 12));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = pipeline(CropAxes::Both, 3).process(dir.path().join("missing.png"));
    assert!(matches!(result, Err(CropError::Io { .. })));
}

#[test]
fn test_corrupt_file_not_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.png");
    fs::write(&path, b"\x89PNG\r\n\x1a\ntruncated").unwrap();

    let result = pipeline(CropAxes::Both, 3).process(&path);
    assert!(matches!(
        result,
        Err(CropError::Codec(CodecError::Decode { .. }))
    ));
    assert_eq!(fs::read(&path).unwrap(), b"\x89PNG\r\n\x1a\ntruncated");
}

#[test]
fn test_overwrite_leaves_no_stray_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(
        dir.path(),
        "slide.png",
        &slide_image(50, 40, CropRect::new(10, 10, 29, 19)),
    );

    pipeline(CropAxes::Both, 0).process(&path).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("slide.png")]);
    assert_eq!(read_rgb(&path).dimensions(), (20, 10));
}

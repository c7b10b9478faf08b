//! Loader and writer round trips.

use image::ImageFormat;

use slide_crop::{
    ImageLoader, ImageWriter, OutputFormat, Parallelism, Pixel, PixelBuffer, detect_format,
};

use super::test_utils::{encode, is_png};

fn noise(width: usize, height: usize) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height).unwrap();
    let mut state = 0x2545_f491u32;
    for y in 0..height {
        for x in 0..width {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let [r, g, b, _] = state.to_le_bytes();
            buffer.set(x, y, Pixel::new(r, g, b)).unwrap();
        }
    }
    buffer
}

#[test]
fn test_write_then_load_is_lossless() {
    // Odd widths exercise scan-line padding.
    for (width, height) in [(1, 1), (3, 2), (5, 7), (101, 33)] {
        let buffer = noise(width, height);
        let bytes = ImageWriter::new().write(&buffer).unwrap();
        assert!(is_png(&bytes));

        let reloaded = ImageLoader::new().load(&bytes).unwrap();
        assert_eq!(reloaded, buffer, "{width}x{height}");
    }
}

#[test]
fn test_parallel_and_sequential_load_agree() {
    let bytes = ImageWriter::new().write(&noise(257, 129)).unwrap();

    let parallel = ImageLoader::with_parallelism(Parallelism::Parallel)
        .load(&bytes)
        .unwrap();
    let sequential = ImageLoader::with_parallelism(Parallelism::Sequential)
        .load(&bytes)
        .unwrap();

    assert_eq!(parallel, sequential);
}

#[test]
fn test_load_external_png() {
    let image = image::RgbImage::from_fn(4, 3, |x, y| image::Rgb([x as u8, y as u8, 7]));
    let buffer = ImageLoader::new()
        .load(&encode(&image, ImageFormat::Png))
        .unwrap();

    assert_eq!(buffer.dimensions(), (4, 3));
    assert_eq!(buffer.get(3, 2).unwrap(), Pixel::new(3, 2, 7));
}

#[test]
fn test_detect_format_of_written_bmp() {
    let bytes = ImageWriter::with_format(OutputFormat::Bmp)
        .write(&noise(9, 9))
        .unwrap();
    assert_eq!(detect_format(&bytes).unwrap(), OutputFormat::Bmp);
}

use greyscale::ImageRgba8;

/// Generates a small RGBA image with distinct channel values per pixel and a
/// mix of opaque and translucent alpha.
pub fn color_blocks(width: usize, height: usize) -> ImageRgba8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut image = ImageRgba8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let r = ((x * 37 + 11) % 256) as u8;
            let g = ((y * 53 + 7) % 256) as u8;
            let b = ((x * 19 + y * 29) % 256) as u8;
            let a = if (x + y) % 2 == 0 { 255 } else { 128 };
            image.set(x, y, [r, g, b, a]);
        }
    }
    image
}

//! Channel-averaging greyscale conversion.

use crate::image::ImageRgba8;

/// Converts an image to greyscale in place by replacing each pixel's R, G and
/// B channels with their average, `(r + g + b) / 3` in truncating integer
/// arithmetic. The alpha channel is left untouched.
///
/// Total over any well-formed image; a zero-sized image is a no-op. Each
/// pixel is independent of all others, so traversal order carries no meaning.
pub fn convert_to_greyscale(image: &mut ImageRgba8) {
    for px in image.pixels_mut() {
        let sum = px[0] as u16 + px[1] as u16 + px[2] as u16;
        let ave = (sum / 3) as u8;
        px[0] = ave;
        px[1] = ave;
        px[2] = ave;
    }
}

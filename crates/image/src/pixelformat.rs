/// Packed 8-bit pixel layouts a decoded frame can arrive in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb8,
    Bgr8,
    Rgba8,
    Argb8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Rgb8 | PixelFormat::Bgr8 => 3,
            PixelFormat::Rgba8 | PixelFormat::Argb8 => 4,
        }
    }

    // byte offsets of red, green and blue inside one pixel
    pub(crate) fn rgb_offsets(&self) -> [usize; 3] {
        match self {
            PixelFormat::Rgb8 | PixelFormat::Rgba8 => [0, 1, 2],
            PixelFormat::Bgr8 => [2, 1, 0],
            PixelFormat::Argb8 => [1, 2, 3],
        }
    }
}

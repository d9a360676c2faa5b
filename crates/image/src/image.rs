use {crate::*, base::Vec2};

/// Packed 8-bit image, rows top to bottom without padding.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// Like `new`, but rejects buffers whose length does not match the size.
    pub fn try_new(
        size: Vec2<usize>,
        data: Vec<u8>,
        format: PixelFormat,
    ) -> Result<Self, ImageError> {
        let expected = size.area() * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(ImageError::Size(format!(
                "{}x{} {:?} needs {} bytes, got {}",
                size.x,
                size.y,
                format,
                expected,
                data.len()
            )));
        }
        Ok(Self { size, data, format })
    }

    /// Rgb8 image with every pixel set to `rgb`.
    pub fn filled(size: Vec2<usize>, rgb: [u8; 3]) -> Self {
        let mut data = Vec::with_capacity(size.area() * 3);
        for _ in 0..size.area() {
            data.extend_from_slice(&rgb);
        }
        Self::new(size, data, PixelFormat::Rgb8)
    }

    /// RGB value at (x, y), independent of the stored layout.
    pub fn rgb_at(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.size.x || y >= self.size.y {
            return None;
        }
        let bpp = self.format.bytes_per_pixel();
        let base = (y * self.size.x + x) * bpp;
        let [r, g, b] = self.format.rgb_offsets();
        let pixel = self.data.get(base..base + bpp)?;
        Some([pixel[r], pixel[g], pixel[b]])
    }
}

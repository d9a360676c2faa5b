use {
    crate::*,
    base::{Rect, Vec2},
};

impl Image {
    /// Copy of this image in Rgb8 layout.
    pub fn to_rgb(&self) -> Result<Image, ImageError> {
        if self.format == PixelFormat::Rgb8 {
            return Ok(self.clone());
        }
        let bpp = self.format.bytes_per_pixel();
        let [r, g, b] = self.format.rgb_offsets();
        let mut rgb = Vec::with_capacity(self.size.area() * 3);
        for pixel in self.data.chunks_exact(bpp) {
            rgb.extend_from_slice(&[pixel[r], pixel[g], pixel[b]]);
        }
        Image::try_new(self.size, rgb, PixelFormat::Rgb8)
    }

    /// Copy the pixels inside `rect`, which must lie within the image.
    pub fn crop(&self, rect: Rect<usize>) -> Result<Image, ImageError> {
        let end = rect.origin + rect.size;
        if rect.size.area() == 0 || end.x > self.size.x || end.y > self.size.y {
            return Err(ImageError::Size(format!(
                "crop {:?}+{:?} outside {}x{} image",
                rect.origin, rect.size, self.size.x, self.size.y
            )));
        }
        let bpp = self.format.bytes_per_pixel();
        let row_bytes = rect.size.x * bpp;
        let mut data = Vec::with_capacity(rect.size.y * row_bytes);
        for y in rect.origin.y..end.y {
            let start = (y * self.size.x + rect.origin.x) * bpp;
            data.extend_from_slice(&self.data[start..start + row_bytes]);
        }
        Ok(Image::new(Vec2::new(rect.size.x, rect.size.y), data, self.format))
    }
}

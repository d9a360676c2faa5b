use {
    crate::*,
    base::Vec2,
    crates_image::{RgbImage, imageops::FilterType},
};

impl Image {
    /// Bilinear resample to `size`. The result is always Rgb8.
    pub fn resize(&self, size: Vec2<usize>) -> Result<Image, ImageError> {
        if size.area() == 0 {
            return Err(ImageError::Size(format!(
                "cannot resize to {}x{}",
                size.x, size.y
            )));
        }
        let rgb = self.to_rgb()?;
        if rgb.size == size {
            return Ok(rgb);
        }
        let buffer = RgbImage::from_raw(rgb.size.x as u32, rgb.size.y as u32, rgb.data)
            .ok_or_else(|| ImageError::Size("buffer smaller than image size".to_string()))?;
        let resized = crates_image::imageops::resize(
            &buffer,
            size.x as u32,
            size.y as u32,
            FilterType::Triangle,
        );
        Image::try_new(size, resized.into_raw(), PixelFormat::Rgb8)
    }
}

use {
    crate::*,
    base::Vec2,
    embedded_graphics::{
        mono_font::{MonoFont, MonoTextStyle, ascii},
        prelude::*,
        primitives::{Circle, Line, PrimitiveStyle, Rectangle},
        text::{Baseline, Text},
    },
    std::convert::Infallible,
};

pub use embedded_graphics::pixelcolor::{Rgb888 as Color, RgbColor};

/// Monospace font sizes available for overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

impl FontSize {
    fn font(&self) -> &'static MonoFont<'static> {
        match self {
            FontSize::Small => &ascii::FONT_6X10,
            FontSize::Medium => &ascii::FONT_8X13,
            FontSize::Large => &ascii::FONT_10X20,
        }
    }

    /// Width and height of one glyph cell in pixels.
    pub fn glyph_size(&self) -> Vec2<usize> {
        let size = self.font().character_size;
        Vec2::new(size.width as usize, size.height as usize)
    }

    /// Pixel width of `text` rendered in this font.
    pub fn text_width(&self, text: &str) -> usize {
        let font = self.font();
        let count = text.chars().count();
        count * font.character_size.width as usize
            + count.saturating_sub(1) * font.character_spacing as usize
    }
}

/// `DrawTarget` over an Rgb8 or Bgr8 image; pixels outside the image are dropped.
pub struct Canvas<'a> {
    image: &'a mut Image,
}

impl<'a> Canvas<'a> {
    pub fn new(image: &'a mut Image) -> Result<Self, ImageError> {
        match image.format {
            PixelFormat::Rgb8 | PixelFormat::Bgr8 => Ok(Self { image }),
            other => Err(ImageError::Format(format!(
                "cannot draw on {:?} images",
                other
            ))),
        }
    }

    fn set(&mut self, x: usize, y: usize, color: Color) {
        let index = (y * self.image.size.x + x) * 3;
        let [r, g, b] = self.image.format.rgb_offsets();
        if let Some(pixel) = self.image.data.get_mut(index..index + 3) {
            pixel[r] = color.r();
            pixel[g] = color.g();
            pixel[b] = color.b();
        }
    }
}

impl OriginDimensions for Canvas<'_> {
    fn size(&self) -> Size {
        Size::new(self.image.size.x as u32, self.image.size.y as u32)
    }
}

impl DrawTarget for Canvas<'_> {
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = (self.image.size.x as i32, self.image.size.y as i32);
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.x < width && point.y >= 0 && point.y < height {
                self.set(point.x as usize, point.y as usize, color);
            }
        }
        Ok(())
    }
}

fn point(position: Vec2<i32>) -> Point {
    Point::new(position.x, position.y)
}

/// Straight line of the given stroke width.
pub fn draw_line(
    image: &mut Image,
    from: Vec2<i32>,
    to: Vec2<i32>,
    color: Color,
    stroke: u32,
) -> Result<(), ImageError> {
    let mut canvas = Canvas::new(image)?;
    Line::new(point(from), point(to))
        .into_styled(PrimitiveStyle::with_stroke(color, stroke))
        .draw(&mut canvas)
        .unwrap_or_else(|never| match never {});
    Ok(())
}

/// Filled circle centered on `center`.
pub fn draw_marker(
    image: &mut Image,
    center: Vec2<i32>,
    diameter: u32,
    color: Color,
) -> Result<(), ImageError> {
    let mut canvas = Canvas::new(image)?;
    Circle::with_center(point(center), diameter)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(&mut canvas)
        .unwrap_or_else(|never| match never {});
    Ok(())
}

/// Filled axis-aligned box, used as a text backdrop.
pub fn fill_rect(
    image: &mut Image,
    origin: Vec2<i32>,
    size: Vec2<usize>,
    color: Color,
) -> Result<(), ImageError> {
    let mut canvas = Canvas::new(image)?;
    Rectangle::new(point(origin), Size::new(size.x as u32, size.y as u32))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(&mut canvas)
        .unwrap_or_else(|never| match never {});
    Ok(())
}

/// Single line of text whose baseline starts at `position`.
pub fn draw_text(
    image: &mut Image,
    text: &str,
    position: Vec2<i32>,
    font: FontSize,
    color: Color,
) -> Result<(), ImageError> {
    let mut canvas = Canvas::new(image)?;
    let style = MonoTextStyle::new(font.font(), color);
    Text::with_baseline(text, point(position), style, Baseline::Alphabetic)
        .draw(&mut canvas)
        .unwrap_or_else(|never| match never {});
    Ok(())
}

use {
    crate::InferError,
    base::{Rect, Tensor, Vec2},
    image::Image,
};

/// Side of the square landmark model input.
pub const INPUT_SIZE: usize = 256;

/// Memory layout the landmark model expects for its input tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputLayout {
    /// `[1, 3, 256, 256]`
    #[default]
    Nchw,
    /// `[1, 256, 256, 3]`
    Nhwc,
}

/// How a region of the frame was fitted into the model input.
///
/// The region is scaled to fit `INPUT_SIZE` on its longer side and centered,
/// leaving black bars on the shorter side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    pub roi: Rect<usize>,
    pub resized: Vec2<usize>,
    pub scale: Vec2<f32>,
    pub pad: Vec2<f32>,
}

impl Letterbox {
    pub fn new(roi: Rect<usize>) -> Self {
        let fit = (INPUT_SIZE as f32 / roi.size.x.max(1) as f32)
            .min(INPUT_SIZE as f32 / roi.size.y.max(1) as f32);
        let resized = roi
            .size
            .map(|side| ((side as f32 * fit).round() as usize).clamp(1, INPUT_SIZE));
        let scale = Vec2::new(
            resized.x as f32 / roi.size.x.max(1) as f32,
            resized.y as f32 / roi.size.y.max(1) as f32,
        );
        let pad = Vec2::new(
            ((INPUT_SIZE - resized.x) / 2) as f32,
            ((INPUT_SIZE - resized.y) / 2) as f32,
        );
        Self {
            roi,
            resized,
            scale,
            pad,
        }
    }

    /// Model input pixel to frame pixel.
    pub fn to_frame(&self, input: Vec2<f32>) -> Vec2<f32> {
        let local = input - self.pad;
        self.roi.origin.to_f32() + Vec2::new(local.x / self.scale.x, local.y / self.scale.y)
    }
}

/// Crop `roi` out of `image`, letterbox it to `INPUT_SIZE` and normalize to [0, 1].
pub fn preprocess(
    image: &Image,
    roi: Rect<usize>,
    layout: InputLayout,
) -> Result<(Tensor<f32>, Letterbox), InferError> {
    if roi.size.area() == 0
        || roi.origin.x + roi.size.x > image.size.x
        || roi.origin.y + roi.size.y > image.size.y
    {
        return Err(InferError::ShapeMismatch {
            expected: format!("non-empty region inside {:?}", image.size),
            got: format!("{:?} at {:?}", roi.size, roi.origin),
        });
    }

    let letterbox = Letterbox::new(roi);
    let resized = image.crop(roi)?.resize(letterbox.resized)?;

    let shape = match layout {
        InputLayout::Nchw => vec![1, 3, INPUT_SIZE, INPUT_SIZE],
        InputLayout::Nhwc => vec![1, INPUT_SIZE, INPUT_SIZE, 3],
    };
    let mut tensor = Tensor::filled(shape, 0.0f32)?;
    let plane = INPUT_SIZE * INPUT_SIZE;
    let (pad_x, pad_y) = (letterbox.pad.x as usize, letterbox.pad.y as usize);
    for y in 0..letterbox.resized.y {
        for x in 0..letterbox.resized.x {
            let src = (y * letterbox.resized.x + x) * 3;
            let pixel = (y + pad_y) * INPUT_SIZE + x + pad_x;
            for channel in 0..3 {
                let value = resized.data[src + channel] as f32 / 255.0;
                match layout {
                    InputLayout::Nchw => tensor.data[channel * plane + pixel] = value,
                    InputLayout::Nhwc => tensor.data[pixel * 3 + channel] = value,
                }
            }
        }
    }
    Ok((tensor, letterbox))
}

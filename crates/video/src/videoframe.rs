use image::Image;

/// One decoded frame and its 1-based position in the stream.
#[derive(Debug, Clone)]
pub struct VideoFrame {
    pub index: u64,
    pub image: Image,
}

//! Frame buffers for the moveit pipeline.
//!
//! `Image` holds packed 8-bit pixels in one of a few layouts. Frames are
//! converted to Rgb8 before pose detection, optionally down-scaled, and
//! annotated in place with the `draw` helpers.

mod convert;
pub mod draw;
mod error;
mod image;
mod pixelformat;
mod resize;
mod u32;

pub use error::ImageError;
pub use image::Image;
pub use pixelformat::PixelFormat;
pub use u32::image_to_u32;

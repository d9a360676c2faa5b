//! Video file input for the moveit pipeline.
//!
//! `VideoIn` decodes on a blocking worker thread and hands frames to async
//! code through a small bounded channel, in decode order.

mod error;
mod videoframe;
pub mod videoin;

pub use error::VideoError;
pub use videoframe::VideoFrame;
pub use videoin::{FileDevice, MemoryDevice, VideoIn, VideoInDevice, VideoInfo};

/// Container extensions treated as video input, compared case-insensitively.
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "avi", "mov", "mkv", "wmv", "flv", "webm", "m4v", "mpeg", "mpg",
];

/// Whether `path` has one of `VIDEO_EXTENSIONS`.
pub fn is_video_file(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            VIDEO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

use {inference::InferError, std::fmt, video::VideoError};

#[derive(Debug)]
pub enum MoveError {
    /// The video directory or a video file cannot be opened for decoding.
    SourceUnavailable(String),
    /// The video directory holds no eligible files.
    NoInputFound(String),
    /// The landmark log cannot be created or written.
    OutputWriteFailure(String),
    Video(VideoError),
    Infer(InferError),
    Image(image::ImageError),
    /// Window or rendering failure in game mode.
    Display(String),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::SourceUnavailable(msg) => write!(f, "source unavailable: {msg}"),
            MoveError::NoInputFound(msg) => write!(f, "no input found: {msg}"),
            MoveError::OutputWriteFailure(msg) => write!(f, "output write failure: {msg}"),
            MoveError::Video(err) => write!(f, "video error: {err}"),
            MoveError::Infer(err) => write!(f, "inference error: {err}"),
            MoveError::Image(err) => write!(f, "image error: {err}"),
            MoveError::Display(msg) => write!(f, "display error: {msg}"),
        }
    }
}

impl std::error::Error for MoveError {}

impl From<VideoError> for MoveError {
    fn from(err: VideoError) -> Self {
        match err {
            VideoError::Open(msg) => MoveError::SourceUnavailable(msg),
            other => MoveError::Video(other),
        }
    }
}

impl From<InferError> for MoveError {
    fn from(err: InferError) -> Self {
        MoveError::Infer(err)
    }
}

impl From<image::ImageError> for MoveError {
    fn from(err: image::ImageError) -> Self {
        MoveError::Image(err)
    }
}

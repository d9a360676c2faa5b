use std::fmt;

#[derive(Debug)]
pub enum VideoError {
    Open(String),
    Decode(String),
    Image(image::ImageError),
    Channel(String),
    FeatureNotEnabled(String),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::Open(msg) => write!(f, "open error: {msg}"),
            VideoError::Decode(msg) => write!(f, "decode error: {msg}"),
            VideoError::Image(err) => write!(f, "image error: {err}"),
            VideoError::Channel(msg) => write!(f, "channel error: {msg}"),
            VideoError::FeatureNotEnabled(msg) => write!(f, "feature not enabled: {msg}"),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<std::io::Error> for VideoError {
    fn from(err: std::io::Error) -> Self {
        VideoError::Open(err.to_string())
    }
}

impl From<image::ImageError> for VideoError {
    fn from(err: image::ImageError) -> Self {
        VideoError::Image(err)
    }
}

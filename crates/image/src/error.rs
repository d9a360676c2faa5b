use std::fmt;

#[derive(Debug)]
pub enum ImageError {
    Format(String),
    Size(String),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Format(msg) => write!(f, "format error: {msg}"),
            ImageError::Size(msg) => write!(f, "size error: {msg}"),
        }
    }
}

impl std::error::Error for ImageError {}

use {crate::Device, base::TensorError, std::fmt};

#[derive(Debug)]
pub enum InferError {
    Io(String),
    ModelLoad(String),
    Backend(String),
    UnsupportedDevice(Device),
    InvalidInput {
        name: String,
        expected_names: Vec<String>,
    },
    ShapeMismatch {
        expected: String,
        got: String,
    },
    Image(image::ImageError),
    Tensor(TensorError),
    FeatureNotEnabled(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::Io(msg) => write!(f, "io error: {msg}"),
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::Backend(msg) => write!(f, "backend error: {msg}"),
            InferError::UnsupportedDevice(device) => write!(f, "unsupported device: {device}"),
            InferError::InvalidInput {
                name,
                expected_names,
            } => write!(f, "invalid input '{name}', model expects {expected_names:?}"),
            InferError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            InferError::Image(err) => write!(f, "image error: {err}"),
            InferError::Tensor(err) => write!(f, "tensor error: {err}"),
            InferError::FeatureNotEnabled(msg) => write!(f, "feature not enabled: {msg}"),
        }
    }
}

impl std::error::Error for InferError {}

impl From<std::io::Error> for InferError {
    fn from(err: std::io::Error) -> Self {
        InferError::Io(err.to_string())
    }
}

impl From<image::ImageError> for InferError {
    fn from(err: image::ImageError) -> Self {
        InferError::Image(err)
    }
}

impl From<TensorError> for InferError {
    fn from(err: TensorError) -> Self {
        InferError::Tensor(err)
    }
}

use crate::{Backend, InferError};

#[cfg(feature = "onnx")]
mod onnx;

#[cfg(feature = "onnx")]
pub use onnx::{OnnxBackend, OnnxSession};

/// The backend compiled into this build under `name`.
pub fn find_backend(name: &str) -> Result<Box<dyn Backend>, InferError> {
    match name {
        #[cfg(feature = "onnx")]
        "onnx" => Ok(Box::new(OnnxBackend)),
        _ => Err(InferError::FeatureNotEnabled(format!(
            "no '{name}' backend in this build"
        ))),
    }
}

//! Model sessions and BlazePose landmark estimation.
//!
//! A `Backend` loads a model into a `Session` on a `Device`. The `pose`
//! module turns a session into a `PoseEstimator` that yields the 33
//! normalized body landmarks for one frame.

mod backend;
pub mod backends;
mod device;
mod error;
mod modelsource;
pub mod pose;
mod session;

pub use {
    backend::Backend,
    backends::find_backend,
    device::Device,
    error::InferError,
    modelsource::ModelSource,
    session::Session,
};

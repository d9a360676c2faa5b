use {super::PoseLandmarks, crate::InferError, image::Image};

/// Per-frame body landmark detector.
///
/// Implementations may keep state between calls (tracking, smoothing), so one
/// estimator must only ever see frames from a single video, in order.
pub trait PoseEstimator: Send {
    /// Landmarks of the most prominent person in `image`, or `None` when no
    /// person is found.
    fn detect(&mut self, image: &Image) -> Result<Option<PoseLandmarks>, InferError>;
}

use inference::pose::PoseLandmarks;

/// Estimator outcome for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Detection {
    NoDetection,
    Pose(PoseLandmarks),
}

impl Detection {
    pub fn landmarks(&self) -> Option<&PoseLandmarks> {
        match self {
            Detection::NoDetection => None,
            Detection::Pose(landmarks) => Some(landmarks),
        }
    }

    pub fn has_pose(&self) -> bool {
        matches!(self, Detection::Pose(_))
    }
}

impl From<Option<PoseLandmarks>> for Detection {
    fn from(landmarks: Option<PoseLandmarks>) -> Self {
        match landmarks {
            Some(landmarks) => Detection::Pose(landmarks),
            None => Detection::NoDetection,
        }
    }
}

/// One decoded frame's result, in stream order.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameDetection {
    /// 1-based position of the frame in its video.
    pub frame_index: u64,
    pub detection: Detection,
}

use {
    super::{
        InputLayout, LandmarkSmoother, PoseEstimator, PoseLandmarks, RoiTracker, decode_landmarks,
        pose_score, preprocess,
    },
    crate::{Backend, Device, InferError, ModelSource, Session},
    base::{Rect, Tensor},
    image::Image,
    std::collections::HashMap,
};

/// Minimum pose score to accept a pose found in the whole frame.
pub const DEFAULT_DETECTION_CONFIDENCE: f32 = 0.5;

/// Minimum pose score to keep following a pose inside the tracked region.
pub const DEFAULT_TRACKING_CONFIDENCE: f32 = 0.5;

/// Weight of the newest pose in the landmark moving average.
pub const DEFAULT_SMOOTHING: f32 = 0.6;

/// BlazePose landmark model wrapped as a tracking `PoseEstimator`.
///
/// The first frame, and any frame after the person is lost, is searched as a
/// whole. While a pose is tracked, only the enlarged bounding box of the last
/// pose is fed to the model; if that fails the whole frame is tried again.
pub struct BlazePoseEstimator {
    session: Box<dyn Session>,
    layout: InputLayout,
    detection_confidence: f32,
    tracking_confidence: f32,
    tracker: RoiTracker,
    smoother: LandmarkSmoother,
}

impl BlazePoseEstimator {
    pub fn new(
        model: ModelSource,
        backend: &dyn Backend,
        device: Device,
    ) -> Result<Self, InferError> {
        Ok(Self::from_session(backend.load_model(model, device)?))
    }

    pub fn from_session(session: Box<dyn Session>) -> Self {
        Self {
            session,
            layout: InputLayout::default(),
            detection_confidence: DEFAULT_DETECTION_CONFIDENCE,
            tracking_confidence: DEFAULT_TRACKING_CONFIDENCE,
            tracker: RoiTracker::new(),
            smoother: LandmarkSmoother::new(DEFAULT_SMOOTHING),
        }
    }

    pub fn with_input_layout(mut self, layout: InputLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_detection_confidence(mut self, threshold: f32) -> Self {
        self.detection_confidence = threshold;
        self
    }

    pub fn with_tracking_confidence(mut self, threshold: f32) -> Self {
        self.tracking_confidence = threshold;
        self
    }

    pub fn with_smoothing(mut self, alpha: f32) -> Self {
        self.smoother = LandmarkSmoother::new(alpha);
        self
    }

    pub fn detection_confidence(&self) -> f32 {
        self.detection_confidence
    }

    pub fn tracking_confidence(&self) -> f32 {
        self.tracking_confidence
    }

    fn run_region(
        &mut self,
        image: &Image,
        roi: Rect<usize>,
        threshold: f32,
    ) -> Result<Option<PoseLandmarks>, InferError> {
        let (input, letterbox) = preprocess(image, roi, self.layout)?;
        let input_name = self
            .session
            .input_names()
            .first()
            .ok_or_else(|| InferError::Backend("model has no inputs".to_string()))?
            .clone();
        let outputs = self.session.run(&[(input_name.as_str(), input)])?;
        let (landmarks, flag) = select_outputs(&outputs, self.session.output_names())?;

        let score = pose_score(flag)?;
        if score < threshold {
            log::trace!("pose score {score:.3} below {threshold:.3} in {:?}", roi);
            return Ok(None);
        }
        Ok(Some(decode_landmarks(landmarks, &letterbox, image.size)?))
    }
}

// the landmark tensor holds 5 values per landmark, the pose flag holds one
fn select_outputs<'a>(
    outputs: &'a HashMap<String, Tensor<f32>>,
    order: &[String],
) -> Result<(&'a Tensor<f32>, &'a Tensor<f32>), InferError> {
    let ordered = || order.iter().filter_map(|name| outputs.get(name));
    let landmarks = ordered()
        .find(|tensor| tensor.len() >= 165 && tensor.len() % 5 == 0)
        .ok_or_else(|| InferError::Backend("model has no landmark output".to_string()))?;
    let flag = ordered()
        .find(|tensor| tensor.len() == 1)
        .ok_or_else(|| InferError::Backend("model has no pose flag output".to_string()))?;
    Ok((landmarks, flag))
}

impl PoseEstimator for BlazePoseEstimator {
    fn detect(&mut self, image: &Image) -> Result<Option<PoseLandmarks>, InferError> {
        if let Some(roi) = self.tracker.roi(image.size) {
            if let Some(pose) = self.run_region(image, roi, self.tracking_confidence)? {
                let pose = self.smoother.apply(pose);
                self.tracker.update(&pose, image.size);
                return Ok(Some(pose));
            }
            log::debug!("lost tracked pose, searching whole frame");
            self.tracker.reset();
            self.smoother.reset();
        }

        match self.run_region(image, Rect::full(image.size), self.detection_confidence)? {
            Some(pose) => {
                let pose = self.smoother.apply(pose);
                self.tracker.update(&pose, image.size);
                Ok(Some(pose))
            }
            None => Ok(None),
        }
    }
}

use {
    crate::{Detection, FrameDetection, LandmarkRecorder, MoveError, VideoJob},
    base::Vec2,
    image::Image,
    inference::pose::{PoseEstimator, draw_pose},
    video::VideoIn,
};

/// Decodes one video and runs the pose estimator on every frame.
pub struct VideoPipeline {
    job: VideoJob,
    source: VideoIn,
    estimator: Box<dyn PoseEstimator>,
    overlay: bool,
}

impl VideoPipeline {
    /// Open `job.path` for decoding.
    pub async fn open(job: VideoJob, estimator: Box<dyn PoseEstimator>) -> Result<Self, MoveError> {
        let source = VideoIn::open(&job.path).await?;
        Ok(Self::new(job, source, estimator))
    }

    pub fn new(job: VideoJob, source: VideoIn, estimator: Box<dyn PoseEstimator>) -> Self {
        Self {
            job,
            source,
            estimator,
            overlay: false,
        }
    }

    /// Draw the detected skeleton onto each returned frame.
    pub fn with_overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn job(&self) -> &VideoJob {
        &self.job
    }

    /// Size of the frames this pipeline returns.
    pub fn frame_size(&self) -> Vec2<usize> {
        self.job
            .target_size()
            .unwrap_or_else(|| self.job.reduced_size(self.source.size()))
    }

    /// Decode and analyze the next frame, or `None` at end of stream.
    ///
    /// A decode failure part way through the video is returned as `MoveError::Video`.
    pub async fn next_detection(&mut self) -> Result<Option<(Image, FrameDetection)>, MoveError> {
        let frame = match self.source.recv().await {
            Some(frame) => frame?,
            None => return Ok(None),
        };

        let mut image = frame.image.to_rgb()?;
        if self.job.native_size.is_none() {
            self.job.native_size = Some(image.size);
        }
        // all frames are resized to the reduced first-frame size
        if let Some(target) = self.job.target_size() {
            if target != image.size {
                image = image.resize(target)?;
            }
        }

        let detection = Detection::from(self.estimator.detect(&image)?);
        if self.overlay {
            if let Some(landmarks) = detection.landmarks() {
                draw_pose(&mut image, landmarks)?;
            }
        }
        Ok(Some((
            image,
            FrameDetection {
                frame_index: frame.index,
                detection,
            },
        )))
    }

    /// Record every remaining frame; returns the number of frames recorded.
    pub async fn run_detection(&mut self, recorder: &LandmarkRecorder) -> Result<u64, MoveError> {
        self.run_detection_with(recorder, |_, _| {}).await
    }

    /// Like `run_detection`, also handing each frame to `on_frame` after it is recorded.
    pub async fn run_detection_with(
        &mut self,
        recorder: &LandmarkRecorder,
        mut on_frame: impl FnMut(&Image, &FrameDetection),
    ) -> Result<u64, MoveError> {
        let mut frames = 0u64;
        let mut poses = 0u64;
        while let Some((image, result)) = self.next_detection().await? {
            recorder.record(&self.job.path, result.frame_index, &result.detection)?;
            if result.detection.has_pose() {
                poses += 1;
            }
            frames += 1;
            on_frame(&image, &result);
        }
        if frames == 0 {
            return Err(MoveError::SourceUnavailable(format!(
                "{}: no frames could be decoded",
                self.job.path.display()
            )));
        }
        log::info!(
            "{}: {} frames, {} with a pose, log at {}",
            self.job.label(),
            frames,
            poses,
            recorder.log_path(&self.job.path).display()
        );
        Ok(frames)
    }
}

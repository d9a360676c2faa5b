use {
    crate::RecordLayout,
    inference::{
        Device,
        pose::{DEFAULT_DETECTION_CONFIDENCE, DEFAULT_TRACKING_CONFIDENCE},
    },
    std::{
        env,
        path::{Path, PathBuf},
    },
};

pub const VIDEO_DIR_ENV: &str = "MOVEIT_VIDEO_DIR";
pub const OUTPUT_DIR_ENV: &str = "MOVEIT_OUTPUT_DIR";
pub const MODEL_PATH_ENV: &str = "MOVEIT_MODEL_PATH";
pub const DEVICE_ENV: &str = "MOVEIT_DEVICE";

pub const DEFAULT_MODEL_PATH: &str = "models/pose_landmark_full.onnx";

/// Settings shared by the detection and game programs.
#[derive(Clone, Debug)]
pub struct MoveConfig {
    video_dir: PathBuf,
    output_dir: PathBuf,
    model_path: PathBuf,
    device: Device,
    detection_confidence: f32,
    tracking_confidence: f32,
    record_layout: RecordLayout,
    preview: bool,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            video_dir: PathBuf::from("video"),
            output_dir: PathBuf::from("json"),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            device: Device::Cpu,
            detection_confidence: DEFAULT_DETECTION_CONFIDENCE,
            tracking_confidence: DEFAULT_TRACKING_CONFIDENCE,
            record_layout: RecordLayout::Flat,
            preview: false,
        }
    }
}

impl MoveConfig {
    /// Defaults overridden by `MOVEIT_VIDEO_DIR`, `MOVEIT_OUTPUT_DIR`,
    /// `MOVEIT_MODEL_PATH` and `MOVEIT_DEVICE` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(dir) = env::var(VIDEO_DIR_ENV) {
            config.video_dir = dir.into();
        }
        if let Ok(dir) = env::var(OUTPUT_DIR_ENV) {
            config.output_dir = dir.into();
        }
        if let Ok(path) = env::var(MODEL_PATH_ENV) {
            config.model_path = path.into();
        }
        if let Ok(value) = env::var(DEVICE_ENV) {
            match value.parse() {
                Ok(device) => config.device = device,
                Err(error) => log::warn!("{}: {}, using CPU", DEVICE_ENV, error),
            }
        }
        config
    }

    /// Directory scanned for input videos.
    pub fn with_video_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.video_dir = dir.into();
        self
    }

    /// Directory receiving one landmark log per video.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = path.into();
        self
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
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

    pub fn with_record_layout(mut self, layout: RecordLayout) -> Self {
        self.record_layout = layout;
        self
    }

    /// Draw the skeleton on frames in detection mode as well.
    pub fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    // Getters
    pub fn video_dir(&self) -> &Path {
        &self.video_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn detection_confidence(&self) -> f32 {
        self.detection_confidence
    }

    pub fn tracking_confidence(&self) -> f32 {
        self.tracking_confidence
    }

    pub fn record_layout(&self) -> RecordLayout {
        self.record_layout
    }

    pub fn preview(&self) -> bool {
        self.preview
    }
}

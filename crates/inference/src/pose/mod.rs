mod blazepose;
mod draw;
mod estimator;
mod postprocess;
mod preprocess;
mod tracker;
mod types;

pub use {
    blazepose::{
        BlazePoseEstimator, DEFAULT_DETECTION_CONFIDENCE, DEFAULT_SMOOTHING,
        DEFAULT_TRACKING_CONFIDENCE,
    },
    draw::draw_pose,
    estimator::PoseEstimator,
    postprocess::{decode_landmarks, pose_score},
    preprocess::{INPUT_SIZE, InputLayout, Letterbox, preprocess},
    tracker::{LandmarkSmoother, RoiTracker},
    types::{LANDMARK_COUNT, Landmark, LandmarkIndex, POSE_CONNECTIONS, PoseLandmarks},
};

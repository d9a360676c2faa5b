//! Per-video pose landmark logging and the "guess the body part" game.
//!
//! Detection mode discovers the videos in a directory and runs one
//! `VideoPipeline` per video in its own task, appending every frame's
//! landmarks to a log through `LandmarkRecorder`. Game mode pulls frames from
//! a single pipeline and drives a `game::ChallengeGame` on them.

mod batch;
mod config;
mod detection;
mod error;
pub mod game;
mod job;
mod pipeline;
mod record;

pub use {
    batch::{BatchRunner, DeviceOpener, EstimatorFactory},
    config::{
        DEFAULT_MODEL_PATH, DEVICE_ENV, MODEL_PATH_ENV, MoveConfig, OUTPUT_DIR_ENV, VIDEO_DIR_ENV,
    },
    detection::{Detection, FrameDetection},
    error::MoveError,
    job::{MULTI_VIDEO_DOWNSCALE, VideoJob, discover_videos},
    pipeline::VideoPipeline,
    record::{
        FrameRecord, LandmarkEntry, LandmarkRecord, LandmarkRecorder, Position, RecordLayout,
        read_log, read_records,
    },
};

use {
    crate::{LandmarkRecorder, MoveError, VideoJob, VideoPipeline},
    inference::{InferError, pose::PoseEstimator},
    std::{
        path::{Path, PathBuf},
        sync::Arc,
        thread,
    },
    tokio::{runtime::Handle, task::spawn_blocking},
    video::{FileDevice, VideoIn, VideoInDevice},
};

/// Builds a fresh estimator for each video.
pub type EstimatorFactory =
    Arc<dyn Fn() -> Result<Box<dyn PoseEstimator>, InferError> + Send + Sync>;

/// Builds the frame source for a video path.
pub type DeviceOpener = Arc<dyn Fn(&Path) -> Box<dyn VideoInDevice> + Send + Sync>;

/// Runs detection mode over many videos at once, one worker thread per video.
///
/// Each worker is named after its video and owns its decoder, estimator and
/// log file. A failing video is logged by its worker and does not affect the
/// others.
pub struct BatchRunner {
    recorder: LandmarkRecorder,
    estimators: EstimatorFactory,
    opener: DeviceOpener,
    overlay: bool,
}

impl BatchRunner {
    pub fn new(recorder: LandmarkRecorder, estimators: EstimatorFactory) -> Self {
        Self {
            recorder,
            estimators,
            opener: Arc::new(|path: &Path| {
                Box::new(FileDevice::new(path)) as Box<dyn VideoInDevice>
            }),
            overlay: false,
        }
    }

    pub fn with_device_opener(mut self, opener: DeviceOpener) -> Self {
        self.opener = opener;
        self
    }

    pub fn with_overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }

    /// Process all `videos` and wait for every worker to finish.
    pub async fn run(&self, videos: Vec<PathBuf>) {
        let total = videos.len();
        log::info!("processing {} video(s)", total);
        let handle = Handle::current();

        let mut workers = Vec::with_capacity(total);
        for path in videos {
            let job = VideoJob::new(path, total);
            let label = job.label();
            let recorder = self.recorder.clone();
            let estimators = Arc::clone(&self.estimators);
            let opener = Arc::clone(&self.opener);
            let overlay = self.overlay;
            let handle = handle.clone();
            // inference and log writes block, so each video gets its own thread
            let spawned = thread::Builder::new().name(label.clone()).spawn(move || {
                let label = job.label();
                let result =
                    handle.block_on(process_video(job, &recorder, &estimators, &opener, overlay));
                match result {
                    Ok(frames) => log::debug!("{}: done after {} frames", label, frames),
                    Err(error) => log::error!("{}: {}", label, error),
                }
            });
            match spawned {
                Ok(worker) => workers.push(worker),
                Err(error) => log::error!("{}: cannot start worker: {}", label, error),
            }
        }

        let joined = spawn_blocking(move || {
            for worker in workers {
                let label = worker.thread().name().unwrap_or("video").to_string();
                if worker.join().is_err() {
                    log::error!("{}: worker panicked", label);
                }
            }
        })
        .await;
        if let Err(error) = joined {
            log::error!("waiting for video workers failed: {}", error);
        }
    }
}

async fn process_video(
    job: VideoJob,
    recorder: &LandmarkRecorder,
    estimators: &EstimatorFactory,
    opener: &DeviceOpener,
    overlay: bool,
) -> Result<u64, MoveError> {
    let estimator = estimators()?;
    let source = VideoIn::from_device(opener(&job.path)).await?;
    let mut pipeline = VideoPipeline::new(job, source, estimator).with_overlay(overlay);
    pipeline.run_detection(recorder).await
}

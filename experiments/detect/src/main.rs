use {
    base::{log, log_fatal},
    image::{Image, image_to_u32},
    inference::{
        ModelSource, find_backend,
        pose::{BlazePoseEstimator, PoseEstimator},
    },
    minifb::{Window, WindowOptions},
    moveit::{
        BatchRunner, EstimatorFactory, FrameDetection, LandmarkRecorder, MoveConfig, RecordLayout,
        VideoJob, VideoPipeline, discover_videos,
    },
    std::{env, path::PathBuf, sync::Arc},
};

const USAGE: &str = "usage: moveit [--preview] [--grouped]";

fn estimator_factory(config: &MoveConfig) -> EstimatorFactory {
    let model_path = config.model_path().to_path_buf();
    let device = config.device().clone();
    let detection_confidence = config.detection_confidence();
    let tracking_confidence = config.tracking_confidence();
    Arc::new(move || {
        let backend = find_backend("onnx")?;
        let estimator = BlazePoseEstimator::new(
            ModelSource::File(model_path.clone()),
            backend.as_ref(),
            device.clone(),
        )?
        .with_detection_confidence(detection_confidence)
        .with_tracking_confidence(tracking_confidence);
        Ok(Box::new(estimator) as Box<dyn PoseEstimator>)
    })
}

// one video with a live window showing the annotated frames
async fn run_with_preview(
    path: PathBuf,
    recorder: &LandmarkRecorder,
    estimators: &EstimatorFactory,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut pipeline = VideoPipeline::open(VideoJob::new(path, 1), estimators()?)
        .await?
        .with_overlay(true);
    let size = pipeline.frame_size();
    let mut window = Window::new("moveIt", size.x, size.y, WindowOptions::default())?;

    pipeline
        .run_detection_with(recorder, |image: &Image, result: &FrameDetection| {
            if !window.is_open() {
                return;
            }
            let buffer = image_to_u32(image);
            if let Err(error) = window.update_with_buffer(&buffer, image.size.x, image.size.y) {
                log::warn!("preview of frame {} failed: {}", result.frame_index, error);
            }
        })
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    base::init_logger_from_env();

    let mut config = MoveConfig::from_env();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--preview" => config = config.with_preview(true),
            "--grouped" => config = config.with_record_layout(RecordLayout::Grouped),
            _ => log_fatal!("unknown argument '{}'\n{}", arg, USAGE),
        }
    }

    log::info!("moveit");
    log::info!("videos: {}", config.video_dir().display());
    log::info!("landmarks: {}", config.output_dir().display());
    log::info!("model: {} on {}", config.model_path().display(), config.device());

    let videos = match discover_videos(config.video_dir()) {
        Ok(videos) => videos,
        Err(error) => log_fatal!("{}", error),
    };

    let recorder = LandmarkRecorder::new(config.output_dir()).with_layout(config.record_layout());
    let estimators = estimator_factory(&config);

    if config.preview() && videos.len() == 1 {
        run_with_preview(videos[0].clone(), &recorder, &estimators).await?;
    } else {
        if config.preview() {
            log::warn!("preview needs a single video, running {} without it", videos.len());
        }
        BatchRunner::new(recorder, estimators).run(videos).await;
    }

    log::info!("done");
    Ok(())
}

mod window;

use {
    base::{log, log_fatal},
    inference::{ModelSource, find_backend, pose::BlazePoseEstimator},
    moveit::{
        MoveConfig, VideoJob, VideoPipeline, discover_videos,
        game::{ChallengeGame, ClickSlot, FRAME_DELAY, play},
    },
    rand::{SeedableRng, rngs::StdRng},
    std::{env, path::PathBuf, sync::Arc},
    window::WindowSurface,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    base::init_logger_from_env();
    let config = MoveConfig::from_env();

    let path = match env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => match discover_videos(config.video_dir()) {
            Ok(videos) => videos[0].clone(),
            Err(error) => log_fatal!("{}", error),
        },
    };
    log::info!("playIt: {}", path.display());
    log::info!("model: {} on {}", config.model_path().display(), config.device());
    log::info!("controls: click the named body part, ESC to quit");

    let backend = find_backend("onnx")?;
    let estimator = BlazePoseEstimator::new(
        ModelSource::File(config.model_path().to_path_buf()),
        backend.as_ref(),
        config.device().clone(),
    )?
    .with_detection_confidence(config.detection_confidence())
    .with_tracking_confidence(config.tracking_confidence());

    let job = VideoJob::new(&path, 1);
    let mut pipeline = match VideoPipeline::open(job, Box::new(estimator)).await {
        Ok(pipeline) => pipeline.with_overlay(true),
        Err(error) => log_fatal!("{}", error),
    };

    let clicks = Arc::new(ClickSlot::new());
    let mut surface = WindowSurface::new("playIt", pipeline.frame_size(), Arc::clone(&clicks))?;
    let mut game = ChallengeGame::new(StdRng::from_entropy());

    let summary = play(&mut pipeline, &mut game, &mut surface, &clicks, FRAME_DELAY).await?;
    println!(
        "You answered {} out of {} correctly.",
        summary.correct, summary.rounds_played
    );
    Ok(())
}

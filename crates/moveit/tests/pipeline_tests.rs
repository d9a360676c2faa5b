use {
    base::Vec2,
    image::Image,
    inference::{
        InferError,
        pose::{LANDMARK_COUNT, Landmark, PoseEstimator, PoseLandmarks},
    },
    moveit::{
        BatchRunner, DeviceOpener, EstimatorFactory, LandmarkRecorder, MoveError, VideoJob,
        VideoPipeline, discover_videos, read_log,
    },
    std::{
        path::{Path, PathBuf},
        sync::{Arc, Mutex},
        thread,
        time::{Duration, Instant},
    },
    video::{MemoryDevice, VideoError, VideoIn, VideoInDevice},
};

/// Finds a centered pose on odd frames and nothing on even ones.
struct OddFrameEstimator {
    calls: usize,
    sizes: Arc<Mutex<Vec<Vec2<usize>>>>,
}

impl OddFrameEstimator {
    fn new() -> (Self, Arc<Mutex<Vec<Vec2<usize>>>>) {
        let sizes = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                calls: 0,
                sizes: Arc::clone(&sizes),
            },
            sizes,
        )
    }
}

fn centered_pose() -> PoseLandmarks {
    [Landmark {
        x: 0.5,
        y: 0.5,
        z: 0.0,
        visibility: 0.9,
    }; LANDMARK_COUNT]
}

impl PoseEstimator for OddFrameEstimator {
    fn detect(&mut self, image: &Image) -> Result<Option<PoseLandmarks>, InferError> {
        self.calls += 1;
        self.sizes.lock().unwrap().push(image.size);
        Ok((self.calls % 2 == 1).then(centered_pose))
    }
}

/// Takes a fixed time per frame, like a model run on a slow machine.
struct SlowEstimator {
    delay: Duration,
}

impl PoseEstimator for SlowEstimator {
    fn detect(&mut self, _image: &Image) -> Result<Option<PoseLandmarks>, InferError> {
        thread::sleep(self.delay);
        Ok(Some(centered_pose()))
    }
}

fn frames(count: usize, size: Vec2<usize>) -> Vec<Image> {
    (0..count).map(|_| Image::filled(size, [10, 20, 30])).collect()
}

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "moveit-pipeline-test-{}-{}",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

async fn pipeline(
    job: VideoJob,
    count: usize,
    size: Vec2<usize>,
) -> (VideoPipeline, Arc<Mutex<Vec<Vec2<usize>>>>) {
    let device = MemoryDevice::new(job.label(), frames(count, size));
    let source = VideoIn::from_device(Box::new(device)).await.unwrap();
    let (estimator, sizes) = OddFrameEstimator::new();
    (VideoPipeline::new(job, source, Box::new(estimator)), sizes)
}

#[tokio::test]
async fn test_ten_frames_with_poses_on_odd_frames() {
    let dir = test_dir("ten-frames");
    let recorder = LandmarkRecorder::new(&dir);
    let job = VideoJob::new("video/walk.mp4", 1);
    let (mut pipeline, _) = pipeline(job, 10, Vec2::new(64, 48)).await;

    let recorded = pipeline.run_detection(&recorder).await.unwrap();
    assert_eq!(recorded, 10);

    let frames = read_log(&dir.join("walk.json")).unwrap();
    assert_eq!(frames.len(), 10);
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(frame.frame_id, i as u64 + 1);
        if frame.frame_id % 2 == 1 {
            assert!(frame.has_data);
            assert_eq!(frame.landmarks.len(), LANDMARK_COUNT);
        } else {
            assert!(!frame.has_data);
            assert!(frame.landmarks.is_empty());
        }
    }
    let content = std::fs::read_to_string(dir.join("walk.json")).unwrap();
    assert_eq!(content.matches("\"frameId\"").count(), 5 + 5 * LANDMARK_COUNT);
    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_multiple_videos_shrink_every_frame() {
    let (mut pipeline, sizes) = pipeline(VideoJob::new("a.mp4", 3), 3, Vec2::new(66, 50)).await;
    assert_eq!(pipeline.frame_size(), Vec2::new(16, 12));

    while let Some((image, _)) = pipeline.next_detection().await.unwrap() {
        assert_eq!(image.size, Vec2::new(16, 12));
    }
    assert_eq!(pipeline.job().native_size, Some(Vec2::new(66, 50)));
    assert_eq!(*sizes.lock().unwrap(), vec![Vec2::new(16, 12); 3]);
}

#[tokio::test]
async fn test_single_video_keeps_native_size() {
    let (mut pipeline, sizes) = pipeline(VideoJob::new("a.mp4", 1), 2, Vec2::new(64, 48)).await;
    while pipeline.next_detection().await.unwrap().is_some() {}
    assert_eq!(pipeline.job().target_size(), Some(Vec2::new(64, 48)));
    assert_eq!(*sizes.lock().unwrap(), vec![Vec2::new(64, 48); 2]);
}

#[tokio::test]
async fn test_next_detection_yields_one_frame_at_a_time() {
    let (mut pipeline, _) = pipeline(VideoJob::new("game.mp4", 1), 3, Vec2::new(32, 32)).await;

    let (_, first) = pipeline.next_detection().await.unwrap().unwrap();
    assert_eq!(first.frame_index, 1);
    assert!(first.detection.has_pose());
    let (_, second) = pipeline.next_detection().await.unwrap().unwrap();
    assert_eq!(second.frame_index, 2);
    assert!(!second.detection.has_pose());
    assert!(pipeline.next_detection().await.unwrap().is_some());
    assert!(pipeline.next_detection().await.unwrap().is_none());
}

#[tokio::test]
async fn test_overlay_draws_detected_skeleton() {
    let (pipeline, _) = pipeline(VideoJob::new("game.mp4", 1), 2, Vec2::new(64, 48)).await;
    let mut pipeline = pipeline.with_overlay(true);

    let (with_pose, _) = pipeline.next_detection().await.unwrap().unwrap();
    assert_eq!(with_pose.rgb_at(32, 24), Some([255, 0, 0]));
    let (without_pose, _) = pipeline.next_detection().await.unwrap().unwrap();
    assert_eq!(without_pose.rgb_at(32, 24), Some([10, 20, 30]));
}

#[tokio::test]
async fn test_video_without_frames_is_unavailable() {
    let recorder = LandmarkRecorder::new(test_dir("no-frames"));
    let (mut pipeline, _) = pipeline(VideoJob::new("empty.mp4", 1), 0, Vec2::new(8, 8)).await;
    let result = pipeline.run_detection(&recorder).await;
    assert!(matches!(result, Err(MoveError::SourceUnavailable(_))));
}

#[tokio::test]
async fn test_decode_failure_mid_video_is_an_error() {
    let dir = test_dir("decode-failure");
    let recorder = LandmarkRecorder::new(&dir);
    let device = MemoryDevice::new("cut.mp4", frames(10, Vec2::new(16, 16))).with_error_after(3);
    let source = VideoIn::from_device(Box::new(device)).await.unwrap();
    let (estimator, _) = OddFrameEstimator::new();
    let mut pipeline = VideoPipeline::new(VideoJob::new("cut.mp4", 1), source, Box::new(estimator));

    let result = pipeline.run_detection(&recorder).await;
    assert!(matches!(result, Err(MoveError::Video(VideoError::Decode(_)))));
    assert_eq!(read_log(&dir.join("cut.json")).unwrap().len(), 3);
    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn test_tiny_frames_shrink_to_one_pixel() {
    let (mut pipeline, sizes) = pipeline(VideoJob::new("tiny.mp4", 2), 2, Vec2::new(3, 2)).await;
    assert_eq!(pipeline.frame_size(), Vec2::new(1, 1));

    while let Some((image, _)) = pipeline.next_detection().await.unwrap() {
        assert_eq!(image.size, Vec2::new(1, 1));
    }
    assert_eq!(*sizes.lock().unwrap(), vec![Vec2::new(1, 1); 2]);
}

#[test]
fn test_open_failure_maps_to_source_unavailable() {
    let error = MoveError::from(VideoError::Open("missing.mp4".to_string()));
    assert!(matches!(error, MoveError::SourceUnavailable(_)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_batch_isolates_failing_video() {
    let dir = test_dir("batch");
    let recorder = LandmarkRecorder::new(&dir);
    let estimators: EstimatorFactory = Arc::new(|| {
        let (estimator, _) = OddFrameEstimator::new();
        Ok(Box::new(estimator) as Box<dyn PoseEstimator>)
    });
    let opener: DeviceOpener = Arc::new(|path: &Path| {
        let label = path.file_name().unwrap().to_string_lossy().into_owned();
        if label.starts_with("broken") {
            let device = MemoryDevice::unavailable(label, "moov atom not found");
            Box::new(device) as Box<dyn VideoInDevice>
        } else {
            let device = MemoryDevice::new(label, frames(4, Vec2::new(40, 40)));
            Box::new(device) as Box<dyn VideoInDevice>
        }
    });

    BatchRunner::new(recorder, estimators)
        .with_device_opener(opener)
        .run(vec![
            PathBuf::from("video/broken.mp4"),
            PathBuf::from("video/left.mp4"),
            PathBuf::from("video/right.mp4"),
        ])
        .await;

    assert!(!dir.join("broken.json").exists());
    for name in ["left.json", "right.json"] {
        let frames = read_log(&dir.join(name)).unwrap();
        assert_eq!(frames.len(), 4);
    }
    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_batch_runs_every_video_at_once() {
    let dir = test_dir("batch-parallel");
    let recorder = LandmarkRecorder::new(&dir);
    let estimators: EstimatorFactory = Arc::new(|| {
        Ok(Box::new(SlowEstimator {
            delay: Duration::from_millis(40),
        }) as Box<dyn PoseEstimator>)
    });
    let opener: DeviceOpener = Arc::new(|path: &Path| {
        let label = path.file_name().unwrap().to_string_lossy().into_owned();
        Box::new(MemoryDevice::new(label, frames(5, Vec2::new(16, 16)))) as Box<dyn VideoInDevice>
    });
    let videos: Vec<PathBuf> = (0..6)
        .map(|i| PathBuf::from(format!("video/clip{i}.mp4")))
        .collect();

    // one video alone takes 5 * 40 ms; six serialized onto two threads take 600 ms
    let start = Instant::now();
    BatchRunner::new(recorder, estimators)
        .with_device_opener(opener)
        .run(videos)
        .await;
    let elapsed = start.elapsed();

    assert!(elapsed < Duration::from_millis(450), "took {:?}", elapsed);
    for i in 0..6 {
        let frames = read_log(&dir.join(format!("clip{i}.json"))).unwrap();
        assert_eq!(frames.len(), 5);
    }
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_discover_videos() {
    let dir = test_dir("discover");
    std::fs::create_dir_all(dir.join("d.mp4")).unwrap();
    for name in ["b.MP4", "notes.txt", "a.mp4", "c.mkv"] {
        std::fs::write(dir.join(name), b"").unwrap();
    }

    let videos = discover_videos(&dir).unwrap();
    let names: Vec<String> = videos
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.mp4", "b.MP4", "c.mkv"]);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_discover_errors() {
    let missing = test_dir("discover-missing");
    assert!(matches!(
        discover_videos(&missing),
        Err(MoveError::SourceUnavailable(_))
    ));

    let empty = test_dir("discover-empty");
    std::fs::create_dir_all(&empty).unwrap();
    std::fs::write(empty.join("readme.md"), b"").unwrap();
    assert!(matches!(
        discover_videos(&empty),
        Err(MoveError::NoInputFound(_))
    ));
    std::fs::remove_dir_all(&empty).ok();
}

#[test]
fn test_video_job_downscale() {
    let single = VideoJob::new("one.mp4", 1);
    assert_eq!(single.downscale, 1);
    assert_eq!(single.target_size(), None);
    assert_eq!(single.label(), "one.mp4");

    let mut shared = VideoJob::new("video/two.mp4", 2);
    shared.native_size = Some(Vec2::new(1920, 1080));
    assert_eq!(shared.target_size(), Some(Vec2::new(480, 270)));
    assert_eq!(shared.reduced_size(Vec2::new(3, 9)), Vec2::new(1, 2));
}

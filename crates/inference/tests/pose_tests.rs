use {
    base::{Rect, Tensor, Vec2},
    image::{Image, PixelFormat},
    inference::{
        InferError, Session,
        pose::{
            BlazePoseEstimator, INPUT_SIZE, InputLayout, LANDMARK_COUNT, Landmark, LandmarkIndex,
            LandmarkSmoother, Letterbox, PoseEstimator, RoiTracker, draw_pose, preprocess,
        },
    },
    std::{
        collections::{HashMap, VecDeque},
        sync::{Arc, Mutex},
    },
};

const TOTAL_LANDMARKS: usize = 39;

/// Session that places landmark `i` at `points[i % points.len()]` in model input pixels.
struct FakeSession {
    input_names: Vec<String>,
    output_names: Vec<String>,
    points: Vec<(f32, f32)>,
    scores: VecDeque<f32>,
    shapes: Arc<Mutex<Vec<Vec<usize>>>>,
}

impl FakeSession {
    fn new(points: Vec<(f32, f32)>, scores: &[f32]) -> (Self, Arc<Mutex<Vec<Vec<usize>>>>) {
        let shapes = Arc::new(Mutex::new(Vec::new()));
        let session = Self {
            input_names: vec!["input_1".to_string()],
            output_names: vec!["Identity".to_string(), "Identity_1".to_string()],
            points,
            scores: scores.iter().copied().collect(),
            shapes: Arc::clone(&shapes),
        };
        (session, shapes)
    }
}

impl Session for FakeSession {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        self.shapes.lock().unwrap().push(inputs[0].1.shape.clone());
        let score = self.scores.pop_front().unwrap_or(0.0);
        let mut data = Vec::with_capacity(TOTAL_LANDMARKS * 5);
        for i in 0..TOTAL_LANDMARKS {
            let (x, y) = self.points[i % self.points.len()];
            data.extend_from_slice(&[x, y, 0.0, 0.0, 0.0]);
        }
        let mut outputs = HashMap::new();
        outputs.insert(
            "Identity".to_string(),
            Tensor::new(vec![1, TOTAL_LANDMARKS * 5], data).unwrap(),
        );
        outputs.insert(
            "Identity_1".to_string(),
            Tensor::new(vec![1, 1], vec![score]).unwrap(),
        );
        Ok(outputs)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

fn frame(width: usize, height: usize) -> Image {
    Image::filled(Vec2::new(width, height), [40, 80, 120])
}

#[test]
fn test_detect_maps_input_pixels_to_normalized_frame() {
    let (session, shapes) = FakeSession::new(vec![(128.0, 128.0)], &[0.9]);
    let mut estimator = BlazePoseEstimator::from_session(Box::new(session));

    // 512x256 is letterboxed to 256x128 with 64 pixel bars above and below
    let pose = estimator.detect(&frame(512, 256)).unwrap().unwrap();

    assert_eq!(pose.len(), LANDMARK_COUNT);
    for landmark in pose.iter() {
        assert!((landmark.x - 0.5).abs() < 1e-4);
        assert!((landmark.y - 0.5).abs() < 1e-4);
        assert!((landmark.visibility - 0.5).abs() < 1e-4);
    }
    assert_eq!(shapes.lock().unwrap()[0], vec![1, 3, INPUT_SIZE, INPUT_SIZE]);
}

#[test]
fn test_low_pose_score_means_no_detection() {
    let (session, _) = FakeSession::new(vec![(128.0, 128.0)], &[0.3]);
    let mut estimator = BlazePoseEstimator::from_session(Box::new(session));
    assert!(estimator.detect(&frame(256, 256)).unwrap().is_none());
}

#[test]
fn test_detection_confidence_is_configurable() {
    let (session, _) = FakeSession::new(vec![(128.0, 128.0)], &[0.3]);
    let mut estimator =
        BlazePoseEstimator::from_session(Box::new(session)).with_detection_confidence(0.2);
    assert_eq!(estimator.detection_confidence(), 0.2);
    assert!(estimator.detect(&frame(256, 256)).unwrap().is_some());
}

#[test]
fn test_tracked_pose_runs_model_once_per_frame() {
    let points = vec![(64.0, 96.0), (192.0, 160.0)];
    let (session, shapes) = FakeSession::new(points, &[0.9, 0.9]);
    let mut estimator = BlazePoseEstimator::from_session(Box::new(session)).with_smoothing(1.0);

    assert!(estimator.detect(&frame(256, 256)).unwrap().is_some());
    assert!(estimator.detect(&frame(256, 256)).unwrap().is_some());
    assert_eq!(shapes.lock().unwrap().len(), 2);
}

#[test]
fn test_lost_track_falls_back_to_whole_frame() {
    let points = vec![(64.0, 96.0), (192.0, 160.0)];
    let (session, shapes) = FakeSession::new(points, &[0.9, 0.2, 0.9]);
    let mut estimator = BlazePoseEstimator::from_session(Box::new(session)).with_smoothing(1.0);

    let first = estimator.detect(&frame(256, 256)).unwrap().unwrap();
    let second = estimator.detect(&frame(256, 256)).unwrap().unwrap();

    assert_eq!(shapes.lock().unwrap().len(), 3);
    // the retry ran on the whole frame, so the mapping matches the first frame
    assert!((first[0].x - second[0].x).abs() < 1e-4);
    assert!((first[1].y - second[1].y).abs() < 1e-4);
}

#[test]
fn test_nhwc_layout_shape() {
    let (session, shapes) = FakeSession::new(vec![(128.0, 128.0)], &[0.9]);
    let mut estimator = BlazePoseEstimator::from_session(Box::new(session))
        .with_input_layout(InputLayout::Nhwc);
    estimator.detect(&frame(64, 64)).unwrap();
    assert_eq!(shapes.lock().unwrap()[0], vec![1, INPUT_SIZE, INPUT_SIZE, 3]);
}

#[test]
fn test_preprocess_letterbox_padding() {
    let image = Image::filled(Vec2::new(256, 128), [255, 255, 255]);
    let (tensor, letterbox) =
        preprocess(&image, Rect::full(image.size), InputLayout::Nchw).unwrap();

    assert_eq!(letterbox.pad, Vec2::new(0.0, 64.0));
    assert_eq!(letterbox.resized, Vec2::new(256, 128));
    // bar above the content
    assert_eq!(tensor.data[10 * INPUT_SIZE + 128], 0.0);
    // content
    assert!((tensor.data[128 * INPUT_SIZE + 128] - 1.0).abs() < 1e-6);
}

#[test]
fn test_preprocess_rejects_region_outside_frame() {
    let image = frame(100, 100);
    let roi = Rect::new(Vec2::new(50, 50), Vec2::new(80, 80));
    assert!(preprocess(&image, roi, InputLayout::Nchw).is_err());
}

#[test]
fn test_letterbox_maps_region_offset() {
    let letterbox = Letterbox::new(Rect::new(Vec2::new(100, 50), Vec2::new(128, 128)));
    let point = letterbox.to_frame(Vec2::new(128.0, 128.0));
    assert!((point.x - 164.0).abs() < 1e-4);
    assert!((point.y - 114.0).abs() < 1e-4);
}

#[test]
fn test_landmark_index_conversions() {
    assert_eq!(LandmarkIndex::try_from(0), Ok(LandmarkIndex::Nose));
    assert_eq!(LandmarkIndex::try_from(29), Ok(LandmarkIndex::LeftHeel));
    assert_eq!(LandmarkIndex::try_from(32), Ok(LandmarkIndex::RightFootIndex));
    assert!(LandmarkIndex::try_from(33).is_err());
    assert_eq!(usize::from(LandmarkIndex::RightShoulder), 12);
}

#[test]
fn test_roi_tracker_squares_and_enlarges_bounds() {
    let mut pose = [Landmark::default(); LANDMARK_COUNT];
    for (i, landmark) in pose.iter_mut().enumerate() {
        let (x, y) = if i % 2 == 0 { (0.25, 0.375) } else { (0.75, 0.625) };
        *landmark = Landmark {
            x,
            y,
            z: 0.0,
            visibility: 1.0,
        };
    }
    let mut tracker = RoiTracker::new();
    assert!(tracker.roi(Vec2::new(256, 256)).is_none());

    tracker.update(&pose, Vec2::new(256, 256));
    let roi = tracker.roi(Vec2::new(256, 256)).unwrap();
    assert_eq!(roi.origin, Vec2::new(48, 48));
    assert_eq!(roi.size, Vec2::new(160, 160));

    tracker.reset();
    assert!(tracker.roi(Vec2::new(256, 256)).is_none());
}

#[test]
fn test_smoother_averages_consecutive_poses() {
    let mut smoother = LandmarkSmoother::new(0.5);
    let mut pose = [Landmark::default(); LANDMARK_COUNT];
    smoother.apply(pose);
    pose[0].x = 1.0;
    let smoothed = smoother.apply(pose);
    assert!((smoothed[0].x - 0.5).abs() < 1e-6);

    smoother.reset();
    let fresh = smoother.apply(pose);
    assert_eq!(fresh[0].x, 1.0);
}

#[test]
fn test_draw_pose_skips_hidden_landmarks() {
    let mut image = Image::new(Vec2::new(100, 100), vec![0; 100 * 100 * 3], PixelFormat::Rgb8);
    let mut pose = [Landmark::default(); LANDMARK_COUNT];
    pose[11] = Landmark {
        x: 0.2,
        y: 0.2,
        z: 0.0,
        visibility: 0.9,
    };
    pose[12] = Landmark {
        x: 0.8,
        y: 0.2,
        z: 0.0,
        visibility: 0.9,
    };
    pose[0] = Landmark {
        x: 0.5,
        y: 0.8,
        z: 0.0,
        visibility: 0.1,
    };

    draw_pose(&mut image, &pose).unwrap();

    assert_eq!(image.rgb_at(50, 20), Some([224, 224, 224]));
    assert_eq!(image.rgb_at(20, 20), Some([255, 0, 0]));
    assert_eq!(image.rgb_at(50, 80), Some([0, 0, 0]));
}

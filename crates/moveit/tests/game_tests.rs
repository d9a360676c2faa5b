use {
    base::Vec2,
    image::{Image, PixelFormat},
    inference::{
        InferError,
        pose::{LANDMARK_COUNT, Landmark, PoseEstimator, PoseLandmarks},
    },
    moveit::{
        Detection, MoveError, VideoJob, VideoPipeline,
        game::{
            BODY_PARTS, ChallengeGame, ClickOutcome, ClickSlot, GameSurface, MAX_ROUNDS, Phase,
            draw_round_info, play,
        },
    },
    rand::{SeedableRng, rngs::StdRng},
    std::{collections::VecDeque, sync::Arc, time::Duration},
    video::{MemoryDevice, VideoIn},
};

const FRAME: Vec2<usize> = Vec2 { x: 64, y: 64 };

fn centered_pose() -> PoseLandmarks {
    [Landmark {
        x: 0.5,
        y: 0.5,
        z: 0.0,
        visibility: 0.9,
    }; LANDMARK_COUNT]
}

struct AlwaysCentered;

impl PoseEstimator for AlwaysCentered {
    fn detect(&mut self, _image: &Image) -> Result<Option<PoseLandmarks>, InferError> {
        Ok(Some(centered_pose()))
    }
}

/// Surface that clicks a scripted position each time a round frame is shown.
struct ScriptedSurface {
    clicks: Arc<ClickSlot>,
    script: VecDeque<Vec2<u32>>,
    shown: usize,
    waits: usize,
    open: bool,
    close_after: Option<usize>,
}

impl ScriptedSurface {
    fn new(clicks: Arc<ClickSlot>, script: &[(u32, u32)]) -> Self {
        Self {
            clicks,
            script: script.iter().map(|&(x, y)| Vec2::new(x, y)).collect(),
            shown: 0,
            waits: 0,
            open: true,
            close_after: None,
        }
    }
}

impl GameSurface for ScriptedSurface {
    fn show(&mut self, _image: &Image) -> Result<(), MoveError> {
        self.shown += 1;
        if self.shown == 1 {
            // clicking around on the welcome screen
            self.clicks.store(Vec2::new(0, 0));
        } else if let Some(click) = self.script.pop_front() {
            self.clicks.store(click);
        }
        if self.close_after == Some(self.shown) {
            self.open = false;
        }
        Ok(())
    }

    fn wait_for_input(&mut self) -> Result<bool, MoveError> {
        self.waits += 1;
        Ok(self.open)
    }

    fn is_open(&self) -> bool {
        self.open
    }
}

async fn game_pipeline(frame_count: usize) -> VideoPipeline {
    let frames = (0..frame_count)
        .map(|_| Image::filled(FRAME, [200, 200, 200]))
        .collect();
    let source = VideoIn::from_device(Box::new(MemoryDevice::new("game.mp4", frames)))
        .await
        .unwrap();
    VideoPipeline::new(VideoJob::new("game.mp4", 1), source, Box::new(AlwaysCentered))
        .with_overlay(true)
}

#[tokio::test]
async fn test_score_counts_clicks_within_tolerance() {
    let clicks = Arc::new(ClickSlot::new());
    // target is at (32, 32); hits need both offsets strictly below 15
    let mut surface = ScriptedSurface::new(
        Arc::clone(&clicks),
        &[(32, 32), (40, 32), (50, 32), (32, 46), (32, 47)],
    );
    let mut pipeline = game_pipeline(8).await;
    let mut game = ChallengeGame::new(StdRng::seed_from_u64(11));

    let summary = play(&mut pipeline, &mut game, &mut surface, &clicks, Duration::ZERO)
        .await
        .unwrap();

    assert_eq!(summary.correct, 3);
    assert_eq!(summary.rounds_played, MAX_ROUNDS);
    assert_eq!(summary.frames_seen, 5);
    assert_eq!(game.phase(), Phase::GameOver);
    // welcome, five rounds, game over
    assert_eq!(surface.shown, 7);
    assert_eq!(surface.waits, 2);
}

#[tokio::test]
async fn test_video_end_finishes_game_early() {
    let clicks = Arc::new(ClickSlot::new());
    let mut surface = ScriptedSurface::new(Arc::clone(&clicks), &[(32, 32), (0, 0)]);
    let mut pipeline = game_pipeline(3).await;
    let mut game = ChallengeGame::new(StdRng::seed_from_u64(5));

    let summary = play(&mut pipeline, &mut game, &mut surface, &clicks, Duration::ZERO)
        .await
        .unwrap();

    assert_eq!(summary.correct, 1);
    assert_eq!(summary.rounds_played, 2);
    assert_eq!(summary.frames_seen, 3);
    assert_eq!(game.phase(), Phase::GameOver);
}

#[tokio::test]
async fn test_closed_window_ends_game() {
    let clicks = Arc::new(ClickSlot::new());
    let mut surface = ScriptedSurface::new(Arc::clone(&clicks), &[]);
    surface.close_after = Some(2);
    let mut pipeline = game_pipeline(10).await;
    let mut game = ChallengeGame::new(StdRng::seed_from_u64(5));

    let summary = play(&mut pipeline, &mut game, &mut surface, &clicks, Duration::ZERO)
        .await
        .unwrap();

    assert_eq!(summary.frames_seen, 1);
    assert_eq!(surface.shown, 2);
}

#[test]
fn test_misses_never_repeat_the_target() {
    let mut rng_seed = 0;
    for _ in 0..40 {
        rng_seed += 1;
        let mut game = ChallengeGame::new(StdRng::seed_from_u64(rng_seed));
        game.start();
        while game.phase() != Phase::GameOver {
            let previous = game.target();
            let outcome = game.step(&Detection::NoDetection, FRAME, Some(Vec2::new(1.0, 1.0)));
            assert_eq!(outcome, Some(ClickOutcome::Miss));
            assert_ne!(game.target(), previous);
            assert!(BODY_PARTS.contains(game.target()));
        }
        assert_eq!(game.correct(), 0);
        assert_eq!(game.summary().rounds_played, MAX_ROUNDS);
    }
}

#[test]
fn test_frames_without_click_do_not_consume_rounds() {
    let mut game = ChallengeGame::new(StdRng::seed_from_u64(3));
    assert_eq!(game.phase(), Phase::Welcome);
    assert_eq!(game.step(&Detection::Pose(centered_pose()), FRAME, None), None);

    game.start();
    for _ in 0..10 {
        assert_eq!(game.step(&Detection::Pose(centered_pose()), FRAME, None), None);
    }
    assert_eq!(game.phase(), Phase::Round(1));
    assert_eq!(game.summary().frames_seen, 10);
    assert_eq!(game.last_click(), None);
}

#[test]
fn test_hit_tolerance_is_strict() {
    let mut game = ChallengeGame::new(StdRng::seed_from_u64(9));
    game.start();
    let detection = Detection::Pose(centered_pose());
    assert_eq!(
        game.target_position(&detection, FRAME),
        Some(Vec2::new(32.0, 32.0))
    );
    assert_eq!(game.target_position(&Detection::NoDetection, FRAME), None);

    assert_eq!(
        game.step(&detection, FRAME, Some(Vec2::new(17.0, 32.0))),
        Some(ClickOutcome::Miss)
    );
    assert_eq!(
        game.step(&detection, FRAME, Some(Vec2::new(17.5, 46.5))),
        Some(ClickOutcome::Hit)
    );
    assert_eq!(game.phase(), Phase::Round(3));
    assert_eq!(game.correct(), 1);
}

#[test]
fn test_allow_list_landmarks() {
    let indices: Vec<usize> = BODY_PARTS.iter().map(|p| usize::from(p.landmark)).collect();
    assert_eq!(
        indices,
        vec![0, 2, 5, 11, 12, 13, 14, 15, 16, 25, 26, 29, 30]
    );
}

#[test]
fn test_click_slot_keeps_newest_click() {
    let slot = ClickSlot::new();
    assert!(!slot.is_pending());
    assert_eq!(slot.take(), None);

    slot.store(Vec2::new(10, 20));
    slot.store(Vec2::new(300, 400));
    assert!(slot.is_pending());
    assert_eq!(slot.take(), Some(Vec2::new(300, 400)));
    assert_eq!(slot.take(), None);

    slot.store(Vec2::new(1, 2));
    slot.clear();
    assert_eq!(slot.take(), None);
}

#[test]
fn test_round_info_names_target_only_with_pose() {
    let count_red = |image: &Image| {
        image
            .data
            .chunks_exact(3)
            .filter(|pixel| **pixel == [255, 0, 0])
            .count()
    };
    let blank = || Image::new(Vec2::new(640, 360), vec![0; 640 * 360 * 3], PixelFormat::Rgb8);

    let mut with_target = blank();
    draw_round_info(&mut with_target, Some("left knee"), 2, 3).unwrap();
    assert!(count_red(&with_target) > 0);

    let mut without_target = blank();
    draw_round_info(&mut without_target, None, 2, 3).unwrap();
    assert_eq!(count_red(&without_target), 0);
    assert_ne!(without_target.data, blank().data);
}

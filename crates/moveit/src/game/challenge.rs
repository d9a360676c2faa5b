use {
    super::{BODY_PARTS, BodyPart},
    crate::Detection,
    base::Vec2,
    rand::Rng,
};

/// Number of clicks in one game.
pub const MAX_ROUNDS: u32 = 5;

/// A click scores when it is closer than this many pixels to the target on both axes.
pub const HIT_TOLERANCE: f32 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Welcome,
    /// 1-based round currently waiting for a click.
    Round(u32),
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Hit,
    Miss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameSummary {
    pub correct: u32,
    pub rounds_played: u32,
    pub frames_seen: u64,
}

/// Round and score bookkeeping, independent of video and windowing.
pub struct ChallengeGame<R: Rng> {
    rng: R,
    phase: Phase,
    target: usize,
    correct: u32,
    rounds_played: u32,
    frames_seen: u64,
    last_click: Option<Vec2<f32>>,
}

impl<R: Rng> ChallengeGame<R> {
    pub fn new(mut rng: R) -> Self {
        let target = rng.gen_range(0..BODY_PARTS.len());
        Self {
            rng,
            phase: Phase::Welcome,
            target,
            correct: 0,
            rounds_played: 0,
            frames_seen: 0,
            last_click: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn target(&self) -> &'static BodyPart {
        &BODY_PARTS[self.target]
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Round shown to the player.
    pub fn round(&self) -> u32 {
        match self.phase {
            Phase::Welcome => 1,
            Phase::Round(round) => round,
            Phase::GameOver => self.rounds_played.max(1),
        }
    }

    pub fn last_click(&self) -> Option<Vec2<f32>> {
        self.last_click
    }

    /// Leave the welcome screen.
    pub fn start(&mut self) {
        if self.phase == Phase::Welcome {
            self.phase = Phase::Round(1);
        }
    }

    /// Pixel position of the current target in a frame of `frame_size`.
    pub fn target_position(
        &self,
        detection: &Detection,
        frame_size: Vec2<usize>,
    ) -> Option<Vec2<f32>> {
        let landmark = detection.landmarks()?[usize::from(self.target().landmark)];
        let size = frame_size.to_f32();
        Some(Vec2::new(landmark.x * size.x, landmark.y * size.y))
    }

    /// Account for one frame and, if the player clicked, score the click.
    pub fn step(
        &mut self,
        detection: &Detection,
        frame_size: Vec2<usize>,
        click: Option<Vec2<f32>>,
    ) -> Option<ClickOutcome> {
        let round = match self.phase {
            Phase::Round(round) => round,
            _ => return None,
        };
        self.frames_seen += 1;
        let click = click?;
        self.last_click = Some(click);

        let hit = self
            .target_position(detection, frame_size)
            .map(|target| click.max_axis_distance(target) < HIT_TOLERANCE)
            .unwrap_or(false);

        let outcome = if hit {
            self.correct += 1;
            self.target = self.rng.gen_range(0..BODY_PARTS.len());
            ClickOutcome::Hit
        } else {
            let previous = self.target;
            while self.target == previous {
                self.target = self.rng.gen_range(0..BODY_PARTS.len());
            }
            ClickOutcome::Miss
        };

        self.rounds_played += 1;
        self.phase = if round >= MAX_ROUNDS {
            Phase::GameOver
        } else {
            Phase::Round(round + 1)
        };
        Some(outcome)
    }

    /// End the game early, e.g. when the video runs out.
    pub fn finish(&mut self) {
        self.phase = Phase::GameOver;
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            correct: self.correct,
            rounds_played: self.rounds_played,
            frames_seen: self.frames_seen,
        }
    }
}

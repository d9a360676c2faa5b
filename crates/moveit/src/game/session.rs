use {
    super::{ChallengeGame, ClickOutcome, ClickSlot, GameSummary, Phase},
    super::{draw_game_over, draw_round_info, draw_welcome},
    crate::{MoveError, VideoPipeline},
    image::Image,
    rand::Rng,
    std::time::Duration,
};

/// Pause between game frames.
pub const FRAME_DELAY: Duration = Duration::from_millis(20);

/// Where the game is shown and where player input comes from.
///
/// Clicks are not returned here; the surface stores them into the
/// `ClickSlot` it was created with while it processes window events.
pub trait GameSurface {
    fn show(&mut self, image: &Image) -> Result<(), MoveError>;
    /// Block until a key press or click. Returns false if the surface was closed instead.
    fn wait_for_input(&mut self) -> Result<bool, MoveError>;
    fn is_open(&self) -> bool;
}

/// Run one game over the frames of `pipeline`.
///
/// Ends after `MAX_ROUNDS` clicks, at the end of the video, or when the
/// surface closes.
pub async fn play<R: Rng>(
    pipeline: &mut VideoPipeline,
    game: &mut ChallengeGame<R>,
    surface: &mut dyn GameSurface,
    clicks: &ClickSlot,
    frame_delay: Duration,
) -> Result<GameSummary, MoveError> {
    let mut last_frame: Option<Image> = None;

    while game.phase() != Phase::GameOver {
        if !surface.is_open() {
            log::info!("window closed, ending game");
            break;
        }
        let (mut image, result) = match pipeline.next_detection().await? {
            Some(next) => next,
            None => {
                log::info!("video ended before the last round");
                break;
            }
        };

        if game.phase() == Phase::Welcome {
            let mut welcome = image.clone();
            draw_welcome(&mut welcome)?;
            surface.show(&welcome)?;
            if !surface.wait_for_input()? {
                break;
            }
            // whatever dismissed the welcome screen is not an answer
            clicks.clear();
            game.start();
        }

        let target = result.detection.has_pose().then(|| game.target().name);
        draw_round_info(&mut image, target, game.correct(), game.round())?;
        surface.show(&image)?;

        let click = clicks.take().map(|position| position.map(|v| v as f32));
        match game.step(&result.detection, image.size, click) {
            Some(ClickOutcome::Hit) => log::info!(
                "frame {}: hit, {} correct, next target {}",
                result.frame_index,
                game.correct(),
                game.target().name
            ),
            Some(ClickOutcome::Miss) => log::info!(
                "frame {}: miss, next target {}",
                result.frame_index,
                game.target().name
            ),
            None => {}
        }

        last_frame = Some(image);
        tokio::time::sleep(frame_delay).await;
    }
    game.finish();

    if let Some(mut image) = last_frame {
        if surface.is_open() {
            draw_game_over(&mut image)?;
            surface.show(&image)?;
            surface.wait_for_input()?;
        }
    }

    let summary = game.summary();
    log::info!(
        "game over: {} of {} correct, {} frames",
        summary.correct,
        summary.rounds_played,
        summary.frames_seen
    );
    Ok(summary)
}

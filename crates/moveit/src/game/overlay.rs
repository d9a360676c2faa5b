use {
    super::MAX_ROUNDS,
    base::Vec2,
    image::{
        Image, ImageError,
        draw::{Color, FontSize, RgbColor, draw_text, fill_rect},
    },
};

pub const WELCOME_LINES: [&str; 8] = [
    "Welcome to Guess the body part game, to play please follow these instructions:",
    "1- Wait until you see the required body part on the top-left corner of this screen.",
    "2- Click on the designated body part, one click is enough.",
    "3- If your guess is correct, you will get 1 point.",
    "4- You will have 5 rounds.",
    "5- Your score will be displayed on the bottom-left corner of the window.",
    "Ready? Press any button to start.",
    "Good luck!!! :)",
];

pub const GAME_OVER_LINES: [&str; 3] = [
    "Game Over!!!",
    "Final score are on the bottom-left corner of the screen",
    "See you soon :)!!!",
];

const TEXT_COLOR: Color = Color::BLACK;
const TARGET_COLOR: Color = Color::RED;
const BACKDROP_COLOR: Color = Color::WHITE;

// layout is specified for 1080-line frames and scaled to the actual height
const REFERENCE_HEIGHT: f32 = 1080.0;

fn layout_scale(image: &Image) -> f32 {
    image.size.y as f32 / REFERENCE_HEIGHT
}

fn font_for(image: &Image) -> FontSize {
    match image.size.y {
        0..360 => FontSize::Small,
        360..720 => FontSize::Medium,
        _ => FontSize::Large,
    }
}

// text on a white box sized to the glyphs, so it stays readable on any frame
fn boxed_text(
    image: &mut Image,
    text: &str,
    position: Vec2<i32>,
    font: FontSize,
    color: Color,
) -> Result<(), ImageError> {
    let glyph = font.glyph_size();
    let margin = (glyph.y / 4) as i32;
    fill_rect(
        image,
        Vec2::new(position.x - margin, position.y - glyph.y as i32),
        Vec2::new(
            font.text_width(text) + 2 * margin as usize,
            glyph.y + 2 * margin as usize,
        ),
        BACKDROP_COLOR,
    )?;
    draw_text(image, text, position, font, color)
}

/// Game instructions over the first frame.
pub fn draw_welcome(image: &mut Image) -> Result<(), ImageError> {
    let scale = layout_scale(image);
    let font = font_for(image);
    let x = (image.size.x / 6) as i32;
    for (i, line) in WELCOME_LINES.iter().enumerate() {
        let y = ((70.0 + 80.0 * i as f32) * scale) as i32;
        boxed_text(image, line, Vec2::new(x, y), font, TEXT_COLOR)?;
    }
    Ok(())
}

/// Target prompt at the top left and score and round at the bottom left.
///
/// `target` is `None` when the frame has no pose, leaving only the prompt.
pub fn draw_round_info(
    image: &mut Image,
    target: Option<&str>,
    correct: u32,
    round: u32,
) -> Result<(), ImageError> {
    let scale = layout_scale(image);
    let font = font_for(image);
    let height = image.size.y as f32;
    let prompt = "Click on: ";
    let top = Vec2::new(10, (30.0 * scale).max(font.glyph_size().y as f32) as i32);

    boxed_text(image, prompt, top, font, TEXT_COLOR)?;
    if let Some(target) = target {
        let x = top.x + font.text_width(prompt) as i32;
        boxed_text(image, target, Vec2::new(x, top.y), font, TARGET_COLOR)?;
    }

    let score = format!(
        "You have answered : {} out of {} correctly",
        correct, MAX_ROUNDS
    );
    boxed_text(
        image,
        &score,
        Vec2::new(10, (height - 80.0 * scale) as i32),
        font,
        TEXT_COLOR,
    )?;
    boxed_text(
        image,
        &format!("Round: {}", round),
        Vec2::new(10, (height - 40.0 * scale) as i32),
        font,
        TEXT_COLOR,
    )
}

/// Closing message centered on the last frame.
pub fn draw_game_over(image: &mut Image) -> Result<(), ImageError> {
    let scale = layout_scale(image);
    let font = font_for(image);
    let center = image.size.to_f32() * 0.5;
    for (i, line) in GAME_OVER_LINES.iter().enumerate() {
        let x = center.x - font.text_width(line) as f32 * 0.5;
        let y = center.y + (i as f32 - 1.0) * 50.0 * scale;
        boxed_text(image, line, Vec2::new(x as i32, y as i32), font, TEXT_COLOR)?;
    }
    Ok(())
}

use {
    super::{POSE_CONNECTIONS, PoseLandmarks},
    crate::InferError,
    base::Vec2,
    image::{
        Image,
        draw::{Color, draw_line, draw_marker},
    },
};

// landmarks less visible than this are left out of the skeleton
const MIN_VISIBILITY: f32 = 0.5;

const CONNECTION_COLOR: Color = Color::new(224, 224, 224);
const LANDMARK_COLOR: Color = Color::new(255, 0, 0);

/// Draw the skeleton of `landmarks` onto `image`.
pub fn draw_pose(image: &mut Image, landmarks: &PoseLandmarks) -> Result<(), InferError> {
    let size = image.size.to_f32();
    // odd widths keep lines centered on the landmark
    let stroke = (image.size.x.max(image.size.y) / 960) as u32 * 2 + 1;
    let to_pixel = |index: usize| {
        Vec2::new(
            (landmarks[index].x * size.x) as i32,
            (landmarks[index].y * size.y) as i32,
        )
    };

    for &(from, to) in POSE_CONNECTIONS.iter() {
        if landmarks[from].visibility < MIN_VISIBILITY
            || landmarks[to].visibility < MIN_VISIBILITY
        {
            continue;
        }
        draw_line(image, to_pixel(from), to_pixel(to), CONNECTION_COLOR, stroke)?;
    }
    for (index, landmark) in landmarks.iter().enumerate() {
        if landmark.visibility >= MIN_VISIBILITY {
            draw_marker(image, to_pixel(index), stroke * 2 + 3, LANDMARK_COLOR)?;
        }
    }
    Ok(())
}

use {
    super::{LANDMARK_COUNT, Landmark, Letterbox, PoseLandmarks},
    crate::InferError,
    base::{Tensor, Vec2},
};

// x, y, z, visibility, presence
const VALUES_PER_LANDMARK: usize = 5;

fn sigmoid(value: f32) -> f32 {
    1.0 / (1.0 + (-value).exp())
}

/// Convert the raw landmark output into frame-normalized landmarks.
///
/// Only the first 33 entries are read; the auxiliary landmarks some exports
/// append after them are ignored.
pub fn decode_landmarks(
    raw: &Tensor<f32>,
    letterbox: &Letterbox,
    frame_size: Vec2<usize>,
) -> Result<PoseLandmarks, InferError> {
    if raw.len() < LANDMARK_COUNT * VALUES_PER_LANDMARK || raw.len() % VALUES_PER_LANDMARK != 0 {
        return Err(InferError::ShapeMismatch {
            expected: format!(
                "at least {} values in groups of {}",
                LANDMARK_COUNT * VALUES_PER_LANDMARK,
                VALUES_PER_LANDMARK
            ),
            got: format!("{:?}", raw.shape),
        });
    }
    if frame_size.area() == 0 {
        return Err(InferError::ShapeMismatch {
            expected: "non-empty frame".to_string(),
            got: format!("{:?}", frame_size),
        });
    }

    let frame = frame_size.to_f32();
    let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
    for (landmark, values) in landmarks
        .iter_mut()
        .zip(raw.data.chunks_exact(VALUES_PER_LANDMARK))
    {
        let position = letterbox.to_frame(Vec2::new(values[0], values[1]));
        *landmark = Landmark {
            x: position.x / frame.x,
            y: position.y / frame.y,
            z: values[2] / letterbox.scale.x / frame.x,
            visibility: sigmoid(values[3]),
        };
    }
    Ok(landmarks)
}

/// Probability that the model input contains a person.
pub fn pose_score(flag: &Tensor<f32>) -> Result<f32, InferError> {
    let raw = *flag.data.first().ok_or_else(|| InferError::ShapeMismatch {
        expected: "[1, 1]".to_string(),
        got: format!("{:?}", flag.shape),
    })?;
    // some exports emit the logit rather than the probability
    if (0.0..=1.0).contains(&raw) {
        Ok(raw)
    } else {
        Ok(sigmoid(raw))
    }
}

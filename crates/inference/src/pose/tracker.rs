use {
    super::PoseLandmarks,
    base::{Rect, Vec2},
};

// enlargement of the landmark bounding box used as the next search region
const ROI_SCALE: f32 = 1.25;

/// Derives the region to search in the next frame from the last detected pose.
#[derive(Debug, Clone, Default)]
pub struct RoiTracker {
    roi: Option<Rect<f32>>,
}

impl RoiTracker {
    pub fn new() -> Self {
        Self { roi: None }
    }

    /// Search region for the next frame in whole pixels, if a pose is being tracked.
    pub fn roi(&self, frame_size: Vec2<usize>) -> Option<Rect<usize>> {
        let roi = self.roi?.clamp_to(frame_size);
        if roi.size.area() == 0 {
            None
        } else {
            Some(roi)
        }
    }

    pub fn update(&mut self, landmarks: &PoseLandmarks, frame_size: Vec2<usize>) {
        let frame = frame_size.to_f32();
        let mut min = Vec2::new(f32::MAX, f32::MAX);
        let mut max = Vec2::new(f32::MIN, f32::MIN);
        for landmark in landmarks {
            let (x, y) = (landmark.x * frame.x, landmark.y * frame.y);
            min = Vec2::new(min.x.min(x), min.y.min(y));
            max = Vec2::new(max.x.max(x), max.y.max(y));
        }
        let bounds = Rect::from_min_max(min, max);
        self.roi = if bounds.is_empty() {
            None
        } else {
            Some(bounds.squared_scaled(ROI_SCALE))
        };
    }

    pub fn reset(&mut self) {
        self.roi = None;
    }
}

/// Exponential moving average over consecutive poses of one video.
#[derive(Debug, Clone)]
pub struct LandmarkSmoother {
    alpha: f32,
    last: Option<PoseLandmarks>,
}

impl LandmarkSmoother {
    /// `alpha` is the weight of the newest pose; 1.0 disables smoothing.
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            last: None,
        }
    }

    pub fn apply(&mut self, current: PoseLandmarks) -> PoseLandmarks {
        let smoothed = match &self.last {
            Some(last) => {
                let mut smoothed = current;
                for (value, previous) in smoothed.iter_mut().zip(last.iter()) {
                    value.x = self.alpha * value.x + (1.0 - self.alpha) * previous.x;
                    value.y = self.alpha * value.y + (1.0 - self.alpha) * previous.y;
                    value.z = self.alpha * value.z + (1.0 - self.alpha) * previous.z;
                }
                smoothed
            }
            None => current,
        };
        self.last = Some(smoothed);
        smoothed
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

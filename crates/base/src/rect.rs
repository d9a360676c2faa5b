use crate::Vec2;

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect<T> {
    pub origin: Vec2<T>,
    pub size: Vec2<T>,
}

impl<T> Rect<T> {
    pub fn new(origin: Vec2<T>, size: Vec2<T>) -> Self {
        Self { origin, size }
    }
}

impl Rect<f32> {
    pub fn from_min_max(min: Vec2<f32>, max: Vec2<f32>) -> Self {
        Self {
            origin: min,
            size: max - min,
        }
    }

    pub fn max(&self) -> Vec2<f32> {
        self.origin + self.size
    }

    pub fn center(&self) -> Vec2<f32> {
        self.origin + self.size * 0.5
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Square of side `max(width, height) * scale` sharing this rectangle's center.
    pub fn squared_scaled(&self, scale: f32) -> Self {
        let side = self.size.x.max(self.size.y) * scale;
        let center = self.center();
        Self {
            origin: Vec2::new(center.x - side * 0.5, center.y - side * 0.5),
            size: Vec2::new(side, side),
        }
    }

    /// Intersection with `[0, bounds.x) x [0, bounds.y)`, in whole pixels.
    pub fn clamp_to(&self, bounds: Vec2<usize>) -> Rect<usize> {
        let max = self.max();
        let x0 = self.origin.x.max(0.0).min(bounds.x as f32) as usize;
        let y0 = self.origin.y.max(0.0).min(bounds.y as f32) as usize;
        let x1 = max.x.max(0.0).min(bounds.x as f32).ceil() as usize;
        let y1 = max.y.max(0.0).min(bounds.y as f32).ceil() as usize;
        Rect {
            origin: Vec2::new(x0, y0),
            size: Vec2::new(x1.saturating_sub(x0), y1.saturating_sub(y0)),
        }
    }
}

impl Rect<usize> {
    pub fn full(size: Vec2<usize>) -> Self {
        Self {
            origin: Vec2::new(0, 0),
            size,
        }
    }

    pub fn to_f32(&self) -> Rect<f32> {
        Rect {
            origin: self.origin.to_f32(),
            size: self.size.to_f32(),
        }
    }
}
